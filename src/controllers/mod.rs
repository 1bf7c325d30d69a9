mod search;
mod outside_click;
mod home;
mod includes;

pub use self::search::Search as SearchController;
pub use self::outside_click::OutsideClick as OutsideClickController;
pub use self::home::Home as HomeController;
pub use self::includes::Includes as IncludesController;
