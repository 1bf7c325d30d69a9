mod product;
mod category;
mod feed;

pub use self::product::ProductRecord;
pub use self::category::{Category, CategoryMap};
pub use self::feed::Feed;
