pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const SEARCH_RESULTS_ID: &str = "header-search-results";
pub const SEARCH_INPUT_ID: &str = "header-search-input";
pub const CONTENT_CONTAINER_ID: &str = "main-content";

pub const DEFAULT_FEED_PATH: &str = "/data/default.json";
pub const PLACEHOLDER_IMAGE_PATH: &str = "/assets/images/no-image.png";

pub const HOME_ROUTES: [&str; 3] = ["/", "/index.html", "/index"];

pub const DEFAULT_CATEGORY_ORDER: [&str; 7] = [
    "best_seller",
    "books",
    "electronics",
    "foods",
    "furniture",
    "beauty",
    "others",
];

pub const MAX_SEARCH_CANDIDATES: usize = 10;
pub const MAX_SEARCH_SHOWN: usize = 8;
pub const SEARCH_TITLE_LIMIT: usize = 70;

pub const CARDS_PER_SECTION: usize = 8;
pub const DESCRIPTION_LIMIT: usize = 220;

pub const SECTION_TITLE_PREFIX: &str = "Rokomari PromoCode For";
pub const AUTHOR_LABEL: &str = "লেখক: ";
pub const OFFER_TEXT: &str = "ডিসকাউন্ট পেতে এখানে ক্লিক করুন";
pub const CTA_TEXT: &str = "Buy Now";

pub const DEFAULT_INCLUDES: [(&str, &str); 2] = [
    ("inject-header", "/_includes/header.html"),
    ("inject-footer", "/_includes/footer.html"),
];
