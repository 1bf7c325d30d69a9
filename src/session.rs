use crate::config::SiteConfig;
use crate::models::ProductRecord;
use crate::search_engine::ProductIndex;

use std::rc::Rc;

struct SessionState {
    config: SiteConfig,
    index: ProductIndex,
    feed_path: String,
    placeholder_image: String,
}

/// Per-page state shared by the search and home paths. Cloning hands out another
/// reference to the same session.
#[derive(Clone)]
pub struct Session {
    state: Rc<SessionState>,
}

impl Session {

    #[must_use]
    pub fn new(config: SiteConfig, seed: Vec<ProductRecord>) -> Self {
        let feed_path = config.feed_path();
        let placeholder_image = config.placeholder_image();
        let state = SessionState {
            config,
            index: ProductIndex::with_seed(seed),
            feed_path,
            placeholder_image,
        };

        Self { state: Rc::new(state) }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.state.config
    }

    #[must_use]
    pub fn index(&self) -> &ProductIndex {
        &self.state.index
    }

    #[must_use]
    pub fn feed_path(&self) -> &str {
        &self.state.feed_path
    }

    #[must_use]
    pub fn placeholder_image(&self) -> &str {
        &self.state.placeholder_image
    }
}
