use super::super::error::LoadError;
use super::super::models::{CategoryMap, Feed};
use super::super::populator::Populator;
use super::super::session::Session;
use super::super::ui::Ui;

/// Category cards at the top of the home page.
pub struct Home {
    session: Session,
}

impl Home {

    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn is_eligible(&self, pathname: &str) -> bool {
        self.session.config().is_home(pathname)
    }

    /// Renders a fetched feed. Returns the number of sections inserted, `None` when the
    /// page has no content container. A failed fetch inserts nothing.
    pub fn render(&self, ui: &mut Ui, feed: Result<Feed, LoadError>) -> Result<Option<usize>, LoadError> {
        let feed = feed?;
        log::debug!("home feed carries {} item(s)", feed.item_count());
        let categories = CategoryMap::from_feed(&feed);
        for key in categories.unlisted(&self.session.config().category_order) {
            log::debug!("category {key:?} is not in the display order");
        }
        Ok(Populator::populate_home(ui, &categories, &self.session))
    }
}
