use super::super::populator::Populator;
use super::super::search_engine::SearchResults;
use super::super::session::Session;
use super::super::ui::Ui;

/// Answers the "search requested" event.
pub struct Search {
    session: Session,
}

impl Search {

    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    /// Queries the index and redraws the results panel. Blank text only hides the
    /// panel. The caller schedules a feed load when `load_requested` comes back set.
    pub fn handle(&self, ui: &mut Ui, text: &str) -> SearchResults {
        let max_candidates = self.session.config().search.max_candidates;
        let results = self.session.index().query(text, max_candidates);

        if text.trim().is_empty() {
            Populator::hide_results(ui);
        } else {
            Populator::populate_results(ui, &results.records, &self.session);
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::dom::Document;
    use crate::models::ProductRecord;

    const HEADER: &str = r#"<header><input id="header-search-input"><div id="header-search-results" style="display:none"></div></header><main id="main-content"></main>"#;

    fn record(title: &str, author: &str, link: &str) -> ProductRecord {
        ProductRecord {
            title: title.to_string(),
            author: author.to_string(),
            link: link.to_string(),
            ..ProductRecord::default()
        }
    }

    fn setup(seed: Vec<ProductRecord>) -> (Search, Ui) {
        let session = Session::new(SiteConfig::default(), seed);
        let ui = Ui::new(Document::parse(HEADER), "main-content");
        (Search::new(session), ui)
    }

    fn panel_state(ui: &Ui) -> (Option<String>, usize) {
        let panel = ui.results_panel().unwrap();
        let document = ui.document();
        (document.display(panel), document.select(panel, ".result-item").len())
    }

    #[test]
    fn matches_show_the_panel() {
        let (search, mut ui) = setup(vec![
            record("Atomic Habits", "James Clear", "/a"),
            record("Deep Work", "Cal Newport", "/b"),
        ]);

        let results = search.handle(&mut ui, "atomic");
        assert_eq!(results.records.len(), 1);
        assert_eq!(panel_state(&ui), (Some(String::from("block")), 1));
    }

    #[test]
    fn no_matches_clear_and_hide_the_panel() {
        let (search, mut ui) = setup(vec![record("Atomic Habits", "James Clear", "/a")]);

        search.handle(&mut ui, "atomic");
        search.handle(&mut ui, "xyz");
        assert_eq!(panel_state(&ui), (Some(String::from("none")), 0));
    }

    #[test]
    fn blank_query_hides_the_panel() {
        let (search, mut ui) = setup(vec![record("Atomic Habits", "James Clear", "/a")]);

        search.handle(&mut ui, "atomic");
        let results = search.handle(&mut ui, "   ");
        assert!(results.is_empty());
        assert_eq!(ui.document().display(ui.results_panel().unwrap()).as_deref(), Some("none"));
    }

    #[test]
    fn panel_shows_at_most_eight_of_ten_candidates() {
        let seed = (0..20).map(|n| record(&format!("Novel {n}"), "", &format!("/n/{n}"))).collect();
        let (search, mut ui) = setup(seed);

        let results = search.handle(&mut ui, "novel");
        assert_eq!(results.records.len(), 10);
        assert_eq!(panel_state(&ui), (Some(String::from("block")), 8));
    }

    #[test]
    fn empty_index_asks_for_a_load_once() {
        let (search, mut ui) = setup(Vec::new());

        assert!(search.handle(&mut ui, "atomic").load_requested);
        assert!(!search.handle(&mut ui, "atomic").load_requested);
        assert_eq!(panel_state(&ui), (Some(String::from("none")), 0));
    }
}
