use super::dom::ElementNode;
use super::models::{CategoryMap, ProductRecord};
use super::session::Session;
use super::ui::Ui;
use super::widgets::{HomeSections, SearchResultItem};

pub struct Populator {}

impl Populator {

    /// Refills the results panel. Returns whether the panel is left visible;
    /// `None` when the page has no panel.
    pub fn populate_results(ui: &mut Ui, records: &[ProductRecord], session: &Session) -> Option<bool> {
        let panel = ui.results_panel()?;
        let search = &session.config().search;
        let items: Vec<ElementNode> = records
            .iter()
            .take(search.max_shown)
            .map(|record| SearchResultItem::new(record, session.placeholder_image(), search.title_limit).build())
            .collect();

        let document = ui.document_mut();
        document.replace_children(panel, items);

        let visible = !records.is_empty();
        document.set_display(panel, if visible { "block" } else { "none" });
        Some(visible)
    }

    pub fn hide_results(ui: &mut Ui) {
        if let Some(panel) = ui.results_panel() {
            ui.document_mut().set_display(panel, "none");
        }
    }

    /// Inserts the category block ahead of the existing content. Returns the number of
    /// sections rendered, or `None` when the page has no content container.
    pub fn populate_home(ui: &mut Ui, categories: &CategoryMap, session: &Session) -> Option<usize> {
        let container = ui.content()?;
        let config = session.config();
        let block = HomeSections::new(
            categories,
            &config.category_order,
            &config.home,
            session.placeholder_image(),
        )
        .build();

        let sections = block.child_count();
        ui.document_mut().prepend(container, block);
        Some(sections)
    }
}
