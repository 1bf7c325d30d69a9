use super::super::dom::NodeId;
use super::super::populator::Populator;
use super::super::ui::Ui;

/// Hides the results panel when the user clicks anywhere outside it and outside the
/// search input.
pub struct OutsideClick {}

impl OutsideClick {

    /// Returns whether the panel was hidden.
    pub fn handle(ui: &mut Ui, target: NodeId) -> bool {
        let Some(panel) = ui.results_panel() else { return false };
        let Some(input) = ui.search_input() else { return false };

        let document = ui.document();
        if document.contains(panel, target) || document.contains(input, target) {
            return false;
        }

        Populator::hide_results(ui);
        true
    }
}
