use super::super::config::IncludeSlot;
use super::super::ui::Ui;

/// Header/footer partials spliced into placeholder containers.
pub struct Includes {
    slots: Vec<IncludeSlot>,
}

impl Includes {

    pub const fn new(slots: Vec<IncludeSlot>) -> Self {
        Self { slots }
    }

    /// Slots whose placeholder exists on this page.
    #[must_use]
    pub fn pending(&self, ui: &Ui) -> Vec<IncludeSlot> {
        self.slots
            .iter()
            .filter(|slot| ui.document().element_by_id(&slot.container_id).is_some())
            .cloned()
            .collect()
    }

    /// Replaces the placeholder's content with `html`. Returns `false` if the
    /// placeholder has gone away.
    pub fn apply(ui: &mut Ui, slot: &IncludeSlot, html: &str) -> bool {
        let Some(container) = ui.document().element_by_id(&slot.container_id) else {
            return false;
        };
        ui.document_mut().set_inner_html(container, html);
        true
    }
}
