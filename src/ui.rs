use crate::constants;
use crate::dom::{Document, NodeId};

/// The page as seen by the controllers: the document plus the fixed regions they
/// look up by id.
pub struct Ui {
    document: Document,
    content_id: String,
}

impl Ui {

    pub fn new(document: Document, content_id: impl Into<String>) -> Self {
        Self { document, content_id: content_id.into() }
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    pub const fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    #[must_use]
    pub fn results_panel(&self) -> Option<NodeId> {
        self.document.element_by_id(constants::SEARCH_RESULTS_ID)
    }

    #[must_use]
    pub fn search_input(&self) -> Option<NodeId> {
        self.document.element_by_id(constants::SEARCH_INPUT_ID)
    }

    #[must_use]
    pub fn content(&self) -> Option<NodeId> {
        self.document.element_by_id(&self.content_id)
    }

    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }
}
