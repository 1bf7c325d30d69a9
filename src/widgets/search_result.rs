use super::{image_or, truncate};
use crate::dom::ElementNode;
use crate::models::ProductRecord;

/// Dropdown entry under the header search box.
pub struct SearchResultItem<'a> {
    record: &'a ProductRecord,
    placeholder: &'a str,
    title_limit: usize,
}

impl<'a> SearchResultItem<'a> {

    pub const fn new(record: &'a ProductRecord, placeholder: &'a str, title_limit: usize) -> Self {
        Self { record, placeholder, title_limit }
    }

    #[must_use]
    pub fn build(&self) -> ElementNode {
        let image = ElementNode::new("img")
            .attr("src", image_or(&self.record.image, self.placeholder))
            .attr("alt", "");
        let info = ElementNode::new("div")
            .class("result-info")
            .child(ElementNode::new("h4").text(truncate(&self.record.title, self.title_limit)))
            .child(ElementNode::new("p").text(self.record.author.as_str()));

        ElementNode::new("a")
            .class("result-item")
            .attr("href", self.record.href())
            .child(image)
            .child(info)
    }
}
