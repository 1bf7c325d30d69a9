use super::{image_or, truncate};
use crate::config::HomeConfig;
use crate::dom::ElementNode;
use crate::models::ProductRecord;

const IMAGE_STYLE: &str = "max-width: 100%; max-height: 100%; object-fit: contain";

/// Home-page card for one record.
pub struct ProductCard<'a> {
    record: &'a ProductRecord,
    config: &'a HomeConfig,
    placeholder: &'a str,
}

impl<'a> ProductCard<'a> {

    pub const fn new(record: &'a ProductRecord, config: &'a HomeConfig, placeholder: &'a str) -> Self {
        Self { record, config, placeholder }
    }

    fn image(&self) -> ElementNode {
        let image = ElementNode::new("img")
            .attr("src", image_or(&self.record.image, self.placeholder))
            .attr("alt", self.record.title.as_str())
            .attr("style", IMAGE_STYLE);

        ElementNode::new("div").class("img-wrap").child(image)
    }

    fn meta(&self) -> ElementNode {
        let meta = ElementNode::new("div").class("meta");
        if self.record.author.is_empty() {
            meta
        } else {
            meta.text(format!("{}{}", self.config.author_label, self.record.author))
        }
    }

    fn call_to_action(&self) -> ElementNode {
        let offer = ElementNode::new("div")
            .class("offer-text")
            .text(self.config.offer_text.as_str());
        let button = ElementNode::new("a")
            .class("buy-btn")
            .attr("href", self.record.href())
            .attr("target", "_blank")
            .attr("rel", "noopener")
            .text(self.config.cta_text.as_str());

        ElementNode::new("div").class("cta-row").child(offer).child(button)
    }

    #[must_use]
    pub fn build(&self) -> ElementNode {
        let title = ElementNode::new("div")
            .class("title")
            .child(ElementNode::new("div").text(self.record.title.as_str()));
        let description = ElementNode::new("div")
            .class("desc")
            .text(truncate(&self.record.description, self.config.description_limit));

        ElementNode::new("article")
            .class("card")
            .child(self.image())
            .child(title)
            .child(self.meta())
            .child(description)
            .child(self.call_to_action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    const PLACEHOLDER: &str = "/assets/images/no-image.png";

    fn render(record: &ProductRecord) -> (Document, String) {
        let config = HomeConfig::default();
        let mut document = Document::new();
        let root = document.root();
        document.append(root, ProductCard::new(record, &config, PLACEHOLDER).build());
        let html = document.to_html();
        (document, html)
    }

    #[test]
    fn complete_record() {
        let record = ProductRecord {
            title: String::from("Atomic Habits"),
            author: String::from("James Clear"),
            image: String::from("/img/atomic.jpg"),
            link: String::from("/a"),
            description: String::from("Tiny changes"),
            ..ProductRecord::default()
        };
        let (document, html) = render(&record);
        let root = document.root();

        assert!(html.contains(r#"<img src="/img/atomic.jpg" alt="Atomic Habits""#));
        assert!(html.contains(r#"<div class="title"><div>Atomic Habits</div></div>"#));
        assert!(html.contains(r#"<div class="meta">লেখক: James Clear</div>"#));
        assert!(html.contains(r#"<div class="desc">Tiny changes</div>"#));
        assert!(html.contains(r#"<a class="buy-btn" href="/a" target="_blank" rel="noopener">Buy Now</a>"#));
        assert_eq!(document.select(root, ".offer-text").len(), 1);
    }

    #[test]
    fn missing_fields_use_fallbacks() {
        let (_, html) = render(&ProductRecord { title: String::from("Untitled"), ..ProductRecord::default() });

        assert!(html.contains(r#"src="/assets/images/no-image.png""#));
        assert!(html.contains(r#"<div class="meta"></div>"#));
        assert!(html.contains(r##"href="#""##));
    }

    #[test]
    fn description_is_capped() {
        let record = ProductRecord { description: "x".repeat(500), ..ProductRecord::default() };
        let (document, _) = render(&record);
        let desc = document.select(document.root(), ".desc")[0];

        assert_eq!(document.text_content(desc).chars().count(), 220);
    }
}
