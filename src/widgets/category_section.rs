use super::product_card::ProductCard;
use crate::config::HomeConfig;
use crate::dom::ElementNode;
use crate::models::{Category, CategoryMap};

/// One titled row of cards.
pub struct CategorySection<'a> {
    category: &'a Category,
    config: &'a HomeConfig,
    placeholder: &'a str,
}

impl<'a> CategorySection<'a> {

    pub const fn new(category: &'a Category, config: &'a HomeConfig, placeholder: &'a str) -> Self {
        Self { category, config, placeholder }
    }

    fn head(&self) -> ElementNode {
        let title = format!("{} {}", self.config.section_title_prefix, self.category.display_name());
        let arrow = ElementNode::new("div")
            .class("carousel-arrow")
            .child(ElementNode::new("i").class("fas fa-chevron-right"));

        ElementNode::new("div")
            .class("section-head")
            .child(ElementNode::new("div").class("title").text(title))
            .child(arrow)
    }

    #[must_use]
    pub fn build(&self) -> ElementNode {
        let cards = self
            .category
            .records
            .iter()
            .take(self.config.cards_per_section)
            .map(|record| ProductCard::new(record, self.config, self.placeholder).build());

        ElementNode::new("section")
            .class("section")
            .attr("id", self.category.anchor())
            .child(self.head())
            .child(ElementNode::new("div").class("card-row").children(cards))
    }
}

/// The block inserted at the top of the home page content.
pub struct HomeSections<'a> {
    categories: &'a CategoryMap,
    order: &'a [String],
    config: &'a HomeConfig,
    placeholder: &'a str,
}

impl<'a> HomeSections<'a> {

    pub const fn new(
        categories: &'a CategoryMap,
        order: &'a [String],
        config: &'a HomeConfig,
        placeholder: &'a str,
    ) -> Self {
        Self { categories, order, config, placeholder }
    }

    #[must_use]
    pub fn build(&self) -> ElementNode {
        let sections = self
            .categories
            .in_display_order(self.order)
            .map(|category| CategorySection::new(category, self.config, self.placeholder).build());

        ElementNode::new("div").class("home-sections").children(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use crate::models::{Feed, ProductRecord};

    fn items(prefix: &str, count: usize) -> String {
        let items: Vec<_> = (0..count)
            .map(|n| format!(r#"{{"title":"{prefix} {n}","link":"/{prefix}/{n}"}}"#))
            .collect();
        format!("[{}]", items.join(","))
    }

    #[test]
    fn sections_follow_configured_order_and_caps() {
        let body = format!(
            r#"{{"electronics":{},"unknown_cat":{},"books":{}}}"#,
            items("gadget", 3),
            items("mystery", 5),
            items("book", 12)
        );
        let feed = Feed::parse(&body).unwrap();
        let categories = CategoryMap::from_feed(&feed);
        let order: Vec<String> = ["best_seller", "books", "electronics", "others"].map(String::from).to_vec();
        let config = HomeConfig::default();

        let mut document = Document::new();
        let root = document.root();
        let block = HomeSections::new(&categories, &order, &config, "/no-image.png").build();
        document.append(root, block);

        let sections = document.select(root, "section");
        assert_eq!(sections.len(), 2);

        let anchors: Vec<_> = sections
            .iter()
            .filter_map(|&section| document.element(section).and_then(|element| element.attr("id")))
            .collect();
        assert_eq!(anchors, ["home-section-books", "home-section-electronics"]);

        let card_counts: Vec<_> = sections
            .iter()
            .map(|&section| document.select(section, ".card").len())
            .collect();
        assert_eq!(card_counts, [8, 3]);

        let heading = document.select(sections[0], ".title")[0];
        assert_eq!(document.text_content(heading), "Rokomari PromoCode For books");
        assert!(!document.to_html().contains("mystery"));
    }

    #[test]
    fn heading_replaces_underscores() {
        let category = Category {
            key: String::from("best_seller"),
            records: vec![ProductRecord::default()],
        };
        let config = HomeConfig::default();
        let mut document = Document::new();
        let root = document.root();
        document.append(root, CategorySection::new(&category, &config, "/p.png").build());

        assert!(document.to_html().contains(r#"<div class="title">Rokomari PromoCode For best seller</div>"#));
        assert_eq!(document.select(root, ".carousel-arrow").len(), 1);
    }
}
