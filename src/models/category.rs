use super::feed::Feed;
use super::product::ProductRecord;
use crate::ordered_map::OrderedMap;

use heck::ToKebabCase;

/// Key that a flat feed collapses into.
pub const FALLBACK_CATEGORY: &str = "others";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub key: String,
    pub records: Vec<ProductRecord>,
}

impl Category {

    /// Heading text: the key with underscores shown as spaces.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.key.replace('_', " ")
    }

    #[must_use]
    pub fn anchor(&self) -> String {
        format!("home-section-{}", self.key.to_kebab_case())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    categories: OrderedMap<String, Category>,
}

impl CategoryMap {

    #[must_use]
    pub fn from_feed(feed: &Feed) -> Self {
        let mut categories = OrderedMap::new();

        match feed {
            Feed::Flat(items) => {
                let records = items.iter().map(ProductRecord::from_value).collect();
                let key = FALLBACK_CATEGORY.to_string();
                categories.insert(key.clone(), Category { key, records });
            }
            Feed::Keyed(groups) => {
                for (key, items) in groups {
                    let records = items.iter().map(ProductRecord::from_value).collect();
                    categories.insert(key.clone(), Category { key: key.clone(), records });
                }
            }
        }

        Self { categories }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Feed keys absent from `order`, in feed order. These are never displayed.
    pub fn unlisted<'a>(&'a self, order: &'a [String]) -> impl Iterator<Item = &'a str> {
        self.categories
            .iter()
            .map(|(key, _)| key.as_str())
            .filter(|key| !order.iter().any(|listed| listed == key))
    }

    /// Non-empty categories in `order`. Keys missing from `order` never appear.
    pub fn in_display_order<'a>(&'a self, order: &'a [String]) -> impl Iterator<Item = &'a Category> {
        order
            .iter()
            .filter_map(|key| self.get(key))
            .filter(|category| !category.records.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(keys: &[&str]) -> Vec<String> {
        keys.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn flat_feed_collapses_to_fallback_category() {
        let feed = Feed::parse(r#"[{"title":"A"},{"title":"B"}]"#).unwrap();
        let categories = CategoryMap::from_feed(&feed);

        assert_eq!(categories.len(), 1);
        assert_eq!(categories.get(FALLBACK_CATEGORY).map(|category| category.records.len()), Some(2));
    }

    #[test]
    fn display_order_skips_unlisted_and_empty_categories() {
        let feed = Feed::parse(r#"{
            "electronics": [{"title":"Phone"}],
            "unknown_cat": [{"title":"Mystery"}],
            "foods": [],
            "books": [{"title":"Novel"}]
        }"#).unwrap();
        let categories = CategoryMap::from_feed(&feed);
        let display = order(&["best_seller", "books", "electronics", "foods"]);

        let keys: Vec<_> = categories.in_display_order(&display).map(|category| category.key.as_str()).collect();
        assert_eq!(keys, ["books", "electronics"]);
        assert_eq!(categories.unlisted(&display).collect::<Vec<_>>(), ["unknown_cat"]);
    }

    #[test]
    fn names_and_anchors() {
        let category = Category { key: String::from("best_seller"), records: Vec::new() };
        assert_eq!(category.display_name(), "best seller");
        assert_eq!(category.anchor(), "home-section-best-seller");
    }
}
