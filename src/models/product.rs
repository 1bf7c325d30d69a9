use serde::Serialize;
use serde_json::Value;

/// Feed item keys consulted for each record field, first present wins.
static FIELD_ALIASES: phf::Map<&'static str, &'static [&'static str]> = phf::phf_map! {
    "title" => &["title", "name"],
    "author" => &["author", "writer"],
    "seller" => &["seller", "brand"],
    "image" => &["img", "image"],
    "link" => &["link", "href", "url"],
    "description" => &["desc", "description"],
};

const NO_OP_ANCHOR: &str = "#";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    pub title: String,
    pub author: String,
    pub seller: String,
    pub image: String,
    pub link: String,
    pub description: String,
}

impl ProductRecord {

    /// Coerces a value the way a falsy-fallback chain would: empty strings, zero,
    /// `false`, `null` and containers count as absent.
    fn coerce(value: &Value) -> Option<String> {
        match value {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
            Value::Bool(true) => Some(String::from("true")),
            _ => None,
        }
    }

    fn resolve(item: &serde_json::Map<String, Value>, field: &str) -> String {
        FIELD_ALIASES
            .get(field)
            .into_iter()
            .flat_map(|aliases| aliases.iter())
            .find_map(|alias| item.get(*alias).and_then(Self::coerce))
            .unwrap_or_default()
    }

    /// Normalizes one raw feed item. Anything that is not an object is treated as an
    /// object with no keys. A missing link becomes the no-op anchor.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let empty = serde_json::Map::new();
        let item = value.as_object().unwrap_or(&empty);

        let mut link = Self::resolve(item, "link");
        if link.is_empty() {
            link = NO_OP_ANCHOR.to_string();
        }

        Self {
            title: Self::resolve(item, "title"),
            author: Self::resolve(item, "author"),
            seller: Self::resolve(item, "seller"),
            image: Self::resolve(item, "image"),
            link,
            description: Self::resolve(item, "description"),
        }
    }

    /// Destination for anchors built from this record.
    #[must_use]
    pub fn href(&self) -> &str {
        if self.link.is_empty() { NO_OP_ANCHOR } else { &self.link }
    }

    /// Link, or the title for seeded records that carry no link at all.
    #[must_use]
    pub fn dedup_key(&self) -> &str {
        if self.link.is_empty() { &self.title } else { &self.link }
    }

    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.author, &self.seller]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_aliases_in_priority_order() {
        let record = ProductRecord::from_value(&json!({
            "name": "Deep Work",
            "writer": "Cal Newport",
            "brand": "Piatkus",
            "image": "/img/deep.png",
            "href": "/b",
            "url": "/ignored",
            "desc": "Rules for focused success"
        }));

        assert_eq!(record.title, "Deep Work");
        assert_eq!(record.author, "Cal Newport");
        assert_eq!(record.seller, "Piatkus");
        assert_eq!(record.image, "/img/deep.png");
        assert_eq!(record.link, "/b");
        assert_eq!(record.description, "Rules for focused success");
    }

    #[test]
    fn primary_key_wins_over_alias() {
        let record = ProductRecord::from_value(&json!({"title": "A", "name": "B", "img": "x", "image": "y"}));
        assert_eq!(record.title, "A");
        assert_eq!(record.image, "x");
    }

    #[test]
    fn falsy_values_fall_through_to_next_alias() {
        let record = ProductRecord::from_value(&json!({"title": "", "name": "Fallback", "author": null, "writer": false, "link": 0, "url": "/u"}));
        assert_eq!(record.title, "Fallback");
        assert_eq!(record.author, "");
        assert_eq!(record.link, "/u");
    }

    #[test]
    fn scalars_are_stringified() {
        let record = ProductRecord::from_value(&json!({"title": 1984, "seller": true}));
        assert_eq!(record.title, "1984");
        assert_eq!(record.seller, "true");
    }

    #[test]
    fn non_object_items_normalize_to_empty() {
        let empty = ProductRecord::from_value(&json!({}));
        assert_eq!(empty.title, "");
        assert_eq!(empty.link, "#");
        assert_eq!(ProductRecord::from_value(&json!("loose string")), empty);
        assert_eq!(ProductRecord::from_value(&Value::Null), empty);
    }

    #[test]
    fn missing_link_becomes_no_op_anchor() {
        let record = ProductRecord::from_value(&json!({"title": "Atomic Habits"}));
        assert_eq!(record.link, "#");
        assert_eq!(record.href(), "#");
        assert_eq!(record.dedup_key(), "#");
    }

    #[test]
    fn seeded_record_without_link_keys_on_title() {
        let record = ProductRecord { title: String::from("Seeded"), ..ProductRecord::default() };
        assert_eq!(record.href(), "#");
        assert_eq!(record.dedup_key(), "Seeded");
    }

    #[test]
    fn matches_title_author_or_seller_only() {
        let record = ProductRecord::from_value(&json!({
            "title": "Atomic Habits",
            "author": "James Clear",
            "seller": "Penguin",
            "desc": "tiny changes"
        }));

        assert!(record.matches("atomic"));
        assert!(record.matches("clear"));
        assert!(record.matches("peng"));
        assert!(!record.matches("tiny"));
    }
}
