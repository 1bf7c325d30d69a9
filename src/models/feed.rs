use super::product::ProductRecord;
use crate::error::LoadError;

use serde_json::Value;

/// The two top-level shapes a product feed may take.
#[derive(Debug, Clone, PartialEq)]
pub enum Feed {
    Flat(Vec<Value>),
    /// Array-valued properties only, in document order.
    Keyed(Vec<(String, Vec<Value>)>),
}

impl Feed {

    fn shape_name(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }

    pub fn parse(body: &str) -> Result<Self, LoadError> {
        let document: Value = serde_json::from_str(body)?;
        Self::from_value(document)
    }

    pub fn from_value(document: Value) -> Result<Self, LoadError> {
        match document {
            Value::Array(items) => Ok(Self::Flat(items)),
            Value::Object(properties) => {
                let groups = properties
                    .into_iter()
                    .filter_map(|(key, value)| match value {
                        Value::Array(items) => Some((key, items)),
                        _ => None,
                    })
                    .collect();
                Ok(Self::Keyed(groups))
            }
            other => Err(LoadError::Shape(Self::shape_name(&other))),
        }
    }

    /// All items flattened into normalized records, keyed groups concatenated in order.
    #[must_use]
    pub fn records(&self) -> Vec<ProductRecord> {
        match self {
            Self::Flat(items) => items.iter().map(ProductRecord::from_value).collect(),
            Self::Keyed(groups) => groups
                .iter()
                .flat_map(|(_, items)| items.iter())
                .map(ProductRecord::from_value)
                .collect(),
        }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            Self::Flat(items) => items.len(),
            Self::Keyed(groups) => groups.iter().map(|(_, items)| items.len()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_array_keeps_every_item() {
        let feed = Feed::parse(r#"[{"title":"A"},{"name":"B"},{}]"#).unwrap();
        let records = feed.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].title, "B");
        assert_eq!(records[2].title, "");
        assert_eq!(records[2].link, "#");
    }

    #[test]
    fn keyed_object_concatenates_arrays_in_property_order() {
        let feed = Feed::parse(r#"{
            "zeta": [{"title":"Z1"},{"title":"Z2"}],
            "version": 3,
            "alpha": [{"title":"A1"}],
            "meta": {"generated": "today"}
        }"#).unwrap();

        let titles: Vec<_> = feed.records().into_iter().map(|record| record.title).collect();
        assert_eq!(titles, ["Z1", "Z2", "A1"]);
        assert_eq!(feed.item_count(), 3);
    }

    #[test]
    fn scalar_documents_are_rejected() {
        assert!(matches!(Feed::parse("null"), Err(LoadError::Shape("null"))));
        assert!(matches!(Feed::parse("\"text\""), Err(LoadError::Shape("a string"))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(Feed::parse("{\"books\": ["), Err(LoadError::Parse(_))));
    }
}
