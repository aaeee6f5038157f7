//! Item domain model.
//!
//! # Responsibility
//! - Define the persisted note record (`id`, `title`, `description`).
//! - Fix the JSON field names used by the stored item list.
//!
//! # Invariants
//! - `id` is generated once and never reused for another item.
//! - Items created here serialize as exactly `id`, `title`, `description`.
//! - Any other fields found on a stored item are carried through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Stable identifier for one item.
///
/// Any string is accepted from storage; new ids are hyphenated UUID v4.
pub type ItemId = String;

/// One persisted note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    /// Fields written by other producers of the blob; kept on rewrite.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Generates a fresh item id.
pub fn new_item_id() -> ItemId {
    Uuid::new_v4().to_string()
}

impl Item {
    /// Creates an item with a freshly generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(new_item_id(), title, description)
    }

    /// Creates an item with a caller-provided id.
    ///
    /// Used when the id source is injected (tests, deterministic imports).
    pub fn with_id(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Item;

    #[test]
    fn new_items_get_distinct_uuid_ids() {
        let first = Item::new("a", "b");
        let second = Item::new("a", "b");
        assert_ne!(first.id, second.id);
        assert!(uuid::Uuid::parse_str(&first.id).is_ok());
    }

    #[test]
    fn serializes_with_plain_string_fields() {
        let item = Item::with_id("6f1c1d4e-2d0b-4c55-9a34-1f0a8e3c9b21", "Milk", "Buy milk");

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "6f1c1d4e-2d0b-4c55-9a34-1f0a8e3c9b21",
                "title": "Milk",
                "description": "Buy milk",
            })
        );
    }

    #[test]
    fn any_string_id_is_accepted() {
        let item: Item =
            serde_json::from_str(r#"{"id":"1","title":"Milk","description":"Buy milk"}"#).unwrap();
        assert_eq!(item.id, "1");
        assert!(item.extra.is_empty());
    }

    #[test]
    fn unknown_fields_survive_a_rewrite() {
        let raw = r#"{"id":"a1","title":"t","description":"d","done":true}"#;
        let item: Item = serde_json::from_str(raw).unwrap();
        assert_eq!(item.extra.get("done"), Some(&serde_json::Value::Bool(true)));

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["done"], serde_json::Value::Bool(true));
    }

    #[test]
    fn deserialize_rejects_missing_fields() {
        let raw = r#"{"id":"a1","title":"x"}"#;
        assert!(serde_json::from_str::<Item>(raw).is_err());
    }
}
