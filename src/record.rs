// Identity trait for anything loaded from seed files

use crate::models::ChecklistItem;
use serde::de::DeserializeOwned;

/// Core trait that any seedable record must implement
pub trait Record: DeserializeOwned + Clone + 'static {
    /// Unique identifier for this record
    fn id(&self) -> &str;

    /// Collection name for this record type (e.g., "items")
    fn collection_name() -> &'static str
    where
        Self: Sized;
}

impl Record for ChecklistItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "items"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Deserialize)]
    struct TestRecord {
        id: String,
    }

    impl Record for TestRecord {
        fn id(&self) -> &str {
            &self.id
        }

        fn collection_name() -> &'static str {
            "test"
        }
    }

    #[test]
    fn test_record_trait_implementation() {
        let record = TestRecord { id: "test-1".to_string() };

        assert_eq!(record.id(), "test-1");
        assert_eq!(TestRecord::collection_name(), "test");
    }

    #[test]
    fn test_checklist_item_record() {
        let item = ChecklistItem::new("abc", "Check passport validity", 3);
        assert_eq!(Record::id(&item), "abc");
        assert_eq!(ChecklistItem::collection_name(), "items");
    }
}
