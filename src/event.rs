// Notifications emitted by checklist mutations

use serde::Serialize;

/// Something the presentation layer should tell the user about
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    ItemAdded { id: String },
    ItemUpdated { id: String },
    ItemDeleted { id: String },
    RepeatableToggled { id: String, is_repeatable: bool },
    AllCompleted { count: usize },
    /// `count` is the number of repeatable items reset to open
    RepeatablesRefreshed { count: usize },
}

impl Notification {
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::ItemAdded { .. } => "item_added",
            Notification::ItemUpdated { .. } => "item_updated",
            Notification::ItemDeleted { .. } => "item_deleted",
            Notification::RepeatableToggled { .. } => "repeatable_toggled",
            Notification::AllCompleted { .. } => "all_completed",
            Notification::RepeatablesRefreshed { .. } => "repeatables_refreshed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_kind() {
        let n = Notification::ItemAdded { id: "1".to_string() };
        assert_eq!(n.kind(), "item_added");
        assert_eq!(Notification::AllCompleted { count: 3 }.kind(), "all_completed");
    }

    #[test]
    fn test_notification_serialization() {
        let n = Notification::RepeatableToggled {
            id: "4".to_string(),
            is_repeatable: true,
        };
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, r#"{"type":"repeatable_toggled","id":"4","is_repeatable":true}"#);
    }
}
