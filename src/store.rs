// In-memory checklist store

use crate::event::Notification;
use crate::filter::Tab;
use crate::models::{ChecklistItem, ItemCounts, normalize_description};
use chrono::Utc;
use eyre::{Result, eyre};
use std::collections::HashSet;
use tracing::{debug, info};

/// Ordered list of checklist items and the notifications its mutations produced
///
/// Every operation is total: a blank label or an unknown id leaves the store
/// untouched. Mutators return whether they changed anything, which callers
/// are free to ignore.
#[derive(Debug, Default, Clone)]
pub struct ChecklistStore {
    items: Vec<ChecklistItem>,
    notifications: Vec<Notification>,
}

impl ChecklistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing items, e.g. seed data
    ///
    /// Fails on duplicate ids, blank ids or blank content. Content is trimmed.
    pub fn from_items(items: Vec<ChecklistItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut validated = Vec::with_capacity(items.len());

        for mut item in items {
            if item.id.trim().is_empty() {
                return Err(eyre!("Item ID cannot be empty or whitespace-only"));
            }
            if !seen.insert(item.id.clone()) {
                return Err(eyre!("Duplicate item ID: {}", item.id));
            }
            let content = item.content.trim();
            if content.is_empty() {
                return Err(eyre!("Item {} has empty content", item.id));
            }
            item.content = content.to_string();
            validated.push(item);
        }

        debug!(count = validated.len(), "Loaded checklist items");
        Ok(Self {
            items: validated,
            notifications: Vec::new(),
        })
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a new open item, returning its id
    ///
    /// Returns `None` and changes nothing when `content` is blank.
    pub fn add(&mut self, content: &str, description: Option<&str>, is_repeatable: bool) -> Option<String> {
        let content = content.trim();
        if content.is_empty() {
            debug!("add: rejected blank content");
            return None;
        }

        let id = self.fresh_id();
        let item = ChecklistItem {
            id: id.clone(),
            content: content.to_string(),
            description: normalize_description(description),
            is_completed: false,
            is_repeatable,
            sort_order: self.items.len() as u32 + 1,
            created_at: Utc::now(),
        };

        debug!(id = %id, is_repeatable, "add: appended item");
        self.items.push(item);
        self.notify(Notification::ItemAdded { id: id.clone() });
        Some(id)
    }

    /// Replace the label, description and repeatable flag of an item
    pub fn edit(&mut self, id: &str, content: &str, description: Option<&str>, is_repeatable: bool) -> bool {
        let content = content.trim();
        if content.is_empty() {
            debug!(id, "edit: rejected blank content");
            return false;
        }

        let Some(item) = self.find_mut(id) else {
            debug!(id, "edit: no such item");
            return false;
        };

        item.content = content.to_string();
        item.description = normalize_description(description);
        item.is_repeatable = is_repeatable;

        debug!(id, "edit: updated item");
        self.notify(Notification::ItemUpdated { id: id.to_string() });
        true
    }

    /// Flip completion; the item's section follows
    pub fn toggle_completed(&mut self, id: &str) -> bool {
        let Some(item) = self.find_mut(id) else {
            debug!(id, "toggle_completed: no such item");
            return false;
        };

        item.is_completed = !item.is_completed;
        debug!(id, section = %item.section(), "toggle_completed: flipped");
        true
    }

    /// Remove an item permanently
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);

        if self.items.len() == before {
            debug!(id, "delete: no such item");
            return false;
        }

        debug!(id, "delete: removed item");
        self.notify(Notification::ItemDeleted { id: id.to_string() });
        true
    }

    pub fn toggle_repeatable(&mut self, id: &str) -> bool {
        let Some(item) = self.find_mut(id) else {
            debug!(id, "toggle_repeatable: no such item");
            return false;
        };

        item.is_repeatable = !item.is_repeatable;
        let is_repeatable = item.is_repeatable;

        debug!(id, is_repeatable, "toggle_repeatable: flipped");
        self.notify(Notification::RepeatableToggled {
            id: id.to_string(),
            is_repeatable,
        });
        true
    }

    /// Mark every item completed, whatever its current state
    pub fn complete_all(&mut self) {
        for item in &mut self.items {
            item.is_completed = true;
        }

        let count = self.items.len();
        info!(count, "Completed all items");
        self.notify(Notification::AllCompleted { count });
    }

    /// Reopen every repeatable item; others are left alone
    pub fn refresh_repeatables(&mut self) {
        let mut count = 0;
        for item in self.items.iter_mut().filter(|item| item.is_repeatable) {
            item.is_completed = false;
            count += 1;
        }

        info!(count, "Refreshed repeatable items");
        self.notify(Notification::RepeatablesRefreshed { count });
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Items visible under `tab`, in list order
    pub fn filter(&self, tab: Tab) -> Vec<&ChecklistItem> {
        self.items.iter().filter(|item| tab.matches(item)).collect()
    }

    pub fn counts(&self) -> ItemCounts {
        self.items.iter().fold(ItemCounts::default(), |mut counts, item| {
            if item.is_completed {
                counts.completed += 1;
            } else {
                counts.open += 1;
            }
            counts
        })
    }

    /// Drain pending notifications, oldest first
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn find_mut(&mut self, id: &str) -> Option<&mut ChecklistItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// UUIDv7 that does not collide with any id already in the list
    fn fresh_id(&self) -> String {
        loop {
            let id = uuid::Uuid::now_v7().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
