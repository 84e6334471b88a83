// Data models for checklists

use chrono::{DateTime, Utc};
use eyre::eyre;
use serde::{Deserialize, Serialize};

/// Bucket an item is shown in, always derived from its completion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Open,
    Completed,
}

impl Section {
    pub fn from_completed(is_completed: bool) -> Self {
        if is_completed { Section::Completed } else { Section::Open }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Open => "open",
            Section::Completed => "completed",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single task entry in a checklist
///
/// `section` is not stored; it is computed from `is_completed` and written
/// alongside it when serialized so consumers always see the two in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ItemWire", try_from = "ItemWire")]
pub struct ChecklistItem {
    pub id: String,
    pub content: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub is_repeatable: bool,
    pub sort_order: u32,
    pub created_at: DateTime<Utc>,
}

impl ChecklistItem {
    /// Open item with the given label, stamped with the current time
    pub fn new(id: impl Into<String>, content: impl Into<String>, sort_order: u32) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            description: None,
            is_completed: false,
            is_repeatable: false,
            sort_order,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description: String = description.into();
        self.description = normalize_description(Some(description.as_str()));
        self
    }

    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    pub fn repeatable(mut self, is_repeatable: bool) -> Self {
        self.is_repeatable = is_repeatable;
        self
    }

    pub fn section(&self) -> Section {
        Section::from_completed(self.is_completed)
    }
}

/// Serialized shape of an item (camelCase, explicit section)
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemWire {
    id: String,
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    is_completed: bool,
    #[serde(default)]
    is_repeatable: bool,
    section: Section,
    #[serde(default)]
    sort_order: u32,
    created_at: DateTime<Utc>,
}

impl From<ChecklistItem> for ItemWire {
    fn from(item: ChecklistItem) -> Self {
        let section = item.section();
        Self {
            id: item.id,
            content: item.content,
            description: item.description,
            is_completed: item.is_completed,
            is_repeatable: item.is_repeatable,
            section,
            sort_order: item.sort_order,
            created_at: item.created_at,
        }
    }
}

impl TryFrom<ItemWire> for ChecklistItem {
    type Error = eyre::Report;

    fn try_from(wire: ItemWire) -> Result<Self, Self::Error> {
        if wire.section != Section::from_completed(wire.is_completed) {
            return Err(eyre!(
                "Item {} has section {} but isCompleted={}",
                wire.id,
                wire.section,
                wire.is_completed
            ));
        }

        Ok(Self {
            id: wire.id,
            content: wire.content,
            description: normalize_description(wire.description.as_deref()),
            is_completed: wire.is_completed,
            is_repeatable: wire.is_repeatable,
            sort_order: wire.sort_order,
            created_at: wire.created_at,
        })
    }
}

/// Open/completed tally over a whole checklist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ItemCounts {
    pub open: usize,
    pub completed: usize,
}

impl ItemCounts {
    pub fn total(&self) -> usize {
        self.open + self.completed
    }

    /// Share of completed items, rounded to the nearest whole percent
    pub fn progress_percent(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        ((self.completed as f64 / total as f64) * 100.0).round() as u8
    }
}

/// Dashboard card for one checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistSummary {
    pub id: String,
    pub title: String,
    pub open: usize,
    pub completed: usize,
    pub progress_percent: u8,
}

/// Trim a description, mapping blank text to `None`
pub fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
