// Sample checklists shown on a fresh dashboard

use crate::dashboard::Dashboard;
use crate::models::ChecklistItem;
use crate::store::ChecklistStore;
use chrono::{DateTime, TimeZone, Utc};
use eyre::Result;

fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).single().unwrap_or_else(Utc::now)
}

fn item(id: &str, content: &str, sort_order: u32) -> ChecklistItem {
    let mut item = ChecklistItem::new(id, content, sort_order);
    item.created_at = seeded_at();
    item
}

pub fn vacation() -> Result<ChecklistStore> {
    ChecklistStore::from_items(vec![
        item("1", "Pack clothes for 7 days", 1)
            .with_description("Include summer and evening wear")
            .completed(true),
        item("2", "Book flights", 2).completed(true),
        item("3", "Check passport validity", 3).with_description("Ensure passport is valid for 6+ months"),
        item("4", "Water plants", 4)
            .with_description("Daily watering task")
            .repeatable(true),
    ])
}

pub fn groceries() -> Result<ChecklistStore> {
    ChecklistStore::from_items(vec![
        item("1", "Milk", 1).repeatable(true).completed(true),
        item("2", "Eggs", 2).repeatable(true).completed(true),
        item("3", "Bread", 3).repeatable(true),
        item("4", "Coffee beans", 4).with_description("Medium roast"),
    ])
}

impl Dashboard {
    /// Dashboard pre-filled with the sample checklists
    pub fn with_samples() -> Result<Self> {
        let mut dashboard = Dashboard::new();
        dashboard.insert("vacation", "Vacation Preparation", vacation()?)?;
        dashboard.insert("groceries", "Weekly Groceries", groceries()?)?;
        Ok(dashboard)
    }
}
