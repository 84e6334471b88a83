// Checklist - in-memory checklists with repeatable items

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod event;
pub mod filter;
pub mod jsonl;
pub mod models;
pub mod record;
pub mod samples;
pub mod shell;
pub mod store;

// Re-export main types for convenience
pub use auth::{AuthMode, AuthState, Session};
pub use config::Config;
pub use dashboard::{Checklist, Dashboard};
pub use event::Notification;
pub use filter::Tab;
pub use models::{ChecklistItem, ChecklistSummary, ItemCounts, Section};
pub use record::Record;
pub use store::ChecklistStore;
