// Dashboard: the set of checklists and which one is open

use crate::models::ChecklistSummary;
use crate::store::ChecklistStore;
use eyre::{Result, eyre};
use tracing::{debug, info};

/// A named checklist and its items
#[derive(Debug, Clone)]
pub struct Checklist {
    pub id: String,
    pub title: String,
    pub store: ChecklistStore,
}

impl Checklist {
    pub fn summary(&self) -> ChecklistSummary {
        let counts = self.store.counts();
        ChecklistSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            open: counts.open,
            completed: counts.completed,
            progress_percent: counts.progress_percent(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Dashboard {
    checklists: Vec<Checklist>,
    selected: Option<String>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty checklist, returning its id
    ///
    /// Blank titles are rejected and leave the dashboard unchanged.
    pub fn create_checklist(&mut self, title: &str) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            debug!("create_checklist: rejected blank title");
            return None;
        }

        let id = uuid::Uuid::now_v7().to_string();
        info!(id = %id, title, "Created checklist");
        self.checklists.push(Checklist {
            id: id.clone(),
            title: title.to_string(),
            store: ChecklistStore::new(),
        });
        Some(id)
    }

    /// Add a pre-built checklist under a caller-chosen id
    pub fn insert(&mut self, id: &str, title: &str, store: ChecklistStore) -> Result<()> {
        if id.trim().is_empty() {
            return Err(eyre!("Checklist ID cannot be empty or whitespace-only"));
        }
        if self.get(id).is_some() {
            return Err(eyre!("Checklist already exists: {}", id));
        }

        debug!(id, title, items = store.len(), "Inserted checklist");
        self.checklists.push(Checklist {
            id: id.to_string(),
            title: title.trim().to_string(),
            store,
        });
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Checklist> {
        self.checklists.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Checklist> {
        self.checklists.iter_mut().find(|c| c.id == id)
    }

    pub fn checklists(&self) -> &[Checklist] {
        &self.checklists
    }

    pub fn len(&self) -> usize {
        self.checklists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checklists.is_empty()
    }

    /// Open a checklist; unknown ids leave the selection as it was
    pub fn select(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            debug!(id, "select: no such checklist");
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    /// Return to the checklist overview
    pub fn back(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Checklist> {
        let id = self.selected.as_deref()?;
        self.get(id)
    }

    pub fn selected_mut(&mut self) -> Option<&mut Checklist> {
        let id = self.selected.clone()?;
        self.get_mut(&id)
    }

    pub fn summaries(&self) -> Vec<ChecklistSummary> {
        self.checklists.iter().map(Checklist::summary).collect()
    }
}
