// View selector over a checklist

use crate::models::ChecklistItem;
use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which items a view shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    All,
    Open,
    Completed,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::All, Tab::Open, Tab::Completed];

    pub fn matches(self, item: &ChecklistItem) -> bool {
        match self {
            Tab::All => true,
            Tab::Open => !item.is_completed,
            Tab::Completed => item.is_completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Open => "open",
            Tab::Completed => "completed",
        }
    }
}

impl FromStr for Tab {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Tab::All),
            "open" => Ok(Tab::Open),
            "completed" | "done" => Ok(Tab::Completed),
            other => Err(eyre!("Unknown tab: {} (expected all, open or completed)", other)),
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_matches() {
        let open = ChecklistItem::new("1", "Water plants", 1);
        let done = ChecklistItem::new("2", "Book flights", 2).completed(true);

        assert!(Tab::All.matches(&open));
        assert!(Tab::All.matches(&done));
        assert!(Tab::Open.matches(&open));
        assert!(!Tab::Open.matches(&done));
        assert!(Tab::Completed.matches(&done));
        assert!(!Tab::Completed.matches(&open));
    }

    #[test]
    fn test_tab_from_str() {
        assert_eq!("all".parse::<Tab>().unwrap(), Tab::All);
        assert_eq!("OPEN".parse::<Tab>().unwrap(), Tab::Open);
        assert_eq!(" completed ".parse::<Tab>().unwrap(), Tab::Completed);
        assert!("archived".parse::<Tab>().is_err());
    }

    #[test]
    fn test_tab_display() {
        assert_eq!(Tab::Open.to_string(), "open");
        assert_eq!(Tab::default(), Tab::All);
    }
}
