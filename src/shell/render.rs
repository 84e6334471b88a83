// Text rendering for the shell

use crate::dashboard::Checklist;
use crate::event::Notification;
use crate::filter::Tab;
use crate::models::{ChecklistItem, ChecklistSummary};
use colored::Colorize;

/// Title and body shown for a notification
pub fn toast_text(notification: &Notification) -> (&'static str, &'static str) {
    match notification {
        Notification::ItemAdded { .. } => ("Item added", "New checklist item has been added successfully."),
        Notification::ItemUpdated { .. } => ("Item updated", "Checklist item has been updated successfully."),
        Notification::ItemDeleted { .. } => ("Item deleted", "Checklist item has been deleted."),
        Notification::RepeatableToggled { .. } => ("Repeatable status updated", "Item repeatability has been toggled."),
        Notification::AllCompleted { .. } => (
            "All items completed",
            "All checklist items have been marked as completed.",
        ),
        Notification::RepeatablesRefreshed { .. } => (
            "Repeatable items refreshed",
            "All repeatable items have been reset to open status.",
        ),
    }
}

pub fn toast(notification: &Notification) -> String {
    let (title, body) = toast_text(notification);
    format!("{} {} {}", "✓".green(), title.bold(), body.dimmed())
}

pub fn dashboard(summaries: &[ChecklistSummary]) -> String {
    let mut out = format!("{}\n", "My Checklists".bold());

    if summaries.is_empty() {
        out.push_str("  No checklists yet. Create one with `new <title>`.\n");
        return out;
    }

    for summary in summaries {
        out.push_str(&format!(
            "  {}  {}\n      {} open tasks, {} completed, {}%\n",
            summary.id.cyan(),
            summary.title.bold(),
            summary.open,
            summary.completed,
            summary.progress_percent
        ));
    }
    out
}

pub fn header(checklist: &Checklist) -> String {
    let counts = checklist.store.counts();
    format!(
        "{}: {} open, {} completed",
        checklist.title.bold(),
        counts.open,
        counts.completed
    )
}

pub fn tab_bar(checklist: &Checklist, active: Tab) -> String {
    let counts = checklist.store.counts();
    Tab::ALL
        .iter()
        .map(|tab| {
            let count = match tab {
                Tab::All => counts.total(),
                Tab::Open => counts.open,
                Tab::Completed => counts.completed,
            };
            let label = format!("{} ({})", tab_label(*tab), count);
            if *tab == active {
                format!("[{}]", label).bold().to_string()
            } else {
                format!(" {} ", label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full checklist view: header, tab bar and the items under `tab`
pub fn checklist_view(checklist: &Checklist, tab: Tab) -> String {
    let mut out = format!("{}\n{}\n", header(checklist), tab_bar(checklist, tab));

    let items = checklist.store.filter(tab);
    if items.is_empty() {
        out.push_str("  No items found\n");
        return out;
    }

    for (index, item) in items.iter().enumerate() {
        out.push_str(&item_line(index + 1, item));
    }
    out
}

fn item_line(position: usize, item: &ChecklistItem) -> String {
    let mark = if item.is_completed { "[x]" } else { "[ ]" };
    let content = if item.is_completed {
        item.content.strikethrough().dimmed().to_string()
    } else {
        item.content.clone()
    };
    let badge = if item.is_repeatable {
        format!(" {}", "(repeatable)".yellow())
    } else {
        String::new()
    };

    let mut line = format!("  {:>2}. {} {}{}  {}\n", position, mark, content, badge, item.id.dimmed());
    if let Some(description) = &item.description {
        line.push_str(&format!("        {}\n", description.dimmed()));
    }
    line
}

fn tab_label(tab: Tab) -> &'static str {
    match tab {
        Tab::All => "All",
        Tab::Open => "Open",
        Tab::Completed => "Completed",
    }
}
