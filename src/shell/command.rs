// Shell command grammar

use crate::filter::Tab;
use clap::{Parser, Subcommand};

/// One line of shell input
#[derive(Parser, Debug)]
#[command(name = "checklist", no_binary_name = true, disable_version_flag = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    /// Sign in (any non-blank email and password)
    Login { email: String, password: String },

    /// Create an account and sign in
    Register {
        name: String,
        email: String,
        password: String,
        confirm: String,
    },

    /// Switch between the sign-in and sign-up forms
    Mode,

    /// Sign out and return to the sign-in form
    Logout,

    /// Show all checklists
    #[command(alias = "ls")]
    List,

    /// Create a new checklist
    New { title: String },

    /// Open a checklist by id
    Open { id: String },

    /// Return to the dashboard
    Back,

    /// Show items, optionally switching tab first
    Items {
        #[arg(value_parser = parse_tab)]
        tab: Option<Tab>,
    },

    /// Switch the item view to all, open or completed
    Tab {
        #[arg(value_parser = parse_tab)]
        tab: Tab,
    },

    /// Add an item to the open checklist
    Add {
        content: String,
        #[arg(short, long)]
        description: Option<String>,
        /// Make this item repeatable
        #[arg(short, long)]
        repeatable: bool,
    },

    /// Edit an item; omitted fields keep their current value
    Edit {
        /// Item id, or @N for the Nth item in the current view
        item: String,
        #[arg(short, long)]
        content: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long, action = clap::ArgAction::Set)]
        repeatable: Option<bool>,
    },

    /// Mark an item completed or open again
    #[command(alias = "done")]
    Toggle { item: String },

    /// Delete an item
    #[command(alias = "rm")]
    Delete { item: String },

    /// Toggle whether an item is repeatable
    Repeat { item: String },

    /// Mark every item completed
    CompleteAll,

    /// Reopen all repeatable items
    Refresh,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

fn parse_tab(s: &str) -> Result<Tab, String> {
    s.parse::<Tab>().map_err(|e| e.to_string())
}
