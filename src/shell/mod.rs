// Interactive shell: routes input lines into the session, dashboard and store

pub mod command;
pub mod render;

use crate::auth::{AuthMode, Session};
use crate::config::Config;
use crate::dashboard::{Checklist, Dashboard};
use crate::filter::Tab;
use clap::Parser;
use colored::Colorize;
use command::{Line, ShellCommand};
use eyre::{Result, eyre};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::debug;

/// Whether the shell should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<W: Write> {
    out: W,
    config: Config,
    session: Session,
    dashboard: Dashboard,
    tab: Tab,
}

impl<W: Write> Shell<W> {
    pub fn new(config: Config, dashboard: Dashboard, out: W) -> Self {
        if !config.color {
            colored::control::set_override(false);
        }

        Self {
            out,
            tab: config.default_tab,
            config,
            session: Session::new(),
            dashboard,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn prompt(&self) -> String {
        match (self.session.mode(), self.dashboard.selected()) {
            (Some(AuthMode::Login), _) => "sign in> ".to_string(),
            (Some(AuthMode::Register), _) => "sign up> ".to_string(),
            (None, Some(checklist)) => format!("{} ({})> ", checklist.title, self.tab),
            (None, None) => "checklists> ".to_string(),
        }
    }

    /// Read commands interactively until `quit` or end of input
    pub fn run_interactive<R: BufRead>(&mut self, input: R) -> Result<()> {
        writeln!(self.out, "Sign in to your checklist account (`help` lists commands)")?;
        let mut lines = input.lines();

        loop {
            write!(self.out, "{}", self.prompt())?;
            self.out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(self.out)?;
                return Ok(());
            };

            if self.execute_reporting(&line?)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Run a script, echoing each command; `#` starts a comment line
    pub fn run_script<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            writeln!(self.out, "{}{}", self.prompt(), trimmed)?;
            if self.execute_reporting(trimmed)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Execute one line, printing command errors instead of returning them
    ///
    /// Only failures to write output are returned.
    pub fn execute_reporting(&mut self, line: &str) -> Result<Flow> {
        match self.execute(line) {
            Ok(flow) => Ok(flow),
            Err(e) => {
                debug!(error = %e, line, "Command failed");
                writeln!(self.out, "{} {}", "error:".red().bold(), e)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let tokens = shlex::split(line).ok_or_else(|| eyre!("Unbalanced quotes in: {}", line))?;
        if tokens.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match Line::try_parse_from(&tokens) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // Covers `help` as well as usage errors
                write!(self.out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        debug!(?command, "Executing");
        self.dispatch(command)
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<Flow> {
        match command {
            ShellCommand::Quit => return Ok(Flow::Quit),

            ShellCommand::Login { email, password } => {
                self.ensure_signed_out()?;
                self.simulate_latency("Signing in...")?;
                self.session.login(&email, &password)?;
                self.show_dashboard()?;
            }
            ShellCommand::Register {
                name,
                email,
                password,
                confirm,
            } => {
                self.ensure_signed_out()?;
                self.simulate_latency("Creating account...")?;
                self.session.register(&name, &email, &password, &confirm)?;
                self.show_dashboard()?;
            }
            ShellCommand::Mode => {
                let mode = self.session.toggle_mode()?;
                let text = match mode {
                    AuthMode::Login => "Sign In: welcome back! Use `login <email> <password>`",
                    AuthMode::Register => "Create Account: use `register <name> <email> <password> <confirm>`",
                };
                writeln!(self.out, "{}", text)?;
            }
            ShellCommand::Logout => {
                self.ensure_signed_in()?;
                self.dashboard.back();
                self.session.logout();
                writeln!(self.out, "Signed out")?;
            }

            ShellCommand::List => {
                self.ensure_signed_in()?;
                self.dashboard.back();
                self.show_dashboard()?;
            }
            ShellCommand::New { title } => {
                self.ensure_signed_in()?;
                let id = self
                    .dashboard
                    .create_checklist(&title)
                    .ok_or_else(|| eyre!("Checklist title cannot be empty"))?;
                writeln!(self.out, "Created checklist {}", id.cyan())?;
            }
            ShellCommand::Open { id } => {
                self.ensure_signed_in()?;
                if !self.dashboard.select(&id) {
                    return Err(eyre!("No checklist with id {}", id));
                }
                self.tab = self.config.default_tab;
                self.show_checklist()?;
            }
            ShellCommand::Back => {
                self.ensure_signed_in()?;
                self.dashboard.back();
                self.show_dashboard()?;
            }

            ShellCommand::Items { tab } => {
                self.current()?;
                if let Some(tab) = tab {
                    self.tab = tab;
                }
                self.show_checklist()?;
            }
            ShellCommand::Tab { tab } => {
                self.current()?;
                self.tab = tab;
                self.show_checklist()?;
            }

            ShellCommand::Add {
                content,
                description,
                repeatable,
            } => {
                let checklist = self.current_mut()?;
                if checklist.store.add(&content, description.as_deref(), repeatable).is_none() {
                    return Err(eyre!("Item content cannot be empty"));
                }
                self.flush_notifications()?;
            }
            ShellCommand::Edit {
                item,
                content,
                description,
                repeatable,
            } => {
                let tab = self.tab;
                let checklist = self.current_mut()?;
                let id = resolve_item(checklist, tab, &item)?;
                let Some(current) = checklist.store.get(&id).cloned() else {
                    return Err(eyre!("No item matching {}", item));
                };

                let content = content.unwrap_or(current.content);
                let description = description.or(current.description);
                let repeatable = repeatable.unwrap_or(current.is_repeatable);

                if !checklist.store.edit(&id, &content, description.as_deref(), repeatable) {
                    return Err(eyre!("Item content cannot be empty"));
                }
                self.flush_notifications()?;
            }
            ShellCommand::Toggle { item } => {
                let tab = self.tab;
                let checklist = self.current_mut()?;
                let id = resolve_item(checklist, tab, &item)?;
                checklist.store.toggle_completed(&id);
                self.show_checklist()?;
            }
            ShellCommand::Delete { item } => {
                let tab = self.tab;
                let checklist = self.current_mut()?;
                let id = resolve_item(checklist, tab, &item)?;
                checklist.store.delete(&id);
                self.flush_notifications()?;
            }
            ShellCommand::Repeat { item } => {
                let tab = self.tab;
                let checklist = self.current_mut()?;
                let id = resolve_item(checklist, tab, &item)?;
                checklist.store.toggle_repeatable(&id);
                self.flush_notifications()?;
            }
            ShellCommand::CompleteAll => {
                self.current_mut()?.store.complete_all();
                self.flush_notifications()?;
            }
            ShellCommand::Refresh => {
                self.current_mut()?.store.refresh_repeatables();
                self.flush_notifications()?;
            }
        }

        Ok(Flow::Continue)
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn ensure_signed_in(&self) -> Result<()> {
        if !self.session.is_signed_in() {
            return Err(eyre!("Not signed in (use `login <email> <password>`)"));
        }
        Ok(())
    }

    fn ensure_signed_out(&self) -> Result<()> {
        if self.session.is_signed_in() {
            return Err(eyre!("Already signed in"));
        }
        Ok(())
    }

    fn current(&self) -> Result<&Checklist> {
        self.ensure_signed_in()?;
        self.dashboard
            .selected()
            .ok_or_else(|| eyre!("No checklist open (use `open <id>`)"))
    }

    fn current_mut(&mut self) -> Result<&mut Checklist> {
        self.ensure_signed_in()?;
        self.dashboard
            .selected_mut()
            .ok_or_else(|| eyre!("No checklist open (use `open <id>`)"))
    }

    fn simulate_latency(&mut self, message: &str) -> Result<()> {
        if self.config.auth_delay_ms > 0 {
            writeln!(self.out, "{}", message)?;
            std::thread::sleep(Duration::from_millis(self.config.auth_delay_ms));
        }
        Ok(())
    }

    fn show_dashboard(&mut self) -> Result<()> {
        let text = render::dashboard(&self.dashboard.summaries());
        write!(self.out, "{}", text)?;
        Ok(())
    }

    fn show_checklist(&mut self) -> Result<()> {
        let text = render::checklist_view(self.current()?, self.tab);
        write!(self.out, "{}", text)?;
        Ok(())
    }

    /// Print pending toasts, then the refreshed view
    fn flush_notifications(&mut self) -> Result<()> {
        let notifications = self.current_mut()?.store.take_notifications();
        for notification in &notifications {
            writeln!(self.out, "{}", render::toast(notification))?;
        }
        self.show_checklist()
    }
}

/// Map an item id, or `@N` (1-based position in the `tab` view), to an id
fn resolve_item(checklist: &Checklist, tab: Tab, reference: &str) -> Result<String> {
    let found = match reference.strip_prefix('@') {
        Some(position) => {
            let view = checklist.store.filter(tab);
            position
                .parse::<usize>()
                .ok()
                .and_then(|position| position.checked_sub(1))
                .and_then(|index| view.get(index))
                .map(|item| item.id.clone())
        }
        None => checklist.store.get(reference).map(|item| item.id.clone()),
    };

    found.ok_or_else(|| eyre!("No item matching {}", reference))
}
