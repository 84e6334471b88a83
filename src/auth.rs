// Simulated sign-in flow
//
// No credentials are checked or stored. Any non-blank email/password pair
// signs in.

use eyre::{Result, eyre};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    SignedOut { mode: AuthMode },
    SignedIn { email: String, name: Option<String> },
}

#[derive(Debug, Clone)]
pub struct Session {
    state: AuthState,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            state: AuthState::SignedOut { mode: AuthMode::Login },
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.state, AuthState::SignedIn { .. })
    }

    pub fn mode(&self) -> Option<AuthMode> {
        match self.state {
            AuthState::SignedOut { mode } => Some(mode),
            AuthState::SignedIn { .. } => None,
        }
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        self.ensure_signed_out()?;
        let email = required("Email", email)?;
        required("Password", password)?;

        info!(email, "Signed in");
        self.state = AuthState::SignedIn {
            email: email.to_string(),
            name: None,
        };
        Ok(())
    }

    pub fn register(&mut self, name: &str, email: &str, password: &str, confirm: &str) -> Result<()> {
        self.ensure_signed_out()?;
        let name = required("Name", name)?;
        let email = required("Email", email)?;
        required("Password", password)?;

        if password != confirm {
            return Err(eyre!("Passwords don't match"));
        }

        info!(email, "Registered");
        self.state = AuthState::SignedIn {
            email: email.to_string(),
            name: Some(name.to_string()),
        };
        Ok(())
    }

    /// Switch between the sign-in and sign-up forms
    pub fn toggle_mode(&mut self) -> Result<AuthMode> {
        let AuthState::SignedOut { mode } = self.state else {
            return Err(eyre!("Already signed in"));
        };

        let next = match mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.state = AuthState::SignedOut { mode: next };
        Ok(next)
    }

    pub fn logout(&mut self) {
        info!("Signed out");
        self.state = AuthState::SignedOut { mode: AuthMode::Login };
    }

    fn ensure_signed_out(&self) -> Result<()> {
        if self.is_signed_in() {
            return Err(eyre!("Already signed in"));
        }
        Ok(())
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(eyre!("{} is required", field));
    }
    Ok(value)
}
