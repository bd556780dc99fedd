//! Session stand-in that selects between the signed-in and signed-out trees.
//!
//! There is no server and no credential check: the initial "stored session"
//! lookup is a timer that always settles on signed out, and login/logout
//! flip the state directly. Password reset requests are validated and logged,
//! never sent.


use std::{fmt, time::Duration};

use futures::Stream;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use super::common::Property;

/// Where the session gate currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// The startup check has not settled yet
    Checking,

    /// Signed out; the auth screens are shown
    Unauthenticated,

    /// Signed in; the main tabs are shown
    Authenticated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => f.write_str("checking"),
            Self::Unauthenticated => f.write_str("unauthenticated"),
            Self::Authenticated => f.write_str("authenticated"),
        }
    }
}

/// Errors from session requests
#[derive(Error, Debug, PartialEq)]
pub enum SessionError {
    /// No address was given
    #[error("email address is required")]
    BlankEmail,

    /// The request only makes sense while signed out
    #[error("already signed in")]
    AlreadySignedIn,
}

/// Boolean-plus-timer authentication gate
#[derive(Debug)]
pub struct SessionGate {
    state: Property<SessionState>,
    check_delay: Duration,
}

impl SessionGate {
    /// Creates a gate in the `Checking` state.
    pub fn new(check_delay: Duration) -> Self {
        Self {
            state: Property::new(SessionState::Checking),
            check_delay,
        }
    }

    /// Simulates looking up a stored session.
    ///
    /// Waits the configured delay and settles on `Unauthenticated`. Does
    /// nothing if the session already settled (e.g. a login raced it).
    #[instrument(skip(self), fields(delay_ms = self.check_delay.as_millis() as u64))]
    pub async fn check(&self) -> SessionState {
        tokio::time::sleep(self.check_delay).await;

        self.state.update(|state| {
            if *state == SessionState::Checking {
                *state = SessionState::Unauthenticated;
            }
        });

        let settled = self.state.get();
        info!(state = %settled, "Session check settled");
        settled
    }

    /// Signs in. No credentials are involved.
    pub fn login(&self) {
        info!("Signing in");
        self.state.set(SessionState::Authenticated);
    }

    /// Signs out.
    pub fn logout(&self) {
        info!("Signing out");
        self.state.set(SessionState::Unauthenticated);
    }

    /// Accepts a password reset request for `email`.
    ///
    /// Returns the trimmed address the instructions would go to. Fails while
    /// signed in or when the address is blank.
    pub fn request_password_reset(&self, email: &str) -> Result<String, SessionError> {
        if self.is_authenticated() {
            return Err(SessionError::AlreadySignedIn);
        }

        let email = email.trim();
        if email.is_empty() {
            return Err(SessionError::BlankEmail);
        }

        info!(email, "Password reset requested");
        Ok(email.to_string())
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Whether the signed-in tree is active
    pub fn is_authenticated(&self) -> bool {
        self.state.get() == SessionState::Authenticated
    }

    /// Stream of session states, current first
    pub fn watch(&self) -> impl Stream<Item = SessionState> + Send + use<> {
        self.state.watch()
    }
}
