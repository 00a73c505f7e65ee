//! Session value for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is a plain value. Operations in `state::context` produce a new
//! `Session` and the reactive handle publishes it; nothing mutates a session
//! in place, so a failed operation leaves the previous value untouched.
//!
//! INVARIANT
//! =========
//! `phase == Authenticated` iff username, access token and refresh token are
//! all present and non-empty. The only constructor that yields an
//! authenticated session checks this.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Lifecycle phase of the session state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Persisted credentials have not been read yet.
    #[default]
    Initializing,
    Anonymous,
    Authenticated,
}

/// Identity and tokens held by the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    username: Option<String>,
    access_token: Option<String>,
    refresh_token: Option<String>,
    phase: SessionPhase,
}

impl Session {
    /// Empty, resolved session.
    pub fn anonymous() -> Self {
        Self { phase: SessionPhase::Anonymous, ..Self::default() }
    }

    /// Authenticated session, or `None` when any field is empty.
    pub fn authenticated(username: String, access_token: String, refresh_token: String) -> Option<Self> {
        if username.is_empty() || access_token.is_empty() || refresh_token.is_empty() {
            return None;
        }
        Some(Self {
            username: Some(username),
            access_token: Some(access_token),
            refresh_token: Some(refresh_token),
            phase: SessionPhase::Authenticated,
        })
    }

    /// Same identity with a new access token (and optionally a rotated
    /// refresh token). Returns `None` unless the session is authenticated and
    /// the new token is non-empty.
    pub fn with_tokens(&self, access_token: String, refresh_token: Option<String>) -> Option<Self> {
        if !self.is_authenticated() {
            return None;
        }
        let refresh_token = refresh_token.or_else(|| self.refresh_token.clone())?;
        Self::authenticated(self.username.clone()?, access_token, refresh_token)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Credential to attach to outbound requests.
    pub fn bearer(&self) -> Option<&str> {
        self.access_token().filter(|token| !token.is_empty())
    }

    /// Username for display, empty when signed out.
    pub fn display_name(&self) -> String {
        self.username.clone().unwrap_or_default()
    }
}
