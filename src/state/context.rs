//! Session operations: init, login, logout, company registration, refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionContext` owns the credential store and the API client. Each
//! operation takes the current session by reference and returns the next
//! one; publishing it is the caller's job (see `state::handle`). This keeps
//! the state machine testable without a reactive runtime.
//!
//! STATE MACHINE
//! =============
//! `Initializing --init--> Anonymous | Authenticated`
//! `Anonymous | Authenticated --login ok--> Authenticated`
//! `Authenticated --logout--> Anonymous`
//!
//! Logout is local-only. The API offers no revocation endpoint, so issued
//! tokens stay valid on the server until they expire.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use super::session::Session;
use super::store::{CredentialStore, SessionStore};
use crate::error::{ApiError, SessionError};
use crate::net::api::AuthApi;
use crate::net::types::{CompanyRegistration, LoginRequest, RefreshRequest};

#[derive(Clone, Debug, Default)]
pub struct SessionContext<S, A> {
    store: SessionStore<S>,
    api: A,
}

impl<S: CredentialStore, A: AuthApi> SessionContext<S, A> {
    pub fn new(storage: S, api: A) -> Self {
        Self { store: SessionStore::new(storage), api }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Resolve the startup session from persisted credentials.
    ///
    /// # Errors
    ///
    /// Storage read failures are returned unchanged; callers treat them as
    /// fatal to startup.
    pub fn init(&self) -> Result<Session, SessionError> {
        let credentials = self.store.load().inspect_err(|e| {
            log::error!("session init failed: {e}");
        })?;
        let session = credentials.into_session();
        if session.is_authenticated() {
            log::info!("session restored for {}", session.display_name());
        } else {
            log::info!("no stored session");
        }
        Ok(session)
    }

    /// Sign in and persist the returned tokens.
    ///
    /// `current` is only read for its bearer token; on error the caller
    /// keeps it as-is.
    ///
    /// # Errors
    ///
    /// API rejections, malformed token responses, and storage write failures.
    pub async fn login(
        &self,
        current: &Session,
        username: &str,
        password: &str,
    ) -> Result<Session, SessionError> {
        let body = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let tokens = self
            .api
            .login(current.bearer(), &body)
            .await
            .inspect_err(|e| log::warn!("login failed: {e}"))?;
        let session = Session::authenticated(username.to_owned(), tokens.access, tokens.refresh)
            .ok_or_else(|| ApiError::Decode("login response carried an empty token".to_owned()))?;
        if let Err(e) = self.store.save(&session) {
            log::error!("failed to persist session: {e}");
            // Never leave a half-written identity behind.
            if let Err(cleanup) = self.store.clear() {
                log::error!("failed to remove partially written session: {cleanup}");
            }
            return Err(e.into());
        }
        log::info!("signed in as {username}");
        Ok(session)
    }

    /// Forget the session locally. The returned session is always anonymous;
    /// an error means some key could not be removed from storage.
    ///
    /// # Errors
    ///
    /// Storage removal failures.
    pub fn logout(&self) -> Result<Session, SessionError> {
        self.store.clear().inspect_err(|e| log::error!("failed to clear stored session: {e}"))?;
        log::info!("signed out");
        Ok(Session::anonymous())
    }

    /// Register a company. The session is not changed; the new user signs in
    /// separately.
    ///
    /// # Errors
    ///
    /// Field validation failures arrive as [`ApiError::Rejected`].
    pub async fn register_company(
        &self,
        current: &Session,
        registration: &CompanyRegistration,
    ) -> Result<(), ApiError> {
        self.api
            .register_company(current.bearer(), registration)
            .await
            .inspect_err(|e| log::warn!("company registration failed: {e}"))?;
        log::info!("registered company {}", registration.name);
        Ok(())
    }

    /// Exchange the refresh token for a new access token and persist it.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotAuthenticated`] without a session, otherwise API
    /// and storage failures.
    pub async fn refresh(&self, current: &Session) -> Result<Session, SessionError> {
        let refresh = current.refresh_token().filter(|_| current.is_authenticated());
        let Some(refresh) = refresh else {
            return Err(SessionError::NotAuthenticated);
        };
        let body = RefreshRequest { refresh: refresh.to_owned() };
        let token = self
            .api
            .refresh(current.bearer(), &body)
            .await
            .inspect_err(|e| log::warn!("token refresh failed: {e}"))?;
        let session = current
            .with_tokens(token.access, token.refresh)
            .ok_or_else(|| ApiError::Decode("refresh response carried an empty token".to_owned()))?;
        self.store.save(&session)?;
        log::debug!("access token refreshed");
        Ok(session)
    }
}
