//! Reactive session handle shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App`, read by the navigation guard, the menu, and every
//! screen via [`use_session`]. Screens call the handle's operations; the
//! handle runs them on [`SessionContext`] and publishes the resulting session.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded event loop. `pending` is set while a network-bound
//! operation is in flight and a second submission is refused with
//! [`SessionError::Busy`], so overlapping logins cannot apply out of order.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use leptos::prelude::*;

use super::context::SessionContext;
use super::session::Session;
use super::store::{BrowserStorage, CredentialStore};
use crate::error::{ApiError, SessionError};
use crate::net::api::{AuthApi, HttpAuthClient};
use crate::net::types::CompanyRegistration;

/// Session context wired to `localStorage` and the HTTP API.
pub type BrowserSessionContext = SessionContext<BrowserStorage, HttpAuthClient>;

/// Reactive view of the session. Components use the browser-wired default.
pub struct SessionHandle<S = BrowserStorage, A = HttpAuthClient> {
    pub session: RwSignal<Session>,
    pub pending: RwSignal<bool>,
    context: StoredValue<SessionContext<S, A>>,
}

impl<S, A> Clone for SessionHandle<S, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, A> Copy for SessionHandle<S, A> {}

impl<S, A> SessionHandle<S, A>
where
    S: CredentialStore + Clone + Send + Sync + 'static,
    A: AuthApi + Clone + Send + Sync + 'static,
{
    /// Create the handle with an already-initialized session and provide it
    /// as context for all descendants.
    pub fn provide(context: SessionContext<S, A>, initial: Session) -> Self {
        let handle = Self {
            session: RwSignal::new(initial),
            pending: RwSignal::new(false),
            context: StoredValue::new(context),
        };
        provide_context(handle);
        handle
    }

    pub fn username(&self) -> String {
        self.session.with(Session::display_name)
    }

    fn begin(&self) -> Result<SessionContext<S, A>, SessionError> {
        if self.pending.get_untracked() {
            return Err(SessionError::Busy);
        }
        self.pending.set(true);
        Ok(self.context.get_value())
    }

    /// # Errors
    ///
    /// Returns the login failure; the published session is left unchanged.
    pub async fn login(self, username: String, password: String) -> Result<(), SessionError> {
        let context = self.begin()?;
        let current = self.session.get_untracked();
        let result = context.login(&current, &username, &password).await;
        self.pending.set(false);
        self.session.set(result?);
        Ok(())
    }

    /// Clear the session. The published session becomes anonymous even when
    /// storage cleanup fails.
    ///
    /// # Errors
    ///
    /// Storage removal failures.
    pub fn logout(self) -> Result<(), SessionError> {
        let result = self.context.with_value(|context| context.logout());
        self.session.set(Session::anonymous());
        result.map(|_| ())
    }

    /// # Errors
    ///
    /// Registration failures, including field-keyed rejections.
    pub async fn register_company(self, registration: CompanyRegistration) -> Result<(), SessionError> {
        let context = self.begin()?;
        let current = self.session.get_untracked();
        let result: Result<(), ApiError> = context.register_company(&current, &registration).await;
        self.pending.set(false);
        result.map_err(SessionError::from)
    }

    /// # Errors
    ///
    /// Refresh failures; the published session is left unchanged.
    pub async fn refresh(self) -> Result<(), SessionError> {
        let context = self.begin()?;
        let current = self.session.get_untracked();
        let result = context.refresh(&current).await;
        self.pending.set(false);
        self.session.set(result?);
        Ok(())
    }
}

/// Session handle provided by `App`.
///
/// # Panics
///
/// When called outside the `App` component tree.
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}
