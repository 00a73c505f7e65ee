//! Persisted credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the only code that reads or writes the credential keys.
//! The backend is `localStorage` in the browser and an in-process map in
//! tests.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is synchronous and assumes a single writer (one tab). No
//! cross-tab change events are observed.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

#[cfg(test)]
use std::collections::BTreeMap;
#[cfg(test)]
use std::sync::{Arc, Mutex};

use super::session::Session;
use crate::error::StorageError;

pub const USERNAME_KEY: &str = "username";
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Keys written on login and removed together on logout.
pub const CREDENTIAL_KEYS: [&str; 3] = [USERNAME_KEY, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY];

/// String key-value storage that survives reloads.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

impl CredentialStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|_| StorageError::Read { key: key.to_owned() })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Write { key: key.to_owned() })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|_| StorageError::Write { key: key.to_owned() })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process storage. Clones share the same map.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryStorage {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored entries.
    pub(crate) fn entries(&self) -> BTreeMap<String, String> {
        self.entries.lock().map(|map| map.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl CredentialStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self
            .entries
            .lock()
            .map_err(|_| StorageError::Read { key: key.to_owned() })?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self
            .entries
            .lock()
            .map_err(|_| StorageError::Write { key: key.to_owned() })?;
        map.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self
            .entries
            .lock()
            .map_err(|_| StorageError::Write { key: key.to_owned() })?;
        map.remove(key);
        Ok(())
    }
}

/// Credentials as read from storage; any field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersistedCredentials {
    pub username: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl PersistedCredentials {
    /// Authenticated session when all three values are present, otherwise
    /// an empty anonymous one.
    pub fn into_session(self) -> Session {
        match (self.username, self.access_token, self.refresh_token) {
            (Some(username), Some(access), Some(refresh)) => {
                Session::authenticated(username, access, refresh).unwrap_or_else(Session::anonymous)
            }
            _ => Session::anonymous(),
        }
    }
}

/// Typed access to the credential keys.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    backend: S,
}

impl<S: CredentialStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &S {
        &self.backend
    }

    /// Read all three keys. A read failure on any key is returned.
    pub fn load(&self) -> Result<PersistedCredentials, StorageError> {
        Ok(PersistedCredentials {
            username: self.backend.get(USERNAME_KEY)?,
            access_token: self.backend.get(ACCESS_TOKEN_KEY)?,
            refresh_token: self.backend.get(REFRESH_TOKEN_KEY)?,
        })
    }

    /// Write the credentials of an authenticated session. Anonymous sessions
    /// are not written.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let (Some(username), Some(access), Some(refresh)) =
            (session.username(), session.access_token(), session.refresh_token())
        else {
            return Ok(());
        };
        self.backend.set(USERNAME_KEY, username)?;
        self.backend.set(ACCESS_TOKEN_KEY, access)?;
        self.backend.set(REFRESH_TOKEN_KEY, refresh)?;
        Ok(())
    }

    /// Remove all credential keys. Every key is attempted; the first failure
    /// is returned.
    pub fn clear(&self) -> Result<(), StorageError> {
        CREDENTIAL_KEYS
            .iter()
            .map(|key| self.backend.remove(key))
            .fold(Ok(()), |acc, res| acc.and(res))
    }
}
