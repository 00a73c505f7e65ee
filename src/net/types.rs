//! Wire DTOs for the authentication API.
//!
//! DESIGN
//! ======
//! Field names match the JSON the API expects, so no serde renames are
//! needed except where a Rust keyword or clearer name intervenes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /users/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Body of `POST /users/register/company/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CompanyRegistration {
    pub username: String,
    pub password: String,
    pub email: String,
    /// Company display name.
    pub name: String,
    pub domain: String,
}

/// Body of `POST /users/token/refresh/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Refresh response. Rotating servers also return a new refresh token.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RefreshedToken {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}
