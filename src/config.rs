//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API base URL is baked into the WASM bundle when it is compiled
//! (`API_URL=https://api.example.com trunk build`). There is no runtime
//! configuration surface in the browser.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Log level used when `LOG_LEVEL` is not set at build time.
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Connection settings for the authentication API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL. Trailing slashes are dropped
    /// so endpoint paths can always start with `/`.
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Read `API_URL` from the build environment.
    pub fn from_env() -> Self {
        Self::new(option_env!("API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an absolute endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Parse a log level name, falling back to [`DEFAULT_LOG_LEVEL`].
pub fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Log level selected by `LOG_LEVEL` at build time.
pub fn log_level() -> log::Level {
    parse_log_level(option_env!("LOG_LEVEL"))
}
