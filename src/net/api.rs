//! REST client for the authentication API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ApiError::Unavailable`] so the crate
//! and its unit tests compile without a browser.
//!
//! DESIGN
//! ======
//! There is no shared client with default headers. The bearer token is an
//! explicit argument to every call and is applied by the single request
//! builder, so a request carries exactly the credential its caller passed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CompanyRegistration, LoginRequest, RefreshRequest, RefreshedToken, TokenPair};
use crate::config::ApiConfig;
use crate::error::ApiError;

pub const LOGIN_PATH: &str = "/users/login/";
pub const REGISTER_COMPANY_PATH: &str = "/users/register/company/";
pub const TOKEN_REFRESH_PATH: &str = "/users/token/refresh/";

/// `Authorization` header value for a bearer token.
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Headers attached to every outbound request.
fn request_headers(bearer: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Accept", "application/json".to_owned())];
    if let Some(token) = bearer.filter(|t| !t.is_empty()) {
        headers.push(("Authorization", bearer_value(token)));
    }
    headers
}

/// Operations the session context needs from the API.
///
/// `bearer` is the access token of the current session, if any.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange credentials for an access/refresh token pair.
    async fn login(&self, bearer: Option<&str>, body: &LoginRequest) -> Result<TokenPair, ApiError>;

    /// Create a company and its first user.
    async fn register_company(
        &self,
        bearer: Option<&str>,
        body: &CompanyRegistration,
    ) -> Result<(), ApiError>;

    /// Exchange a refresh token for a new access token.
    async fn refresh(
        &self,
        bearer: Option<&str>,
        body: &RefreshRequest,
    ) -> Result<RefreshedToken, ApiError>;
}

/// HTTP implementation of [`AuthApi`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpAuthClient {
    config: ApiConfig,
}

impl HttpAuthClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[cfg(feature = "csr")]
    fn post(&self, path: &str, bearer: Option<&str>) -> gloo_net::http::RequestBuilder {
        let url = self.config.endpoint(path);
        request_headers(bearer)
            .into_iter()
            .fold(gloo_net::http::Request::post(&url), |builder, (name, value)| {
                builder.header(name, &value)
            })
    }

    /// POST a JSON body and return the response if it was 2xx.
    #[cfg(feature = "csr")]
    async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        bearer: Option<&str>,
        body: &B,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let resp = self
            .post(path, bearer)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            log::warn!("POST {path} failed: {status}");
            return Err(ApiError::from_response(status, &text));
        }
        Ok(resp)
    }
}

impl AuthApi for HttpAuthClient {
    async fn login(&self, bearer: Option<&str>, body: &LoginRequest) -> Result<TokenPair, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self.post_json(LOGIN_PATH, bearer, body).await?;
            resp.json::<TokenPair>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (bearer, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn register_company(
        &self,
        bearer: Option<&str>,
        body: &CompanyRegistration,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            self.post_json(REGISTER_COMPANY_PATH, bearer, body).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (bearer, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn refresh(
        &self,
        bearer: Option<&str>,
        body: &RefreshRequest,
    ) -> Result<RefreshedToken, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self.post_json(TOKEN_REFRESH_PATH, bearer, body).await?;
            resp.json::<RefreshedToken>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (bearer, body);
            Err(ApiError::Unavailable)
        }
    }
}
