//! REST client for the POS backend auth endpoints.
//!
//! Uses `reqwest`, which runs on `fetch` in the browser and on hyper in
//! native builds, so the same code serves hydration, SSR, and tests.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `ApiResult`. Non-2xx responses are turned into errors
//! with `error_for_status`; nothing is retried, interpreted, or stored here.

#[cfg(all(test, not(target_arch = "wasm32")))]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiResult;
use super::types::{AuthCredentials, AuthTokenPair, CurrentUser, RefreshRequest};
use crate::config::ApiConfig;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REFRESH_PATH: &str = "/auth/refresh";
pub const ME_PATH: &str = "/auth/me";

#[derive(Clone, Debug)]
pub struct AuthClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl AuthClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    pub fn with_http(http: reqwest::Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Exchange credentials for a token pair via `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the transport error on network failure, non-2xx status, or an
    /// undecodable body.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<AuthTokenPair> {
        let body = AuthCredentials { username, password };
        let pair = self
            .http
            .post(self.config.endpoint(LOGIN_PATH))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<AuthTokenPair>()
            .await?;
        log::debug!("login succeeded for {username}");
        Ok(pair)
    }

    /// Trade a refresh token for a new pair via `POST /auth/refresh`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AuthClient::login`].
    pub async fn refresh(&self, refresh_token: &str) -> ApiResult<AuthTokenPair> {
        let pair = self
            .http
            .post(self.config.endpoint(REFRESH_PATH))
            .json(&RefreshRequest { refresh_token })
            .send()
            .await?
            .error_for_status()?
            .json::<AuthTokenPair>()
            .await?;
        Ok(pair)
    }

    /// Fetch the user owning `access_token` via `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AuthClient::login`]; an expired token shows up
    /// as a 401 status.
    pub async fn current_user(&self, access_token: &str) -> ApiResult<CurrentUser> {
        let user = self
            .http
            .get(self.config.endpoint(ME_PATH))
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<CurrentUser>()
            .await?;
        Ok(user)
    }
}

/// Log in against the API configured by `POS_API_URL`.
///
/// # Errors
///
/// See [`AuthClient::login`].
pub async fn login(username: &str, password: &str) -> ApiResult<AuthTokenPair> {
    AuthClient::new(ApiConfig::from_env()).login(username, password).await
}
