//! API base URL resolution.
//!
//! Native builds (SSR, tests) read `POS_API_URL` at runtime. The WASM bundle
//! has no process environment, so it uses the value `POS_API_URL` had when
//! the bundle was compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_URL_ENV: &str = "POS_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_raw(None)
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let runtime = std::env::var(API_URL_ENV).ok();
            Self::from_raw(runtime.as_deref().or(option_env!("POS_API_URL")))
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::from_raw(option_env!("POS_API_URL"))
        }
    }

    /// Unset or blank values fall back to `DEFAULT_API_URL`; trailing `/` is dropped.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(|v| v.trim().trim_end_matches('/'))
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_owned();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
