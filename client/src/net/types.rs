//! JSON DTOs for the backend `/auth` endpoints.
//!
//! DESIGN
//! ======
//! Field names match the backend schemas exactly so no serde renames are
//! needed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login request body for `POST /auth/login`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AuthCredentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Refresh request body for `POST /auth/refresh`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Access/refresh credential pair returned by a successful login or refresh.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Authenticated user as reported by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub nombre: String,
    /// Role key (`mozo`, `cocina`, `caja`, `admin`).
    pub rol: String,
    pub activo: bool,
    /// ISO-8601 timestamp of the previous login, when the backend has one.
    #[serde(default)]
    pub last_login: Option<String>,
}
