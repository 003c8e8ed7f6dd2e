//! Error type returned by the REST helpers.

use thiserror::Error;

/// A failed API call.
///
/// The transport error is kept as-is: non-2xx statuses, connection failures,
/// and body decoding failures all surface as the underlying `reqwest::Error`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status of the response, when the server answered with a non-2xx code.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
