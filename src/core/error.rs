//! core/error.rs
//! Why a quote load failed.
//!
//! The UI never tells these apart (it always shows the same fixed message).
//! The variants only exist so the log says what actually went wrong.
//!
//! Causes are stored as strings because the error rides inside an iced
//! `Message`, which must be `Clone` (and `reqwest::Error` is not).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    /// Connect/timeout/body-read problems.
    #[error("network error: {0}")]
    Network(String),

    /// Server answered, but not with 2xx.
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// Body was not the JSON shape we expect.
    #[error("malformed payload: {0}")]
    Payload(String),
}

/// Status codes are checked by hand in the loader, so anything reqwest
/// itself reports is a transport problem.
impl From<reqwest::Error> for LoadFailure {
    fn from(e: reqwest::Error) -> Self {
        LoadFailure::Network(e.to_string())
    }
}

impl From<serde_json::Error> for LoadFailure {
    fn from(e: serde_json::Error) -> Self {
        LoadFailure::Payload(e.to_string())
    }
}
