//! The single failure type surfaced by account API calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// A failed API round trip.
///
/// `message` is human-readable and safe to show in the UI: the backend's own
/// message when the response carried one, otherwise the operation's generic
/// fallback. `status` is set whenever an HTTP response was received.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    pub status: Option<u16>,
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { status: None, message: message.into() }
    }

    /// Build from a non-success response, preferring the body's `error` then
    /// `message` field over `fallback`.
    #[must_use]
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let message = backend_message(body).unwrap_or_else(|| fallback.to_owned());
        Self { status: Some(status), message }
    }

    /// Build from a transport failure (no response received). The underlying
    /// cause is logged, the caller only sees `fallback`.
    pub fn transport(cause: impl std::fmt::Display, fallback: &str) -> Self {
        log::debug!("request transport failure: {cause}");
        Self::new(fallback)
    }

    /// True when the backend rejected the credentials or token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

fn backend_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    [parsed.error, parsed.message]
        .into_iter()
        .flatten()
        .map(|m| m.trim().to_owned())
        .find(|m| !m.is_empty())
}
