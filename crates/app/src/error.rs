//! Operation refusals paired with their rendered user-facing detail.

use homehub_domain::error::HomeHubError;

/// A refused hub operation: the tagged error kind plus the localized
/// detail text rendered at the point of detection.
///
/// Rejections travel up through ordinary `Result` returns; nothing in the
/// hub panics or unwinds for a modeled failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct Rejection {
    /// What was refused, with the offending identifiers attached.
    #[source]
    pub error: HomeHubError,
    /// Locale-rendered text describing the refusal to the caller.
    pub detail: String,
}

impl Rejection {
    /// Numeric status code for the response body.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.error.status_code()
    }
}
