//! Error types for the Google OAuth client.
//!
//! Unlike the Shopify exchange, the Google wrapper does not absorb failures:
//! transport errors and upstream rejections propagate to the caller, who is
//! expected to log them and deny the sign-in.

use thiserror::Error;

/// Errors returned by [`GoogleAuthClient`](super::GoogleAuthClient) calls.
///
/// # Example
///
/// ```rust
/// use portal_auth::auth::google::GoogleAuthError;
///
/// let error = GoogleAuthError::Rejected {
///     status: 400,
///     message: "invalid_grant".to_string(),
/// };
/// assert!(error.to_string().contains("400"));
/// ```
#[derive(Debug, Error)]
pub enum GoogleAuthError {
    /// The HTTP request never completed.
    ///
    /// Wraps the underlying transport error (DNS failure, connection
    /// refused, TLS failure, timeout).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Google answered with a non-success status.
    #[error("Google rejected the request with status {status}: {message}")]
    Rejected {
        /// The HTTP status code returned.
        status: u16,
        /// The response body, as returned by Google.
        message: String,
    },

    /// Google answered 2xx but the body did not match the expected shape.
    #[error("Unexpected response from Google: {reason}")]
    UnexpectedResponse {
        /// Description of the parse failure.
        reason: String,
    },
}

// Verify GoogleAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GoogleAuthError>();
};
