//! Error types

use crate::protocol::constants::UNKNOWN_OUTCOME_CODE;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by a session negotiation.
///
/// Every variant is scoped to a single negotiation attempt; none is fatal
/// to the process. The crate performs no internal retry; transient
/// conditions are surfaced as-is so the caller can decide.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The HTTP round trip itself failed: connect error, timeout,
    /// external cancellation. Retry-safe from the caller's perspective.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service or an intermediary reported upstream unavailability
    /// (502/503/504). Transient; retry-safe.
    #[error("login service unavailable (HTTP {status}): {url}")]
    ServiceUnavailable {
        /// HTTP status returned.
        status: u16,
        /// Login URL the request was sent to.
        url: String,
    },

    /// The service declined the credentials, either at the transport layer
    /// (401/403) or in a well-formed response with `success=false`. Not
    /// retry-safe without changed credentials.
    #[error("connection rejected (code {code}): {message}")]
    ConnectionRejected {
        /// Service outcome code; [`UNKNOWN_OUTCOME_CODE`] when the service
        /// sent a code that does not parse as an integer.
        code: i32,
        /// Service-provided message, or a diagnostic for transport-layer
        /// rejections.
        message: String,
    },

    /// Any other non-success HTTP status.
    #[error("authentication failed (HTTP {status}) at {url}: {body}")]
    AuthenticationFailed {
        /// HTTP status returned.
        status: u16,
        /// Login URL the request was sent to.
        url: String,
        /// Truncated response body, best effort.
        body: String,
    },

    /// The transport exchange succeeded but the response body was not a
    /// valid login envelope. Distinct from a credential rejection.
    #[error("malformed login response: {0}")]
    MalformedResponse(String),

    /// Caller-supplied configuration was unusable (empty account name,
    /// unparseable endpoint).
    #[error("invalid connection configuration: {0}")]
    Config(String),
}

impl Error {
    /// Rejection reported by the service application layer.
    pub(crate) fn rejected(code: Option<&str>, message: String) -> Self {
        let code = match code {
            Some(raw) => raw.parse::<i32>().unwrap_or_else(|_| {
                tracing::warn!(raw_code = %raw, "service returned a non-numeric outcome code");
                UNKNOWN_OUTCOME_CODE
            }),
            None => UNKNOWN_OUTCOME_CODE,
        };
        Error::ConnectionRejected { code, message }
    }

    /// Whether retrying the same negotiation with unchanged inputs can
    /// reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::ServiceUnavailable { .. }
        )
    }
}
