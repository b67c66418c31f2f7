//! Unified error type for registry API operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for all vehicle-registry operations.
///
/// Covers the three failure classes the dashboard treats identically:
/// transport failures ([`Network`](Self::Network) / [`Timeout`](Self::Timeout)),
/// non-success HTTP statuses ([`Status`](Self::Status)), and undecodable
/// response bodies ([`Parse`](Self::Parse)). All variants are serializable
/// for structured error reporting.
///
/// The client never retries; a request either resolves or fails exactly once,
/// and recovery is left to the user re-triggering an action.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum RegistryError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request ran into the transport's request timeout.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Status code of the response.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("Parse error: {detail}")]
    Parse {
        /// Details about the decode failure.
        detail: String,
    },
}

impl RegistryError {
    /// Whether the failure is transport-level and might succeed when the user
    /// re-triggers the action. Used for log levelling; nothing retries
    /// automatically.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}

/// Convenience type alias for `Result<T, RegistryError>`.
pub type Result<T> = std::result::Result<T, RegistryError>;
