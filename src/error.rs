//! Error types for the Bitget client library.

use thiserror::Error;

/// The main error type for all Bitget client operations.
#[derive(Error, Debug)]
pub enum BitgetError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Query parameters could not be form-encoded
    #[error("Query encoding error: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Bitget API returned a non-success code
    #[error("Bitget API error: {0}")]
    Api(ApiError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),
}

/// Bitget API error code and message.
///
/// These come from the `code` and `msg` fields of the response envelope.
/// The client never raises them on its own; they are produced by
/// [`Envelope::into_result`](crate::spot::rest::Envelope::into_result).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The error code from Bitget (e.g., "40009")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl ApiError {
    /// Create a new API error from code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.code == error_codes::TOO_MANY_REQUESTS
    }

    /// Check if the API key was rejected.
    pub fn is_invalid_key(&self) -> bool {
        self.code == error_codes::INVALID_ACCESS_KEY || self.code == error_codes::EMPTY_ACCESS_KEY
    }

    /// Check if the signature did not match the server-side computation.
    pub fn is_invalid_signature(&self) -> bool {
        self.code == error_codes::SIGNATURE_ERROR || self.code == error_codes::EMPTY_SIGNATURE
    }

    /// Check if the request timestamp fell outside the accepted window.
    pub fn is_timestamp_expired(&self) -> bool {
        self.code == error_codes::TIMESTAMP_EXPIRED || self.code == error_codes::INVALID_TIMESTAMP
    }

    /// Check if the passphrase did not match the key.
    pub fn is_invalid_passphrase(&self) -> bool {
        self.code == error_codes::INCORRECT_PASSPHRASE
    }
}

/// Known Bitget codes for pattern matching.
pub mod error_codes {
    /// Success
    pub const SUCCESS: &str = "00000";

    /// Authentication errors
    pub const EMPTY_ACCESS_KEY: &str = "40001";
    pub const EMPTY_SIGNATURE: &str = "40002";
    pub const INVALID_TIMESTAMP: &str = "40005";
    pub const INVALID_ACCESS_KEY: &str = "40006";
    pub const TIMESTAMP_EXPIRED: &str = "40008";
    pub const SIGNATURE_ERROR: &str = "40009";
    pub const INCORRECT_PASSPHRASE: &str = "40012";

    /// Throttling
    pub const TOO_MANY_REQUESTS: &str = "429";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new("40009", "sign signature error");
        assert_eq!(error.to_string(), "40009: sign signature error");
    }

    #[test]
    fn test_api_error_classification() {
        assert!(ApiError::new("40009", "sign signature error").is_invalid_signature());
        assert!(ApiError::new("40008", "Request timestamp expired").is_timestamp_expired());
        assert!(ApiError::new("40012", "apikey/password is incorrect").is_invalid_passphrase());
        assert!(ApiError::new("429", "Too Many Requests").is_rate_limit());
        assert!(!ApiError::new("40006", "Invalid ACCESS_KEY").is_rate_limit());
        assert!(ApiError::new("40006", "Invalid ACCESS_KEY").is_invalid_key());
    }
}
