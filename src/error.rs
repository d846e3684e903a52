//! Error types for the approval wizard.
//!
//! Validation never produces errors (the gates return booleans). These types
//! only cover configuration loading and the transport's internal delivery,
//! which the receiving surface logs and swallows.

use std::time::Duration;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}. {hint}")]
    MissingRequired { key: String, hint: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Delivery errors raised inside a transport.
///
/// None of these reach the wizard: the surface settles regardless.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Transport {name} request failed: {reason}")]
    Request { name: String, reason: String },

    #[error("Transport {name} timed out after {timeout:?}")]
    Timeout { name: String, timeout: Duration },
}

/// Result type alias for the wizard.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_into_top_level() {
        let err: Error = ConfigError::InvalidValue {
            key: "endpoint".into(),
            message: "not a URL".into(),
        }
        .into();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid configuration value for endpoint: not a URL"
        );
    }

    #[test]
    fn timeout_message_includes_duration() {
        let err = TransportError::Timeout {
            name: "http_form".into(),
            timeout: Duration::from_secs(3),
        };
        assert_eq!(err.to_string(), "Transport http_form timed out after 3s");
    }
}
