//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Intake hook the wizard posts to unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "https://hooks.zapier.com/hooks/catch/20742109/u67siz4/";

/// Tag sent as `submitted_via` so the intake side can tell this flow apart.
pub const DEFAULT_SUBMITTED_VIA: &str = "multi_step_contact";

/// Wizard configuration.
#[derive(Debug, Clone)]
pub struct WizardConfig {
    /// Remote intake URL receiving the form POST.
    pub endpoint: String,
    /// Constant tag identifying this flow.
    pub submitted_via: String,
    /// How long the transport waits before giving up on the endpoint.
    /// The surface settles either way.
    pub request_timeout: Duration,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            submitted_via: DEFAULT_SUBMITTED_VIA.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl WizardConfig {
    /// Check that the endpoint is an absolute http(s) URL and the tag is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "endpoint".to_string(),
                hint: "Set it to the intake URL that receives the form POST.".to_string(),
            });
        }

        let url = reqwest::Url::parse(&self.endpoint).map_err(|e| ConfigError::InvalidValue {
            key: "endpoint".to_string(),
            message: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                key: "endpoint".to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        if self.submitted_via.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "submitted_via".to_string(),
                hint: "The intake side uses it to identify this flow.".to_string(),
            });
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "request_timeout".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = WizardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.submitted_via, "multi_step_contact");
    }

    #[test]
    fn rejects_empty_endpoint() {
        let config = WizardConfig {
            endpoint: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingRequired { ref key, .. }) if key == "endpoint"
        ));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let config = WizardConfig {
            endpoint: "ftp://example.com/hook".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));

        let config = WizardConfig {
            endpoint: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = WizardConfig {
            request_timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
