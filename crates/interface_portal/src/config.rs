//! Portal configuration

use serde::Deserialize;

/// Portal configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Base URL of the external directions provider
    pub maps_base_url: String,
    /// Field separator for the payment export
    pub export_delimiter: String,
    /// Log level
    pub log_level: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            maps_base_url: "https://www.google.com/maps/dir".to_string(),
            export_delimiter: ",".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl PortalConfig {
    /// Loads configuration from environment variables prefixed `PORTAL_`
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("PORTAL"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.maps_base_url, "https://www.google.com/maps/dir");
        assert_eq!(config.export_delimiter, ",");
        assert_eq!(config.log_level, "info");
    }
}
