//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! ```toml
//! [neis]
//! office_code = "J10"
//! school_code = "7530079"
//! use_relay = false
//!
//! [output]
//! format = "json"
//! color = false
//! ```

use crate::neis::{
    DEFAULT_API_URL, DEFAULT_OFFICE_CODE, DEFAULT_RELAY_URL, DEFAULT_SCHOOL_CODE,
    DEFAULT_USER_AGENT, NeisClientConfig,
};
use meal_domain::OutputFormat;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("neis.office_code cannot be empty")]
    EmptyOfficeCode,

    #[error("neis.school_code cannot be empty")]
    EmptySchoolCode,

    #[error("{field} is not a valid URL: {value}")]
    InvalidUrl { field: &'static str, value: String },
}

/// Raw NEIS endpoint configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNeisConfig {
    /// Meal service endpoint
    pub api_url: String,
    /// Office of education code
    pub office_code: String,
    /// School code
    pub school_code: String,
    /// CORS relay endpoint
    pub relay_url: String,
    /// Route requests through the relay
    pub use_relay: bool,
    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl Default for FileNeisConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            office_code: DEFAULT_OFFICE_CODE.to_string(),
            school_code: DEFAULT_SCHOOL_CODE.to_string(),
            relay_url: DEFAULT_RELAY_URL.to_string(),
            use_relay: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FileNeisConfig {
    /// Convert to the client's runtime configuration
    pub fn to_client_config(&self) -> NeisClientConfig {
        NeisClientConfig {
            api_url: self.api_url.clone(),
            office_code: self.office_code.clone(),
            school_code: self.school_code.clone(),
            relay_url: self.use_relay.then(|| self.relay_url.clone()),
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while the request is in flight
    pub show_progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            show_progress: true,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub neis: FileNeisConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.neis.office_code.trim().is_empty() {
            return Err(ConfigValidationError::EmptyOfficeCode);
        }
        if self.neis.school_code.trim().is_empty() {
            return Err(ConfigValidationError::EmptySchoolCode);
        }

        if Url::parse(&self.neis.api_url).is_err() {
            return Err(ConfigValidationError::InvalidUrl {
                field: "neis.api_url",
                value: self.neis.api_url.clone(),
            });
        }
        // An unused relay URL is not worth failing over
        if self.neis.use_relay && Url::parse(&self.neis.relay_url).is_err() {
            return Err(ConfigValidationError::InvalidUrl {
                field: "neis.relay_url",
                value: self.neis.relay_url.clone(),
            });
        }

        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[neis]
api_url = "http://localhost:8080/hub/mealServiceDietInfo"
office_code = "B10"
school_code = "7010057"
relay_url = "https://relay.example/raw"
use_relay = false
user_agent = "test-agent"

[output]
format = "json"
color = false
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.neis.office_code, "B10");
        assert_eq!(config.neis.school_code, "7010057");
        assert!(!config.neis.use_relay);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
        assert!(!config.output.show_progress);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[neis]
school_code = "7010057"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.neis.school_code, "7010057");
        // Defaults should apply
        assert_eq!(config.neis.office_code, DEFAULT_OFFICE_CODE);
        assert!(config.neis.use_relay);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config_matches_built_in_constants() {
        let config = FileConfig::default();
        assert_eq!(config.neis.api_url, DEFAULT_API_URL);
        assert_eq!(config.neis.office_code, "J10");
        assert_eq!(config.neis.school_code, "7530079");
        assert!(config.neis.use_relay);
        assert_eq!(config.neis.to_client_config(), NeisClientConfig::default());
    }

    #[test]
    fn test_to_client_config_without_relay() {
        let config = FileNeisConfig {
            use_relay: false,
            ..FileNeisConfig::default()
        };
        assert_eq!(config.to_client_config().relay_url, None);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_school_code() {
        let toml_str = r#"
[neis]
school_code = "  "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptySchoolCode)
        ));
    }

    #[test]
    fn test_validate_bad_relay_only_when_used() {
        let mut config = FileConfig::default();
        config.neis.relay_url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidUrl {
                field: "neis.relay_url",
                ..
            })
        ));

        config.neis.use_relay = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let config = FileConfig::default();
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[neis]"));
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.neis.school_code, config.neis.school_code);
    }
}
