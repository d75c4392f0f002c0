use crate::core::registry::CheckerRegistry;
use crate::core::validator::{ObjectGraphValidator, ValidationSettings};
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuardConfig {
    pub logging: Option<LoggingConfig>,
    pub validation: Option<ValidationConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub detect_cycles: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LoggingConfig {
    pub fn format(&self) -> LogFormat {
        match self.format.as_deref().map(str::trim) {
            Some(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

impl GuardConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ServiceError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ServiceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ServiceError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validate_non_empty_string("logging.level", level)?;
                validate_one_of("logging.level", level, &LOG_LEVELS)?;
            }
            if let Some(format) = &logging.format {
                validate_one_of("logging.format", format, &LOG_FORMATS)?;
            }
        }
        Ok(())
    }

    pub fn logging(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }

    pub fn validation_settings(&self) -> ValidationSettings {
        let defaults = ValidationSettings::default();
        ValidationSettings {
            detect_cycles: self
                .validation
                .as_ref()
                .and_then(|v| v.detect_cycles)
                .unwrap_or(defaults.detect_cycles),
        }
    }

    /// Validator over the process-wide checker registry, tuned by this configuration.
    pub fn validator(&self) -> ObjectGraphValidator {
        ObjectGraphValidator::with_settings(CheckerRegistry::global(), self.validation_settings())
    }
}

impl Validate for GuardConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
