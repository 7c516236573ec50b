//! Leveling controller configuration
//!
//! Stored as JSON. The recognized options are the hover PWM value, one
//! tolerance per axis and the loop period; the legacy constant names
//! (`HOVER_PWM_VAL`, `X_TOL`, `Y_TOL`, `Z_TOL`, `LOOP_TIME`) are accepted as
//! aliases. Missing options take their defaults, unknown ones are rejected.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Tuning of the leveling loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LevelingConfig {
    /// PWM value every motor starts from each cycle
    #[serde(alias = "HOVER_PWM_VAL")]
    pub hover_pwm: f32,
    /// Dead band on the x error (raw accelerometer units)
    #[serde(alias = "X_TOL")]
    pub x_tolerance: f32,
    /// Dead band on the y error
    #[serde(alias = "Y_TOL")]
    pub y_tolerance: f32,
    /// Dead band on the z error
    #[serde(alias = "Z_TOL")]
    pub z_tolerance: f32,
    /// Control loop period (milliseconds)
    #[serde(alias = "LOOP_TIME")]
    pub loop_period_ms: u64,
}

impl Default for LevelingConfig {
    fn default() -> Self {
        Self {
            hover_pwm: 50.0,
            x_tolerance: 2.0,
            y_tolerance: 2.0,
            z_tolerance: 3.0,
            loop_period_ms: 500,
        }
    }
}

/// Configuration loading and validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Configuration file I/O error
    #[error("{message}")]
    Io { message: String },
    /// JSON serialization/deserialization error
    #[error("{message}")]
    Serialization { message: String },
    /// Invalid parameter value
    #[error("Invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl LevelingConfig {
    /// Load and validate configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        Self::from_json(&content).map_err(|e| match e {
            ConfigError::Serialization { message } => ConfigError::Serialization {
                message: format!("Failed to parse config file '{}': {}", path_str, message),
            },
            other => other,
        })
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: LevelingConfig = serde_json::from_str(content)
            .map_err(|e| ConfigError::Serialization { message: e.to_string() })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&path, content).map_err(|e| ConfigError::Io {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.hover_pwm.is_finite() || self.hover_pwm < 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "hover_pwm",
                value: self.hover_pwm.to_string(),
                reason: "must be a finite, non-negative PWM value",
            });
        }

        for (parameter, tolerance) in [
            ("x_tolerance", self.x_tolerance),
            ("y_tolerance", self.y_tolerance),
            ("z_tolerance", self.z_tolerance),
        ] {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(ConfigError::InvalidParameter {
                    parameter,
                    value: tolerance.to_string(),
                    reason: "must be finite and non-negative",
                });
            }
        }

        if self.loop_period_ms == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "loop_period_ms",
                value: self.loop_period_ms.to_string(),
                reason: "must be at least 1 ms",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = LevelingConfig::default();
        assert_eq!(config.hover_pwm, 50.0);
        assert_eq!(config.x_tolerance, 2.0);
        assert_eq!(config.y_tolerance, 2.0);
        assert_eq!(config.z_tolerance, 3.0);
        assert_eq!(config.loop_period_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = LevelingConfig::from_json(r#"{ "hover_pwm": 60.0 }"#).unwrap();
        assert_eq!(config.hover_pwm, 60.0);
        assert_eq!(config.z_tolerance, 3.0);
    }

    #[test]
    fn test_legacy_constant_names_accepted() {
        let config = LevelingConfig::from_json(
            r#"{ "HOVER_PWM_VAL": 45, "X_TOL": 1, "Y_TOL": 1.5, "Z_TOL": 4, "LOOP_TIME": 250 }"#,
        )
        .unwrap();

        assert_eq!(
            config,
            LevelingConfig {
                hover_pwm: 45.0,
                x_tolerance: 1.0,
                y_tolerance: 1.5,
                z_tolerance: 4.0,
                loop_period_ms: 250,
            }
        );
    }

    #[test]
    fn test_unknown_option_rejected() {
        let result = LevelingConfig::from_json(r#"{ "kp": 0.5 }"#);
        assert!(matches!(result, Err(ConfigError::Serialization { .. })));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            LevelingConfig::from_json(r#"{ "loop_period_ms": 0 }"#),
            Err(ConfigError::InvalidParameter { parameter: "loop_period_ms", .. })
        ));
        assert!(matches!(
            LevelingConfig::from_json(r#"{ "y_tolerance": -1.0 }"#),
            Err(ConfigError::InvalidParameter { parameter: "y_tolerance", .. })
        ));
        assert!(matches!(
            LevelingConfig::from_json(r#"{ "hover_pwm": -5 }"#),
            Err(ConfigError::InvalidParameter { parameter: "hover_pwm", .. })
        ));
    }

    #[test]
    fn test_config_file_round_trip() {
        let config = LevelingConfig {
            hover_pwm: 55.0,
            loop_period_ms: 200,
            ..Default::default()
        };

        let temp_path: PathBuf = std::env::temp_dir().join("gps_hover_test_config.json");
        config.save_to_file(&temp_path).unwrap();
        let loaded = LevelingConfig::from_file(&temp_path).unwrap();

        assert_eq!(loaded, config);

        let _ = fs::remove_file(temp_path);
    }

    #[test]
    fn test_missing_file() {
        let result = LevelingConfig::from_file("does/not/exist.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
