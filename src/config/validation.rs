//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{CampusConnectError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_storage_config(&settings.storage)?;
    validate_profile_config(&settings.profile)?;
    validate_logging_config(&settings.logging)?;

    if let Some(ref seed_path) = settings.catalog.seed_path {
        if seed_path.is_empty() {
            return Err(CampusConnectError::Config(
                "Catalog seed path must not be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validate storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.path.is_empty() {
        return Err(CampusConnectError::Config(
            "Storage path is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate profile configuration
fn validate_profile_config(config: &super::ProfileConfig) -> Result<()> {
    if config.user_id.is_empty() {
        return Err(CampusConnectError::Config(
            "Profile user id is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CampusConnectError::Config(
            "Log level is required".to_string(),
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CampusConnectError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_empty_storage_path_is_rejected() {
        let mut settings = Settings::default();
        settings.storage.path = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
