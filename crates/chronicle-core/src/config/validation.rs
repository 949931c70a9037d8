//! Configuration validation

use globset::Glob;
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_project(config)?;
    validate_traversal(config)?;
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_project(config: &Config) -> Result<()> {
    if config.project.title.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "project.title".to_string(),
            message: "title cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_traversal(config: &Config) -> Result<()> {
    if config.traversal.rev.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "traversal.rev".to_string(),
            message: "rev cannot be empty".to_string(),
        }
        .into());
    }

    validate_glob("traversal.tag_pattern", &config.traversal.tag_pattern)?;

    for pattern in &config.traversal.include_branches {
        validate_glob("traversal.include_branches", pattern)?;
    }
    for pattern in &config.traversal.exclude_branches {
        validate_glob("traversal.exclude_branches", pattern)?;
    }

    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    for (commit_type, type_config) in &config.changelog.types {
        if type_config.section.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("changelog.types.{commit_type}.section"),
                message: "section title cannot be empty".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_glob(field: &str, pattern: &str) -> Result<()> {
    Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: format!("{field}: {e}"),
    })?;
    Ok(())
}
