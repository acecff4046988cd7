//! Command argument validation utilities
//!
//! This module provides centralized validation logic for command arguments
//! after clap parsing. It handles domain-specific validation rules that
//! go beyond basic argument parsing.

use crate::utils::{extract_gist_id, is_safe_file_name};
use anyhow::{Result, anyhow};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Required argument was not provided
    MissingRequired {
        argument: String,
        alternatives: Vec<String>,
    },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MissingRequired {
                argument,
                alternatives,
            } => {
                if alternatives.is_empty() {
                    write!(f, "{} is required", argument)
                } else {
                    write!(
                        f,
                        "{} is required when {}",
                        argument,
                        alternatives.join(", ")
                    )
                }
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Validate a gist reference (URL or bare id)
pub fn validate_gist_reference(reference: &str) -> Result<()> {
    if extract_gist_id(reference).is_err() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "gist".to_string(),
                value: reference.to_string(),
                reason: "expected a gist URL or id".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate a gist file name
///
/// Names are used as-is for local files on download, so path separators
/// and directory entries are rejected.
pub fn validate_file_name(name: &str) -> Result<()> {
    if !is_safe_file_name(name) {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "file name".to_string(),
                value: name.to_string(),
                reason: "must be a plain file name without path separators".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate the API base URL
pub fn validate_base_url(url: &str) -> Result<()> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "base URL".to_string(),
                value: url.to_string(),
                reason: "must start with http:// or https://".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate the file source arguments
///
/// Reading content from stdin (`-`) requires an explicit `--name`.
pub fn validate_file_source(path: &str, name: &Option<String>) -> Result<()> {
    if path == "-" && name.is_none() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::MissingRequired {
                argument: "--name".to_string(),
                alternatives: vec!["reading from stdin".to_string()],
            },
        ));
    }
    if path.trim().is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "file".to_string(),
                value: path.to_string(),
                reason: "file path cannot be empty".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate a user name for listing
pub fn validate_user(user: &Option<String>) -> Result<()> {
    if let Some(user) = user
        && (user.trim().is_empty()
            || user.contains('/')
            || matches!(user.as_str(), "." | ".."))
    {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "user".to_string(),
                value: user.clone(),
                reason: "must be a non-empty user name".to_string(),
            },
        ));
    }
    Ok(())
}
