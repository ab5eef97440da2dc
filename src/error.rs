//! Error taxonomy shared by every command
//!
//! Each variant maps to exactly one wire code in the output envelope. Keep
//! `code()` and `context()` exhaustive so a new variant cannot reach the
//! envelope without a code.

use serde_json::{Map, Value, json};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("missing credential '{key}': {hint}")]
    MissingCredential {
        key: String,
        service: Option<String>,
        hint: String,
    },

    #[error("unknown service '{service}'")]
    UnknownService { service: String, available: Vec<String> },

    #[error("unknown integration group '{group}'")]
    UnknownGroup { group: String, available: Vec<String> },

    #[error("unknown integration '{integration}'")]
    UnknownIntegration { integration: String },

    #[error(
        "key '{key}' does not belong to service '{service}' (valid keys: {})",
        .valid_keys.join(", ")
    )]
    InvalidKey {
        service: String,
        key: String,
        valid_keys: Vec<String>,
    },

    #[error(
        "service '{service}' has {} keys; specify one of: {}",
        .valid_keys.len(),
        .valid_keys.join(", ")
    )]
    AmbiguousKey { service: String, valid_keys: Vec<String> },

    #[error("{0}")]
    Usage(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("registry is inconsistent ({} problems)", .problems.len())]
    Registry { problems: Vec<String> },
}

impl Error {
    pub fn config(path: impl Into<PathBuf>, cause: impl std::fmt::Display) -> Self {
        Self::Config {
            path: path.into(),
            message: cause.to_string(),
        }
    }

    /// Wire code surfaced as `error.code`
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config_error",
            Self::MissingCredential { .. } => "missing_credential",
            Self::UnknownService { .. } => "unknown_service",
            Self::UnknownGroup { .. } => "unknown_group",
            Self::UnknownIntegration { .. } => "unknown_integration",
            Self::InvalidKey { .. } => "invalid_key",
            Self::AmbiguousKey { .. } => "ambiguous_key",
            Self::Usage(_) => "usage_error",
            Self::Internal(_) => "internal_error",
            Self::Registry { .. } => "registry_error",
        }
    }

    /// Structured fields flattened next to `code` and `message`
    pub fn context(&self) -> Map<String, Value> {
        let value = match self {
            Self::Config { path, .. } => json!({ "path": path.display().to_string() }),
            Self::MissingCredential { key, service, hint } => json!({ "key": key, "service": service, "hint": hint }),
            Self::UnknownService { service, available } => json!({ "service": service, "available": available }),
            Self::UnknownGroup { group, available } => json!({ "group": group, "available": available }),
            Self::UnknownIntegration { integration } => json!({ "integration": integration }),
            Self::InvalidKey {
                service,
                key,
                valid_keys,
            } => json!({ "service": service, "key": key, "valid_keys": valid_keys }),
            Self::AmbiguousKey { service, valid_keys } => json!({ "service": service, "valid_keys": valid_keys }),
            Self::Usage(_) | Self::Internal(_) => json!({}),
            Self::Registry { problems } => json!({ "problems": problems }),
        };

        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}
