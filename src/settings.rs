//! Tool settings (conduit.yaml)
//!
//! Settings control how conduit itself behaves. Secrets never live here;
//! they belong in the credential store.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log verbosity accepted in conduit.yaml
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: LogLevel,

    /// Credential file location; overridden by `--store` and CONDUIT_CREDENTIALS
    pub store_path: Option<PathBuf>,

    /// Pretty-print the output envelope
    pub pretty: bool,
}

impl Settings {
    /// Load settings with fallback chain
    pub fn load(settings_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = settings_path {
            let context = format!("Failed to load settings from {}", path.display());
            return Self::load_from_file(path).context(context);
        }

        if let Ok(env_path) = std::env::var("CONDUIT_SETTINGS") {
            let path = PathBuf::from(env_path);
            if path.exists() {
                let context = format!("Failed to load settings from CONDUIT_SETTINGS ({})", path.display());
                return Self::load_from_file(&path).context(context);
            }
        }

        let path = Self::conduit_dir().join("conduit.yaml");
        if path.exists() {
            let context = format!("Failed to load settings from {}", path.display());
            return Self::load_from_file(&path).context(context);
        }

        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read settings file")?;
        // An empty file is valid and means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_str(&content).context("Failed to parse settings file")?;
        Ok(settings)
    }

    /// Directory holding conduit.yaml and the default credential file
    pub fn conduit_dir() -> PathBuf {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("conduit")
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }

    /// Credential file path: explicit flag, then CONDUIT_CREDENTIALS, then settings, then default
    pub fn resolve_store_path(&self, flag: Option<&PathBuf>) -> PathBuf {
        if let Some(path) = flag {
            return Self::expand_path(path);
        }
        if let Ok(env_path) = std::env::var("CONDUIT_CREDENTIALS")
            && !env_path.is_empty()
        {
            return Self::expand_path(Path::new(&env_path));
        }
        if let Some(path) = &self.store_path {
            return Self::expand_path(path);
        }
        Self::conduit_dir().join("credentials.json")
    }
}
