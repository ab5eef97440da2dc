//! Credential store
//!
//! A flat string-to-string map persisted as one JSON object. Every call
//! re-reads the file so a `set` in one invocation is visible to the next;
//! there is no cache and no locking (last writer wins).

use lazy_regex::regex_is_match;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::{Error, Result};

pub type Credentials = BTreeMap<String, String>;

/// Placeholder shown instead of a stored value
pub const REDACTED: &str = "********";

/// Storage backend for credentials
pub trait CredentialStore {
    /// Read the whole map; a backend with nothing stored yields an empty map
    fn load(&self) -> Result<Credentials>;

    /// Replace the whole map
    fn save(&self, credentials: &Credentials) -> Result<()>;

    /// Where the credentials live, for display
    fn path(&self) -> &Path;

    fn get(&self, key: &str) -> Result<String> {
        Ok(self.load()?.get(key).cloned().unwrap_or_default())
    }

    /// Like `get`, but an empty value is an error carrying a remediation hint
    #[allow(dead_code)] // Called by the per-service API clients
    fn must_get(&self, key: &str, catalog: &Catalog) -> Result<String> {
        let value = self.get(key)?;
        if !value.is_empty() {
            return Ok(value);
        }

        let owner = catalog.owner_of(key);
        let hint = match owner {
            Some(def) => format!("run `conduit setup show {}` for instructions", def.service),
            None => format!("run `conduit config set {} <value>`", key),
        };
        Err(Error::MissingCredential {
            key: key.to_string(),
            service: owner.map(|def| def.service.to_string()),
            hint,
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut credentials = self.load()?;
        credentials.insert(key.to_string(), value.to_string());
        self.save(&credentials)
    }

    /// Remove a key; returns whether it was present
    fn unset(&self, key: &str) -> Result<bool> {
        let mut credentials = self.load()?;
        let existed = credentials.remove(key).is_some();
        if existed {
            self.save(&credentials)?;
        }
        Ok(existed)
    }

    fn redacted(&self) -> Result<Credentials> {
        Ok(redact(&self.load()?))
    }
}

/// Copy of `credentials` with every non-empty value masked
pub fn redact(credentials: &Credentials) -> Credentials {
    credentials
        .iter()
        .map(|(k, v)| {
            let masked = if v.is_empty() {
                String::new()
            } else {
                REDACTED.to_string()
            };
            (k.clone(), masked)
        })
        .collect()
}

/// Credential keys are plain lowercase snake_case names
pub fn is_valid_key(key: &str) -> bool {
    regex_is_match!(r"^[a-z][a-z0-9]*(_[a-z0-9]+)*$", key)
}

/// JSON file backend
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn error(&self, what: &str, cause: impl std::fmt::Display) -> Error {
        Error::config(&self.path, format!("{}: {}", what, cause))
    }
}

impl CredentialStore for FileStore {
    fn load(&self) -> Result<Credentials> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No credential file at {}, using empty store", self.path.display());
                return Ok(Credentials::new());
            }
            Err(e) => return Err(self.error("failed to read", e)),
        };

        // A zero-byte file is what a crashed editor leaves behind; treat it like a missing one
        if content.trim().is_empty() {
            return Ok(Credentials::new());
        }

        match serde_json::from_str(&content) {
            Ok(credentials) => Ok(credentials),
            Err(e) => Err(self.error("malformed JSON", e)),
        }
    }

    fn save(&self, credentials: &Credentials) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if let Err(e) = fs::create_dir_all(&dir) {
            return Err(self.error(&format!("failed to create {}", dir.display()), e));
        }

        let json = serde_json::to_string_pretty(credentials)
            .map_err(|e| self.error("failed to encode", e))?;

        // NamedTempFile is created 0600 on unix, and the rename keeps that mode
        let mut tmp = tempfile::NamedTempFile::new_in(&dir)
            .map_err(|e| self.error("failed to create temp file", e))?;
        writeln!(tmp, "{}", json)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| self.error("failed to write", e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.error("failed to replace file", e.error))?;

        info!("Saved {} credentials to {}", credentials.len(), self.path.display());
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
pub mod memory {
    use super::*;
    use std::cell::RefCell;

    /// In-memory backend for tests
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        values: RefCell<Credentials>,
    }

    impl MemoryStore {
        pub fn with(pairs: &[(&str, &str)]) -> Self {
            let values = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
            Self {
                values: RefCell::new(values),
            }
        }
    }

    impl CredentialStore for MemoryStore {
        fn load(&self) -> Result<Credentials> {
            Ok(self.values.borrow().clone())
        }

        fn save(&self, credentials: &Credentials) -> Result<()> {
            *self.values.borrow_mut() = credentials.clone();
            Ok(())
        }

        fn path(&self) -> &Path {
            Path::new(":memory:")
        }
    }
}
