//! Credential key migrations
//!
//! Readiness is derived from the key names in the setup catalog. When a
//! service's key is renamed, values stored under the old name would read
//! as missing, so renames are applied explicitly with `config migrate`
//! rather than guessed at read time.

use log::info;
use serde::Serialize;

use crate::error::Result;
use crate::store::CredentialStore;

/// A stored key that moved to a new name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyRename {
    pub service: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

/// Every known rename, oldest first
pub const RENAMES: &[KeyRename] = &[
    KeyRename {
        service: "twitter",
        from: "twitter_api_key",
        to: "twitter_bearer_token",
    },
    KeyRename {
        service: "openweather",
        from: "openweather_key",
        to: "openweather_api_key",
    },
    KeyRename {
        service: "newsapi",
        from: "news_api_key",
        to: "newsapi_key",
    },
    KeyRename {
        service: "twilio",
        from: "twilio_account_sid",
        to: "twilio_sid",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Value copied to the new key, old key removed
    Moved,
    /// New key already had a value; the stale old key was removed
    DroppedStale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    #[serde(flatten)]
    pub rename: KeyRename,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub dry_run: bool,
    pub steps: Vec<Step>,
}

/// Renames that would do something against the current store contents
pub fn pending(store: &dyn CredentialStore) -> Result<Vec<Step>> {
    let credentials = store.load()?;
    Ok(RENAMES
        .iter()
        .copied()
        .filter_map(|rename| {
            let old = credentials.get(rename.from)?;
            let new_is_set = credentials.get(rename.to).is_some_and(|v| !v.is_empty());
            let action = if new_is_set || old.is_empty() {
                Action::DroppedStale
            } else {
                Action::Moved
            };
            Some(Step { rename, action })
        })
        .collect())
}

pub fn run(store: &dyn CredentialStore, dry_run: bool) -> Result<MigrationReport> {
    let steps = pending(store)?;

    if !dry_run && !steps.is_empty() {
        let mut credentials = store.load()?;
        for step in &steps {
            let old = credentials.remove(step.rename.from).unwrap_or_default();
            if step.action == Action::Moved {
                credentials.insert(step.rename.to.to_string(), old);
            }
            info!(
                "Migrated {} -> {} ({:?})",
                step.rename.from, step.rename.to, step.action
            );
        }
        store.save(&credentials)?;
    }

    Ok(MigrationReport { dry_run, steps })
}
