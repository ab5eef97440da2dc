use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;

use super::{Context, Outcome};
use crate::cli::ConfigAction;
use crate::envelope::Envelope;
use crate::error::Error;
use crate::migrate;
use crate::readiness::{self, ServiceStatus};
use crate::store::{self, CredentialStore};

pub fn run(action: ConfigAction, ctx: &Context) -> Outcome {
    match action {
        ConfigAction::Path => path(ctx),
        ConfigAction::List => Ok(Envelope::success(&ctx.store.redacted()?)),
        ConfigAction::Get { key } => get(&key, ctx),
        ConfigAction::Set { key, value } => set(&key, &value, ctx),
        ConfigAction::Unset { key } => unset(&key, ctx),
        ConfigAction::Migrate { dry_run } => Ok(Envelope::success(&migrate::run(&ctx.store, dry_run)?)),
    }
}

#[derive(Serialize)]
struct StoreLocation {
    path: String,
    exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    modified: Option<DateTime<Local>>,
}

fn path(ctx: &Context) -> Outcome {
    let modified = fs::metadata(ctx.store.path())
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Local>::from);

    Ok(Envelope::success(&StoreLocation {
        path: ctx.store.path().display().to_string(),
        exists: ctx.store.exists(),
        modified,
    }))
}

#[derive(Serialize)]
struct KeyValue {
    key: String,
    value: String,
    set: bool,
}

fn get(key: &str, ctx: &Context) -> Outcome {
    let value = ctx.store.get(key)?;
    Ok(Envelope::success(&KeyValue {
        key: key.to_string(),
        set: !value.is_empty(),
        value,
    }))
}

#[derive(Serialize)]
struct Written {
    key: String,
    path: String,
    /// Status of the service owning the key, when the catalog knows one
    #[serde(skip_serializing_if = "Option::is_none")]
    service: Option<ServiceStatus>,
}

fn set(key: &str, value: &str, ctx: &Context) -> Outcome {
    if !store::is_valid_key(key) {
        return Err(Error::Usage(format!(
            "invalid key '{}': credential keys are lowercase snake_case (e.g. github_token)",
            key
        )));
    }

    ctx.store.set(key, value)?;

    let service = match ctx.catalog.owner_of(key) {
        Some(def) => Some(readiness::resolve_service(def, &ctx.store.load()?)),
        None => None,
    };

    Ok(Envelope::success(&Written {
        key: key.to_string(),
        path: ctx.store.path().display().to_string(),
        service,
    }))
}

#[derive(Serialize)]
struct Removed {
    key: String,
    removed: bool,
}

fn unset(key: &str, ctx: &Context) -> Outcome {
    let removed = ctx.store.unset(key)?;
    Ok(Envelope::success(&Removed {
        key: key.to_string(),
        removed,
    }))
}
