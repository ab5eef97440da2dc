//! Diagnose conduit setup issues
//!
//! Unlike other commands, problems found here are part of the success
//! payload; `doctor` only fails if it cannot run at all.

use log::info;
use serde::Serialize;
use std::collections::BTreeMap;

use super::{Context, Outcome};
use crate::envelope::Envelope;
use crate::error::Error;
use crate::migrate::{self, Step};
use crate::readiness::{self, IntegrationStatus};
use crate::store::CredentialStore;

#[derive(Serialize)]
struct DoctorReport {
    version: &'static str,
    healthy: bool,
    store: StoreCheck,
    registry: RegistryCheck,
    backends: Vec<BackendCheck>,
    pending_migrations: Vec<Step>,
}

#[derive(Serialize)]
struct StoreCheck {
    path: String,
    exists: bool,
    readable: bool,
    entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct RegistryCheck {
    integrations: usize,
    services: usize,
    usable: usize,
    needs_setup: usize,
    problems: Vec<String>,
}

#[derive(Serialize)]
struct BackendCheck {
    executable: &'static str,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    used_by: Vec<&'static str>,
}

pub fn run(ctx: &Context) -> Outcome {
    let (credentials, store_error) = match ctx.store.load() {
        Ok(credentials) => (credentials, None),
        Err(e) => (Default::default(), Some(e.to_string())),
    };

    let store = StoreCheck {
        path: ctx.store.path().display().to_string(),
        exists: ctx.store.exists(),
        readable: store_error.is_none(),
        entries: credentials.len(),
        error: store_error,
    };

    let problems = match ctx.registry.validate(&ctx.catalog) {
        Ok(()) => Vec::new(),
        Err(Error::Registry { problems }) => problems,
        Err(e) => vec![e.to_string()],
    };

    let statuses: Vec<IntegrationStatus> = ctx
        .registry
        .list()
        .iter()
        .map(|i| readiness::resolve(i, &ctx.catalog, &credentials))
        .collect();

    let registry = RegistryCheck {
        integrations: ctx.registry.list().len(),
        services: ctx.catalog.list().len(),
        usable: statuses.iter().filter(|s| s.is_usable()).count(),
        needs_setup: statuses.iter().filter(|s| !s.is_usable()).count(),
        problems,
    };

    let backends = check_backends(ctx);

    // An unreadable store is already reported above
    let pending_migrations = if store.readable {
        migrate::pending(&ctx.store)?
    } else {
        Vec::new()
    };

    let healthy = store.readable && registry.problems.is_empty();
    info!(
        "Doctor: healthy={} problems={} pending_migrations={}",
        healthy,
        registry.problems.len(),
        pending_migrations.len()
    );

    Ok(Envelope::success(&DoctorReport {
        version: env!("CARGO_PKG_VERSION"),
        healthy,
        store,
        registry,
        backends,
        pending_migrations,
    }))
}

fn check_backends(ctx: &Context) -> Vec<BackendCheck> {
    let mut used_by: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
    for integration in ctx.registry.list() {
        if let Some(backend) = integration.backend {
            used_by.entry(backend).or_default().push(integration.id);
        }
    }

    used_by
        .into_iter()
        .map(|(executable, used_by)| {
            let path = which::which(executable).ok().map(|p| p.display().to_string());
            BackendCheck {
                executable,
                found: path.is_some(),
                path,
                used_by,
            }
        })
        .collect()
}
