//! Command handlers
//!
//! Each handler returns the envelope it wants printed; `main` renders it and
//! turns any `Err` into the error shape.

use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::registry::Registry;
use crate::store::FileStore;

pub mod completions;
pub mod config;
pub mod doctor;
pub mod integrations;
pub mod setup;

/// Everything a handler needs, built once per invocation
pub struct Context {
    pub registry: Registry,
    pub catalog: Catalog,
    pub store: FileStore,
}

impl Context {
    pub fn new(store_path: PathBuf) -> Self {
        Self {
            registry: Registry::builtin(),
            catalog: Catalog::builtin(),
            store: FileStore::new(store_path),
        }
    }
}

pub type Outcome = Result<Envelope>;
