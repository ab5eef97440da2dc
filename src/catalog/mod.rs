//! Setup catalog
//!
//! One `ServiceDefinition` per service that needs configuration: the exact
//! credential keys, how to obtain them, and a command to smoke-test the
//! result. The catalog is also the single source of truth for integration
//! readiness (see `readiness::resolve`).

use serde::Serialize;

mod services;

/// One credential key a service reads from the store
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KeyInfo {
    pub key: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub example: &'static str,
}

impl KeyInfo {
    pub const fn required(key: &'static str, description: &'static str, example: &'static str) -> Self {
        Self {
            key,
            description,
            required: true,
            example,
        }
    }

    pub const fn optional(key: &'static str, description: &'static str, example: &'static str) -> Self {
        Self {
            key,
            description,
            required: false,
            example,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceDefinition {
    pub service: &'static str,
    pub name: &'static str,
    pub keys: Vec<KeyInfo>,
    pub setup_guide: &'static str,
    pub test_command: &'static str,
}

impl ServiceDefinition {
    pub fn required_keys(&self) -> impl Iterator<Item = &KeyInfo> {
        self.keys.iter().filter(|k| k.required)
    }

    pub fn key_names(&self) -> Vec<String> {
        self.keys.iter().map(|k| k.key.to_string()).collect()
    }

    pub fn owns(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k.key == key)
    }
}

/// Immutable table of service definitions
#[derive(Debug, Clone)]
pub struct Catalog {
    services: Vec<ServiceDefinition>,
}

impl Catalog {
    pub fn new(services: Vec<ServiceDefinition>) -> Self {
        Self { services }
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        Self::new(services::all())
    }

    pub fn get(&self, service: &str) -> Option<&ServiceDefinition> {
        self.services.iter().find(|s| s.service == service)
    }

    pub fn list(&self) -> &[ServiceDefinition] {
        &self.services
    }

    pub fn service_ids(&self) -> Vec<String> {
        self.services.iter().map(|s| s.service.to_string()).collect()
    }

    /// True iff `key` is one of `service`'s keys
    pub fn validate_key_ownership(&self, service: &str, key: &str) -> bool {
        self.get(service).is_some_and(|def| def.owns(key))
    }

    /// First service declaring `key`, used for remediation hints
    pub fn owner_of(&self, key: &str) -> Option<&ServiceDefinition> {
        self.services.iter().find(|s| s.owns(key))
    }
}
