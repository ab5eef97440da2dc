//! Readiness resolution
//!
//! Pure functions from (definition, credentials) to a status. Integration
//! readiness is derived from the setup catalog entry its `setup_ref`
//! points at, so the catalog's `required` flags are the only key table.

use serde::Serialize;
use std::fmt;

use crate::catalog::{Catalog, ServiceDefinition};
use crate::registry::Integration;
use crate::store::Credentials;

/// Integration-level status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationStatus {
    NoAuth,
    Ready,
    NeedsSetup,
}

impl IntegrationStatus {
    /// Usable without any further setup
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::NoAuth | Self::Ready)
    }
}

impl fmt::Display for IntegrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoAuth => "no_auth",
            Self::Ready => "ready",
            Self::NeedsSetup => "needs_setup",
        })
    }
}

/// Service-level status. Variant order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Missing,
    Partial,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub service: String,
    pub name: String,
    pub status: ServiceState,
    pub missing: usize,
}

fn is_set(credentials: &Credentials, key: &str) -> bool {
    credentials.get(key).is_some_and(|v| !v.is_empty())
}

pub fn resolve(integration: &Integration, catalog: &Catalog, credentials: &Credentials) -> IntegrationStatus {
    if !integration.auth_needed {
        return IntegrationStatus::NoAuth;
    }

    // A dangling setup_ref can never become ready; Registry::validate reports it
    let Some(def) = integration.setup_ref.and_then(|service| catalog.get(service)) else {
        return IntegrationStatus::NeedsSetup;
    };

    if def.required_keys().all(|k| is_set(credentials, k.key)) {
        IntegrationStatus::Ready
    } else {
        IntegrationStatus::NeedsSetup
    }
}

pub fn resolve_service(def: &ServiceDefinition, credentials: &Credentials) -> ServiceStatus {
    let required = def.required_keys().count();
    let missing = def.required_keys().filter(|k| !is_set(credentials, k.key)).count();

    let status = if missing == 0 {
        ServiceState::Ready
    } else if missing == required {
        ServiceState::Missing
    } else {
        ServiceState::Partial
    };

    ServiceStatus {
        service: def.service.to_string(),
        name: def.name.to_string(),
        status,
        missing,
    }
}

/// Stable sort into missing, partial, ready order
pub fn sort_for_display(statuses: &mut [ServiceStatus]) {
    statuses.sort_by_key(|s| s.status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KeyInfo;
    use crate::registry::{Group, Registry};

    fn creds(pairs: &[(&str, &str)]) -> Credentials {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn everything_set(catalog: &Catalog) -> Credentials {
        catalog
            .list()
            .iter()
            .flat_map(|def| def.keys.iter())
            .map(|k| (k.key.to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn test_no_auth_regardless_of_store() {
        let registry = Registry::builtin();
        let catalog = Catalog::builtin();
        for store in [creds(&[]), everything_set(&catalog)] {
            for integration in registry.list().iter().filter(|i| !i.auth_needed) {
                assert_eq!(resolve(integration, &catalog, &store), IntegrationStatus::NoAuth);
            }
        }
    }

    #[test]
    fn test_auth_integrations_follow_catalog() {
        let registry = Registry::builtin();
        let catalog = Catalog::builtin();

        let empty = creds(&[]);
        let full = everything_set(&catalog);
        for integration in registry.list().iter().filter(|i| i.auth_needed) {
            assert_eq!(resolve(integration, &catalog, &empty), IntegrationStatus::NeedsSetup);
            assert_eq!(resolve(integration, &catalog, &full), IntegrationStatus::Ready);
        }
    }

    #[test]
    fn test_email_needs_all_four() {
        let registry = Registry::builtin();
        let catalog = Catalog::builtin();
        let email = registry.get("email").unwrap();

        let three = creds(&[
            ("email_address", "me@example.com"),
            ("email_password", "pw"),
            ("imap_server", "imap.example.com"),
        ]);
        assert_eq!(resolve(email, &catalog, &three), IntegrationStatus::NeedsSetup);

        let mut four = three.clone();
        four.insert("smtp_server".to_string(), "smtp.example.com".to_string());
        assert_eq!(resolve(email, &catalog, &four), IntegrationStatus::Ready);
    }

    #[test]
    fn test_empty_value_is_unset() {
        let registry = Registry::builtin();
        let catalog = Catalog::builtin();
        let github = registry.get("github").unwrap();
        assert_eq!(
            resolve(github, &catalog, &creds(&[("github_token", "")])),
            IntegrationStatus::NeedsSetup
        );
    }

    #[test]
    fn test_optional_keys_never_affect_readiness() {
        let catalog = Catalog::builtin();
        let gitlab = catalog.get("gitlab").unwrap();
        let status = resolve_service(gitlab, &creds(&[("gitlab_token", "glpat")]));
        assert_eq!(status.status, ServiceState::Ready);
        assert_eq!(status.missing, 0);
    }

    #[test]
    fn test_dangling_setup_ref_needs_setup() {
        let integration = Integration::authed("ghost", "Ghost", Group::Dev, "", "nowhere", &[]);
        assert_eq!(
            resolve(&integration, &Catalog::builtin(), &creds(&[])),
            IntegrationStatus::NeedsSetup
        );
    }

    #[test]
    fn test_twilio_partial() {
        let catalog = Catalog::builtin();
        let status = resolve_service(catalog.get("twilio").unwrap(), &creds(&[("twilio_sid", "AC1")]));
        assert_eq!(status.status, ServiceState::Partial);
        assert_eq!(status.missing, 2);
    }

    #[test]
    fn test_status_by_key_count() {
        let def = ServiceDefinition {
            service: "demo",
            name: "Demo",
            keys: vec![
                KeyInfo::required("demo_a", "", ""),
                KeyInfo::required("demo_b", "", ""),
                KeyInfo::required("demo_c", "", ""),
                KeyInfo::optional("demo_port", "", ""),
            ],
            setup_guide: "",
            test_command: "",
        };
        let keys = ["demo_a", "demo_b", "demo_c"];

        for k in 0..=keys.len() {
            let mut store = creds(&[("demo_port", "8080")]);
            for key in &keys[..k] {
                store.insert(key.to_string(), "v".to_string());
            }

            let status = resolve_service(&def, &store);
            assert_eq!(status.missing, keys.len() - k);
            let expected = match k {
                0 => ServiceState::Missing,
                n if n == keys.len() => ServiceState::Ready,
                _ => ServiceState::Partial,
            };
            assert_eq!(status.status, expected, "k = {}", k);
        }
    }

    #[test]
    fn test_sort_for_display_groups_states() {
        let catalog = Catalog::builtin();
        let store = creds(&[("github_token", "x"), ("twilio_sid", "AC1"), ("slack_token", "xoxb")]);
        let mut statuses: Vec<_> = catalog.list().iter().map(|d| resolve_service(d, &store)).collect();
        sort_for_display(&mut statuses);

        let states: Vec<_> = statuses.iter().map(|s| s.status).collect();
        assert!(states.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(states.first(), Some(&ServiceState::Missing));
        assert_eq!(states.last(), Some(&ServiceState::Ready));

        // Catalog order survives inside a state
        let ready: Vec<_> = statuses
            .iter()
            .filter(|s| s.status == ServiceState::Ready)
            .map(|s| s.service.as_str())
            .collect();
        assert_eq!(ready, vec!["github", "slack"]);
    }

    fn wire<T: Serialize>(value: T) -> serde_json::Value {
        serde_json::to_value(value).unwrap()
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(wire(IntegrationStatus::NeedsSetup), "needs_setup");
        assert_eq!(wire(IntegrationStatus::NoAuth), "no_auth");
        assert_eq!(wire(ServiceState::Partial), "partial");
        assert_eq!(IntegrationStatus::NoAuth.to_string(), "no_auth");
    }
}
