//! Guided setup flow
//!
//! list -> show -> set -> re-check. Each operation re-reads the store, so
//! the status it returns always reflects the file on disk.

use log::info;
use serde::Serialize;

use crate::catalog::{Catalog, KeyInfo, ServiceDefinition};
use crate::error::{Error, Result};
use crate::readiness::{self, ServiceState, ServiceStatus};
use crate::store::CredentialStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyState {
    #[serde(flatten)]
    pub info: KeyInfo,
    pub set: bool,
}

/// A service definition annotated with what the store currently holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceReport {
    pub service: &'static str,
    pub name: &'static str,
    pub status: ServiceState,
    pub missing: usize,
    pub keys: Vec<KeyState>,
    pub setup_guide: &'static str,
    pub test_command: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetOutcome {
    pub key: String,
    #[serde(flatten)]
    pub status: ServiceStatus,
}

pub struct Setup<'a> {
    catalog: &'a Catalog,
    store: &'a dyn CredentialStore,
}

impl<'a> Setup<'a> {
    pub fn new(catalog: &'a Catalog, store: &'a dyn CredentialStore) -> Self {
        Self { catalog, store }
    }

    fn definition(&self, service: &str) -> Result<&'a ServiceDefinition> {
        self.catalog.get(service).ok_or_else(|| Error::UnknownService {
            service: service.to_string(),
            available: self.catalog.service_ids(),
        })
    }

    pub fn show(&self, service: &str) -> Result<ServiceReport> {
        let def = self.definition(service)?;
        let credentials = self.store.load()?;
        let status = readiness::resolve_service(def, &credentials);

        let keys = def
            .keys
            .iter()
            .map(|info| KeyState {
                info: info.clone(),
                set: credentials.get(info.key).is_some_and(|v| !v.is_empty()),
            })
            .collect();

        Ok(ServiceReport {
            service: def.service,
            name: def.name,
            status: status.status,
            missing: status.missing,
            keys,
            setup_guide: def.setup_guide,
            test_command: def.test_command,
        })
    }

    /// `args` is `[value]` or `[key, value]`
    pub fn set(&self, service: &str, args: &[String]) -> Result<SetOutcome> {
        let def = self.definition(service)?;

        let (key, value) = match args {
            [value] => match def.keys.as_slice() {
                [only] => (only.key.to_string(), value.as_str()),
                _ => {
                    return Err(Error::AmbiguousKey {
                        service: def.service.to_string(),
                        valid_keys: def.key_names(),
                    });
                }
            },
            [key, value] => {
                if !self.catalog.validate_key_ownership(def.service, key) {
                    return Err(Error::InvalidKey {
                        service: def.service.to_string(),
                        key: key.clone(),
                        valid_keys: def.key_names(),
                    });
                }
                (key.clone(), value.as_str())
            }
            _ => {
                return Err(Error::Usage(format!(
                    "expected `setup set {} [<key>] <value>`, got {} arguments",
                    def.service,
                    args.len()
                )));
            }
        };

        self.store.set(&key, value)?;
        info!("Set {} for service {}", key, def.service);

        let credentials = self.store.load()?;
        Ok(SetOutcome {
            key,
            status: readiness::resolve_service(def, &credentials),
        })
    }

    /// Every service's status, non-ready only unless `show_all`
    pub fn list(&self, show_all: bool) -> Result<Vec<ServiceStatus>> {
        let credentials = self.store.load()?;
        let mut statuses: Vec<ServiceStatus> = self
            .catalog
            .list()
            .iter()
            .map(|def| readiness::resolve_service(def, &credentials))
            .filter(|s| show_all || s.status != ServiceState::Ready)
            .collect();
        readiness::sort_for_display(&mut statuses);
        Ok(statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FileStore;
    use crate::store::memory::MemoryStore;
    use tempfile::TempDir;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_show_on_empty_store() {
        let catalog = Catalog::builtin();
        let store = MemoryStore::default();
        let report = Setup::new(&catalog, &store).show("github").unwrap();
        assert_eq!(report.status, ServiceState::Missing);
        assert!(!report.keys[0].set);
        assert_eq!(report.keys[0].info.key, "github_token");
    }

    #[test]
    fn test_show_after_config_set() {
        let catalog = Catalog::builtin();
        let store = MemoryStore::default();
        store.set("github_token", "ghp_x").unwrap();

        let report = Setup::new(&catalog, &store).show("github").unwrap();
        assert_eq!(report.status, ServiceState::Ready);
        assert!(report.keys[0].set);
    }

    #[test]
    fn test_show_is_idempotent() {
        let catalog = Catalog::builtin();
        let store = MemoryStore::with(&[("twilio_sid", "AC1")]);
        let setup = Setup::new(&catalog, &store);
        assert_eq!(setup.show("twilio").unwrap(), setup.show("twilio").unwrap());
    }

    #[test]
    fn test_show_unknown_service() {
        let catalog = Catalog::builtin();
        let store = MemoryStore::default();
        let err = Setup::new(&catalog, &store).show("myspace").unwrap_err();
        assert_eq!(err.code(), "unknown_service");
    }

    #[test]
    fn test_set_infers_single_key() {
        let catalog = Catalog::builtin();
        let store = MemoryStore::default();
        let outcome = Setup::new(&catalog, &store).set("slack", &args(&["xoxb-1"])).unwrap();
        assert_eq!(outcome.key, "slack_token");
        assert_eq!(outcome.status.status, ServiceState::Ready);
        assert_eq!(store.get("slack_token").unwrap(), "xoxb-1");
    }

    #[test]
    fn test_set_ambiguous_without_key() {
        let catalog = Catalog::builtin();
        let store = MemoryStore::default();
        let err = Setup::new(&catalog, &store).set("jira", &args(&["x"])).unwrap_err();
        assert_eq!(err.code(), "ambiguous_key");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_set_optional_key_counts_as_multi_key() {
        // gitlab has one required and one optional key; the key cannot be inferred
        let catalog = Catalog::builtin();
        let store = MemoryStore::default();
        let err = Setup::new(&catalog, &store)
            .set("gitlab", &args(&["glpat"]))
            .unwrap_err();
        assert_eq!(err.code(), "ambiguous_key");
    }

    #[test]
    fn test_set_invalid_key_lists_valid_keys() {
        let catalog = Catalog::builtin();
        let store = MemoryStore::default();
        let err = Setup::new(&catalog, &store)
            .set("jira", &args(&["bogus_key", "x"]))
            .unwrap_err();
        assert_eq!(err.code(), "invalid_key");
        assert_eq!(
            err.context()["valid_keys"],
            serde_json::json!(["jira_url", "jira_email", "jira_token"])
        );
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_set_explicit_key_moves_status_forward_and_back() {
        let catalog = Catalog::builtin();
        let store = MemoryStore::default();
        let setup = Setup::new(&catalog, &store);

        let out = setup.set("twilio", &args(&["twilio_sid", "AC1"])).unwrap();
        assert_eq!(out.status.status, ServiceState::Partial);
        assert_eq!(out.status.missing, 2);

        setup.set("twilio", &args(&["twilio_token", "tok"])).unwrap();
        let out = setup.set("twilio", &args(&["twilio_phone", "+15551234567"])).unwrap();
        assert_eq!(out.status.status, ServiceState::Ready);

        let out = setup.set("twilio", &args(&["twilio_sid", ""])).unwrap();
        assert_eq!(out.status.status, ServiceState::Partial);
        assert_eq!(out.status.missing, 1);
    }

    #[test]
    fn test_set_wrong_arity() {
        let catalog = Catalog::builtin();
        let store = MemoryStore::default();
        let setup = Setup::new(&catalog, &store);
        assert_eq!(setup.set("github", &args(&[])).unwrap_err().code(), "usage_error");
        let err = setup.set("github", &args(&["a", "b", "c"])).unwrap_err();
        assert_eq!(err.code(), "usage_error");
    }

    #[test]
    fn test_list_hides_ready_unless_all() {
        let catalog = Catalog::builtin();
        let store = MemoryStore::with(&[("github_token", "ghp")]);
        let setup = Setup::new(&catalog, &store);

        let pending = setup.list(false).unwrap();
        assert!(pending.iter().all(|s| s.status != ServiceState::Ready));
        assert_eq!(pending.len(), catalog.list().len() - 1);

        let all = setup.list(true).unwrap();
        assert_eq!(all.len(), catalog.list().len());
        assert_eq!(all.last().map(|s| s.service.as_str()), Some("github"));
    }

    #[test]
    fn test_list_ordering_law() {
        let catalog = Catalog::builtin();
        let store = MemoryStore::with(&[
            ("jira_url", "u"),
            ("slack_token", "t"),
            ("email_address", "a"),
            ("twitter_bearer_token", "b"),
        ]);
        let all = Setup::new(&catalog, &store).list(true).unwrap();
        let states: Vec<_> = all.iter().map(|s| s.status).collect();
        assert!(states.windows(2).all(|w| w[0] <= w[1]), "{:?}", states);
        assert!(states.contains(&ServiceState::Partial));
    }

    #[test]
    fn test_set_persists_through_file_store() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let store = FileStore::new(dir.path().join("credentials.json"));
        Setup::new(&catalog, &store)
            .set("jira", &args(&["jira_url", "https://x.atlassian.net"]))
            .unwrap();

        let reopened = FileStore::new(dir.path().join("credentials.json"));
        let report = Setup::new(&catalog, &reopened).show("jira").unwrap();
        assert_eq!(report.status, ServiceState::Partial);
        assert_eq!(report.missing, 2);
        assert!(report.keys[0].set);
    }

    #[test]
    fn test_report_serializes_key_flags() {
        let catalog = Catalog::builtin();
        let store = MemoryStore::default();
        let report = Setup::new(&catalog, &store).show("github").unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "missing");
        assert_eq!(value["keys"][0]["set"], false);
        assert_eq!(value["keys"][0]["key"], "github_token");
        assert_eq!(value["keys"][0]["required"], true);
    }
}
