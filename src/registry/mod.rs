//! Integration registry
//!
//! A static, declarative table of every integration conduit exposes. The
//! table is built once per process and never mutated; only the derived
//! readiness status changes between invocations.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::readiness::{self, IntegrationStatus};
use crate::store::Credentials;

mod integrations;

/// Closed set of integration groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    News,
    Knowledge,
    Utility,
    Dev,
    Social,
    Comms,
    Productivity,
    System,
    Security,
    Marketing,
    Finance,
    Media,
}

impl Group {
    pub const ALL: [Group; 12] = [
        Group::News,
        Group::Knowledge,
        Group::Utility,
        Group::Dev,
        Group::Social,
        Group::Comms,
        Group::Productivity,
        Group::System,
        Group::Security,
        Group::Marketing,
        Group::Finance,
        Group::Media,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Group::News => "news",
            Group::Knowledge => "knowledge",
            Group::Utility => "utility",
            Group::Dev => "dev",
            Group::Social => "social",
            Group::Comms => "comms",
            Group::Productivity => "productivity",
            Group::System => "system",
            Group::Security => "security",
            Group::Marketing => "marketing",
            Group::Finance => "finance",
            Group::Media => "media",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Group::News => "News",
            Group::Knowledge => "Knowledge",
            Group::Utility => "Utilities",
            Group::Dev => "Developer",
            Group::Social => "Social",
            Group::Comms => "Communication",
            Group::Productivity => "Productivity",
            Group::System => "System",
            Group::Security => "Security",
            Group::Marketing => "Marketing",
            Group::Finance => "Finance",
            Group::Media => "Media",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Group::News => "Headlines, link aggregators and feeds",
            Group::Knowledge => "Reference lookups: encyclopedias, papers, dictionaries",
            Group::Utility => "Small everyday lookups: weather, time, conversions",
            Group::Dev => "Code hosting, issue trackers and deploy platforms",
            Group::Social => "Social networks and video platforms",
            Group::Comms => "Chat, email and messaging",
            Group::Productivity => "Notes, tasks and calendars",
            Group::System => "Local OS scripting and infrastructure CLIs",
            Group::Security => "Threat intel and exposure checks",
            Group::Marketing => "Email campaigns, CRM and scheduling",
            Group::Finance => "Markets, crypto and payments",
            Group::Media => "Images, film and music metadata",
        }
    }

    fn ids() -> Vec<String> {
        Self::ALL.iter().map(|g| g.id().to_string()).collect()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Group {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.id() == wanted)
            .ok_or_else(|| Error::UnknownGroup {
                group: s.to_string(),
                available: Self::ids(),
            })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Integration {
    pub id: &'static str,
    pub name: &'static str,
    pub group: Group,
    pub description: &'static str,
    pub auth_needed: bool,
    pub commands: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_ref: Option<&'static str>,
    /// Local executable the integration shells out to (osascript, kubectl, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<&'static str>,
}

impl Integration {
    /// An integration usable without credentials
    pub fn open(
        id: &'static str,
        name: &'static str,
        group: Group,
        description: &'static str,
        commands: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            name,
            group,
            description,
            auth_needed: false,
            commands,
            setup_ref: None,
            backend: None,
        }
    }

    /// An integration gated on the credentials of `setup_ref`
    pub fn authed(
        id: &'static str,
        name: &'static str,
        group: Group,
        description: &'static str,
        setup_ref: &'static str,
        commands: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            name,
            group,
            description,
            auth_needed: true,
            commands,
            setup_ref: Some(setup_ref),
            backend: None,
        }
    }

    pub fn via(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }
}

/// An integration paired with its status as of one store read
#[derive(Debug, Clone, Serialize)]
pub struct IntegrationView<'a> {
    #[serde(flatten)]
    pub integration: &'a Integration,
    pub status: IntegrationStatus,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GroupSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct Registry {
    integrations: Vec<Integration>,
}

impl Registry {
    pub fn new(integrations: Vec<Integration>) -> Self {
        Self { integrations }
    }

    /// The registry compiled into the binary
    pub fn builtin() -> Self {
        Self::new(integrations::all())
    }

    pub fn list(&self) -> &[Integration] {
        &self.integrations
    }

    pub fn get(&self, id: &str) -> Result<&Integration> {
        self.integrations
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| Error::UnknownIntegration {
                integration: id.to_string(),
            })
    }

    pub fn filter(&self, group: Option<&str>, no_auth_only: bool) -> Result<Vec<&Integration>> {
        let group = group.map(Group::from_str).transpose()?;
        Ok(self
            .integrations
            .iter()
            .filter(|i| group.is_none_or(|g| i.group == g))
            .filter(|i| !no_auth_only || !i.auth_needed)
            .collect())
    }

    /// Attach a status to each integration
    pub fn with_status<'a>(
        &'a self,
        integrations: impl IntoIterator<Item = &'a Integration>,
        catalog: &Catalog,
        credentials: &Credentials,
    ) -> Vec<IntegrationView<'a>> {
        integrations
            .into_iter()
            .map(|integration| IntegrationView {
                integration,
                status: readiness::resolve(integration, catalog, credentials),
            })
            .collect()
    }

    /// Integrations usable right now: `ready` or `no_auth`
    pub fn ready_only<'a>(&'a self, catalog: &Catalog, credentials: &Credentials) -> Vec<IntegrationView<'a>> {
        self.with_status(&self.integrations, catalog, credentials)
            .into_iter()
            .filter(|view| view.status.is_usable())
            .collect()
    }

    pub fn groups(&self) -> Vec<GroupSummary> {
        Group::ALL
            .iter()
            .map(|g| GroupSummary {
                id: g.id(),
                name: g.name(),
                desc: g.description(),
                count: self.integrations.iter().filter(|i| i.group == *g).count(),
            })
            .collect()
    }

    /// Cross-check ids and setup references against the catalog
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        let mut problems = Vec::new();
        let mut seen = HashSet::new();

        for integration in &self.integrations {
            let id = integration.id;
            if !seen.insert(id) {
                problems.push(format!("duplicate integration id '{}'", id));
            }
            match (integration.auth_needed, integration.setup_ref) {
                (true, None) | (true, Some("")) => {
                    problems.push(format!("'{}' needs auth but has no setup_ref", id));
                }
                (_, Some(service)) if catalog.get(service).is_none() => {
                    problems.push(format!(
                        "'{}' references unknown service '{}'",
                        id, service
                    ));
                }
                _ => {}
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::Registry { problems })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(pairs: &[(&str, &str)]) -> Credentials {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_builtin_registry_is_consistent() {
        let registry = Registry::builtin();
        registry.validate(&Catalog::builtin()).unwrap();
    }

    #[test]
    fn test_builtin_size() {
        assert!(Registry::builtin().list().len() >= 70);
    }

    #[test]
    fn test_every_auth_integration_resolves_in_catalog() {
        let catalog = Catalog::builtin();
        for integration in Registry::builtin().list().iter().filter(|i| i.auth_needed) {
            let service = integration.setup_ref.unwrap_or_default();
            assert!(!service.is_empty(), "{} has no setup_ref", integration.id);
            let def = catalog.get(service);
            assert!(def.is_some(), "{} -> {} missing", integration.id, service);
        }
    }

    #[test]
    fn test_every_service_backs_an_integration() {
        let registry = Registry::builtin();
        for def in Catalog::builtin().list() {
            assert!(
                registry.list().iter().any(|i| i.setup_ref == Some(def.service)),
                "service {} is not referenced by any integration",
                def.service
            );
        }
    }

    #[test]
    fn test_validate_reports_problems() {
        let registry = Registry::new(vec![
            Integration::authed("a", "A", Group::Dev, "", "github", &[]),
            Integration::authed("a", "A again", Group::Dev, "", "github", &[]),
            Integration::authed("b", "B", Group::Dev, "", "does_not_exist", &[]),
            Integration {
                setup_ref: None,
                ..Integration::authed("c", "C", Group::Dev, "", "github", &[])
            },
        ]);
        let Err(Error::Registry { problems }) = registry.validate(&Catalog::builtin()) else {
            panic!("expected registry error");
        };
        assert_eq!(problems.len(), 3);
    }

    #[test]
    fn test_groups_count_every_integration() {
        let registry = Registry::builtin();
        let groups = registry.groups();
        assert_eq!(groups.len(), Group::ALL.len());
        let total: usize = groups.iter().map(|g| g.count).sum();
        assert_eq!(total, registry.list().len());
        assert!(groups.iter().all(|g| g.count > 0), "empty group in {:?}", groups);
    }

    #[test]
    fn test_filter_by_group_and_auth() {
        let registry = Registry::builtin();

        let news = registry.filter(Some("news"), false).unwrap();
        assert!(!news.is_empty());
        assert!(news.iter().all(|i| i.group == Group::News));

        let open = registry.filter(None, true).unwrap();
        assert!(open.iter().all(|i| !i.auth_needed));
        assert!(open.iter().any(|i| i.id == "hackernews"));

        let open_dev = registry.filter(Some("DEV"), true).unwrap();
        assert!(open_dev.iter().all(|i| i.group == Group::Dev && !i.auth_needed));
    }

    #[test]
    fn test_filter_unknown_group() {
        let err = Registry::builtin().filter(Some("gaming"), false).unwrap_err();
        assert_eq!(err.code(), "unknown_group");
    }

    #[test]
    fn test_ready_only() {
        let registry = Registry::builtin();
        let catalog = Catalog::builtin();

        let none = registry.ready_only(&catalog, &creds(&[]));
        assert!(none.iter().all(|v| v.status == IntegrationStatus::NoAuth));

        let with_github = registry.ready_only(&catalog, &creds(&[("github_token", "ghp_x")]));
        let github = with_github.iter().find(|v| v.integration.id == "github");
        assert_eq!(github.map(|v| v.status), Some(IntegrationStatus::Ready));

        let github_backed = registry.list().iter().filter(|i| i.setup_ref == Some("github"));
        assert_eq!(with_github.len(), none.len() + github_backed.count());
    }

    #[test]
    fn test_get() {
        let registry = Registry::builtin();
        assert_eq!(registry.get("slack").unwrap().setup_ref, Some("slack"));
        assert_eq!(registry.get("nope").unwrap_err().code(), "unknown_integration");
    }

    #[test]
    fn test_view_serializes_flat() {
        let registry = Registry::builtin();
        let catalog = Catalog::builtin();
        let news = registry.filter(Some("news"), true).unwrap();
        let views = registry.with_status(news, &catalog, &creds(&[]));
        let value = serde_json::to_value(&views[0]).unwrap();
        assert_eq!(value["status"], "no_auth");
        assert_eq!(value["group"], "news");
        assert!(value.get("id").is_some());
        assert!(value.get("setup_ref").is_none());
    }
}
