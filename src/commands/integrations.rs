use log::debug;
use serde::Serialize;

use super::{Context, Outcome};
use crate::cli::IntegrationsAction;
use crate::envelope::Envelope;
use crate::readiness;
use crate::registry::IntegrationView;
use crate::setup::{ServiceReport, Setup};
use crate::store::CredentialStore;

pub fn run(action: IntegrationsAction, ctx: &Context) -> Outcome {
    match action {
        IntegrationsAction::List { group, no_auth } => list(group.as_deref(), no_auth, ctx),
        IntegrationsAction::Ready => ready(ctx),
        IntegrationsAction::Groups => Ok(Envelope::success(&ctx.registry.groups())),
        IntegrationsAction::Show { id } => show(&id, ctx),
    }
}

fn list(group: Option<&str>, no_auth: bool, ctx: &Context) -> Outcome {
    let selected = ctx.registry.filter(group, no_auth)?;
    let credentials = ctx.store.load()?;
    let views = ctx.registry.with_status(selected, &ctx.catalog, &credentials);
    let count = views.len();
    debug!("Listing {count} integrations (group={group:?}, no_auth={no_auth})");
    Ok(Envelope::success(&views))
}

fn ready(ctx: &Context) -> Outcome {
    let credentials = ctx.store.load()?;
    Ok(Envelope::success(&ctx.registry.ready_only(&ctx.catalog, &credentials)))
}

#[derive(Serialize)]
struct IntegrationDetail<'a> {
    #[serde(flatten)]
    view: IntegrationView<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    setup: Option<ServiceReport>,
}

fn show(id: &str, ctx: &Context) -> Outcome {
    let integration = ctx.registry.get(id)?;
    let credentials = ctx.store.load()?;
    let view = IntegrationView {
        integration,
        status: readiness::resolve(integration, &ctx.catalog, &credentials),
    };

    let setup = match integration.setup_ref {
        Some(service) if ctx.catalog.get(service).is_some() => {
            Some(Setup::new(&ctx.catalog, &ctx.store).show(service)?)
        }
        _ => None,
    };

    Ok(Envelope::success(&IntegrationDetail { view, setup }))
}
