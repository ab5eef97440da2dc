use super::{Context, Outcome};
use crate::cli::SetupAction;
use crate::envelope::Envelope;
use crate::setup::Setup;

pub fn run(action: SetupAction, ctx: &Context) -> Outcome {
    let setup = Setup::new(&ctx.catalog, &ctx.store);
    match action {
        SetupAction::List { all } => Ok(Envelope::success(&setup.list(all)?)),
        SetupAction::Show { service } => Ok(Envelope::success(&setup.show(&service)?)),
        SetupAction::Set { service, args } => Ok(Envelope::success(&setup.set(&service, &args)?)),
    }
}
