use clap::Parser;
use clap::error::ErrorKind;
use eyre::{Context as _, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

mod catalog;
mod cli;
mod commands;
mod envelope;
mod error;
mod migrate;
mod readiness;
mod registry;
mod settings;
mod setup;
mod store;

use cli::{Cli, Commands};
use commands::Context;
use envelope::Envelope;
use error::Error;
use settings::{LogLevel, Settings};

fn setup_logging(log_level: &LogLevel) -> Result<PathBuf> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("conduit")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("conduit.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    logger(log_level).target(env_logger::Target::Pipe(target)).try_init()?;
    Ok(log_file)
}

/// Builder honouring RUST_LOG first, then the configured level
fn logger(log_level: &LogLevel) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(log_level.as_filter());
    }
    builder
}

/// Print the envelope and exit with its code
fn finish(envelope: Envelope, pretty: bool) -> ! {
    envelope.print(pretty);
    std::process::exit(envelope.exit_code());
}

fn run(cli: Cli, ctx: &Context) -> commands::Outcome {
    match cli.command {
        Commands::Integrations { action } => commands::integrations::run(action, ctx),
        Commands::Setup { action } => commands::setup::run(action, ctx),
        Commands::Config { action } => commands::config::run(action, ctx),
        Commands::Doctor => commands::doctor::run(ctx),
        // Handled before the context is built
        Commands::Completions { .. } => Err(Error::Usage("completions produce no envelope".to_string())),
    }
}

fn main() {
    // Parse errors still go out as an envelope; only help and version print plain text
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let usage = Error::Usage(e.to_string().trim().to_string());
            finish(Envelope::failure(&usage), false)
        }
    };

    if let Commands::Completions { shell } = cli.command {
        commands::completions::run(shell);
        return;
    }

    // Load settings before logging, so a bad settings file is reported rather than logged
    let settings = match Settings::load(cli.settings.as_ref()) {
        Ok(settings) => settings,
        Err(e) => {
            let path = cli
                .settings
                .clone()
                .or_else(|| std::env::var_os("CONDUIT_SETTINGS").map(PathBuf::from))
                .unwrap_or_else(|| Settings::conduit_dir().join("conduit.yaml"));
            finish(Envelope::failure(&Error::config(path, format!("{:#}", e))), cli.pretty);
        }
    };

    match setup_logging(&settings.log_level) {
        Ok(log_file) => info!("Logging initialized, writing to: {}", log_file.display()),
        Err(e) => {
            // stdout belongs to the envelope, so fall back to stderr
            let _ = logger(&settings.log_level).try_init();
            warn!("File logging unavailable: {:#}", e);
        }
    }

    let pretty = cli.pretty || settings.pretty;
    let store_path = settings.resolve_store_path(cli.store.as_ref());
    info!("Using credential store at {}", store_path.display());

    let ctx = Context::new(store_path);
    let envelope = match run(cli, &ctx) {
        Ok(envelope) => envelope,
        Err(e) => {
            debug!("Command failed with {}", e.code());
            Envelope::failure(&e)
        }
    };

    finish(envelope, pretty);
}
