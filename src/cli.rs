use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "conduit",
    about = "Uniform command surface and credential readiness for agent-driven integrations",
    version = env!("GIT_DESCRIBE"),
    after_help = "Every command prints one JSON envelope on stdout:\n  {\"success\": true, \"data\": ...} or {\"success\": false, \"error\": {\"code\": ..., \"message\": ...}}\n\nLogs are written to: ~/.local/share/conduit/logs/conduit.log"
)]
pub struct Cli {
    /// Credential file to use instead of the default
    #[arg(long, global = true, help = "Path to the credential store file")]
    pub store: Option<PathBuf>,

    /// Settings file to use instead of the default
    #[arg(long, global = true, help = "Path to conduit.yaml settings file")]
    pub settings: Option<PathBuf>,

    /// Pretty-print the JSON envelope
    #[arg(long, global = true, help = "Pretty-print JSON output")]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the integration registry
    Integrations {
        #[command(subcommand)]
        action: IntegrationsAction,
    },

    /// Configure credentials for a service
    Setup {
        #[command(subcommand)]
        action: SetupAction,
    },

    /// Read and write the credential store directly
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Check store, registry and local backends
    Doctor,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum IntegrationsAction {
    /// List integrations with their readiness status
    List {
        /// Only integrations in this group
        #[arg(long)]
        group: Option<String>,

        /// Only integrations that need no credentials
        #[arg(long)]
        no_auth: bool,
    },

    /// List integrations usable right now
    Ready,

    /// Show group ids with integration counts
    Groups,

    /// Show one integration and its setup state
    Show {
        /// Integration id
        id: String,
    },
}

#[derive(Subcommand)]
pub enum SetupAction {
    /// List services that still need credentials
    List {
        /// Include services that are already ready
        #[arg(long)]
        all: bool,
    },

    /// Show setup instructions and which keys are set
    Show {
        /// Service id
        service: String,
    },

    /// Store a credential for a service
    Set {
        /// Service id
        service: String,

        /// `<value>` for single-key services, otherwise `<key> <value>`
        #[arg(
            num_args = 1..=2,
            required = true,
            value_name = "ARG",
            allow_hyphen_values = true
        )]
        args: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the credential store location
    Path,

    /// List stored keys with values redacted
    List,

    /// Get a stored value
    Get {
        /// Credential key
        key: String,
    },

    /// Set a stored value
    Set {
        /// Credential key
        key: String,

        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Remove a stored key
    Unset {
        /// Credential key
        key: String,
    },

    /// Rename credentials stored under outdated key names
    Migrate {
        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
}
