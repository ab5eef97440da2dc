use clap::CommandFactory;
use clap_complete::generate;
use std::io;

use crate::cli::Cli;

/// Writes the raw completion script; a shell, not an agent, consumes this
pub fn run(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "conduit", &mut io::stdout());
}
