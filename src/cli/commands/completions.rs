//! Shell completion generation.

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};

/// Write completions for the requested shell to stdout.
pub fn execute(args: &CompletionsArgs) {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "td", &mut std::io::stdout());
}
