//! `ticketdesk` - support ticket store
//!
//! This crate provides the `td` command-line caller over [`ticket_lib`],
//! which owns the ticket collection, its JSONL persistence and search.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Configuration management (defaults, YAML file, env)
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod format;
pub mod logging;

pub use ticket_lib;

use ticket_lib::{ErrorKind, TicketError};

/// Exit code for validation failures.
pub const EXIT_VALIDATION: i32 = 2;
/// Exit code when the requested ticket does not exist.
pub const EXIT_NOT_FOUND: i32 = 3;
/// Exit code when the data file cannot be read or written.
pub const EXIT_PERSISTENCE: i32 = 4;

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}

/// Map an error chain to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<TicketError>())
        .map_or(1, |ticket_err| match ticket_err.kind() {
            ErrorKind::Validation => EXIT_VALIDATION,
            ErrorKind::NotFound => EXIT_NOT_FOUND,
            ErrorKind::Persistence => EXIT_PERSISTENCE,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_through_context() {
        let err: anyhow::Result<()> =
            Err::<(), _>(TicketError::NotFound { id: 3 }).context("Failed to show ticket");
        assert_eq!(exit_code(&err.unwrap_err()), EXIT_NOT_FOUND);

        let err = anyhow::Error::from(TicketError::Storage("lock".to_string()));
        assert_eq!(exit_code(&err), EXIT_PERSISTENCE);

        let err = anyhow::Error::from(TicketError::validation("name", "cannot be empty"));
        assert_eq!(exit_code(&err), EXIT_VALIDATION);

        assert_eq!(exit_code(&anyhow::anyhow!("other")), 1);
    }
}
