//! Output formatting for `td`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! JSON goes to stdout; diagnostics go to stderr.
//!
//! # JSON Output Types
//!
//! - [`MessageResponse`] - Bare confirmation or failure message (delete, not found)
//! - [`UpdateResponse`] - Merged ticket with a confirmation message (update)

mod output;
mod text;

pub use output::{
    MessageResponse, TICKET_DELETED, TICKET_NOT_FOUND, TICKET_UPDATED, UpdateResponse, print_json,
};
pub use text::{format_status_icon, format_ticket_line, format_type_badge};
