//! Search command implementation.
//!
//! Mirrors the query surface: optional `query`, `status` and `type`
//! parameters, combined with AND, returning a JSON array.

use ticket_lib::{Criteria, Result, TicketStore};

use super::print_tickets;
use crate::cli::SearchArgs;

/// Convert CLI args to search criteria.
#[must_use]
pub fn build_criteria(args: &SearchArgs) -> Criteria {
    Criteria {
        text: args.query.clone(),
        status: args.status.clone(),
        ticket_type: args.ticket_type.clone(),
    }
}

/// Execute the search command.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn execute(args: &SearchArgs, store: &TicketStore, json: bool) -> Result<()> {
    let criteria = build_criteria(args);
    let tickets = store.search(&criteria)?;
    print_tickets(&tickets, json)
}
