//! Show command implementation.

use ticket_lib::{Result, TicketStore};

use super::report_not_found;
use crate::format::{format_ticket_line, print_json};

/// Execute the show command.
///
/// # Errors
///
/// Returns `NotFound` if the ticket doesn't exist.
pub fn execute(id: u64, store: &TicketStore, json: bool) -> Result<()> {
    let ticket = report_not_found(store.get_ticket(id), json)?;

    if json {
        print_json(&ticket)?;
    } else {
        println!("{}", format_ticket_line(&ticket));
    }
    Ok(())
}
