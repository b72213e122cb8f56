//! Delete command implementation.

use ticket_lib::{Result, TicketStore};

use super::report_not_found;
use crate::format::{MessageResponse, TICKET_DELETED, print_json};

/// Execute the delete command.
///
/// # Errors
///
/// Returns `NotFound` if the ticket doesn't exist, or a persistence error if
/// the removal cannot be written.
pub fn execute(id: u64, store: &TicketStore, json: bool) -> Result<()> {
    report_not_found(store.delete_ticket(id), json)?;

    if json {
        print_json(&MessageResponse::new(TICKET_DELETED))?;
    } else {
        println!("Deleted ticket #{id}");
    }
    Ok(())
}
