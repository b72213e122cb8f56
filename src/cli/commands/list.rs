//! List command implementation.

use ticket_lib::{Result, TicketStore};

use super::print_tickets;

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn execute(store: &TicketStore, json: bool) -> Result<()> {
    let tickets = store.list_tickets()?;
    print_tickets(&tickets, json)
}
