//! Update command implementation.

use ticket_lib::{Result, TicketStore, TicketUpdate};

use super::report_not_found;
use crate::cli::UpdateArgs;
use crate::format::{UpdateResponse, format_ticket_line, print_json};

/// Execute the update command.
///
/// Empty values are ignored, so `--name ""` never clears a name.
///
/// # Errors
///
/// Returns `NotFound` if the ticket doesn't exist, or a persistence error if
/// the change cannot be written.
pub fn execute(args: &UpdateArgs, store: &TicketStore, json: bool) -> Result<()> {
    let update = TicketUpdate::from_raw(
        args.name.as_deref(),
        args.status.as_deref(),
        args.ticket_type.as_deref(),
    );

    let ticket = report_not_found(store.update_ticket(args.id, &update), json)?;

    if json {
        print_json(&UpdateResponse::updated(ticket))?;
    } else {
        println!("Updated {}", format_ticket_line(&ticket));
    }
    Ok(())
}
