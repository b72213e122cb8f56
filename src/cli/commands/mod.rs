//! Command implementations for `td`.
//!
//! Each command takes an opened [`TicketStore`](ticket_lib::TicketStore)
//! and returns the library's typed error so the caller can map it to an
//! exit code.

pub mod completions;
pub mod create;
pub mod delete;
pub mod init;
pub mod list;
pub mod search;
pub mod show;
pub mod update;

use ticket_lib::{Result, Ticket};

use crate::format::{MessageResponse, TICKET_NOT_FOUND, format_ticket_line, print_json};

/// Print a ticket list as JSON or one text line per ticket.
fn print_tickets(tickets: &[Ticket], json: bool) -> Result<()> {
    if json {
        print_json(tickets)?;
    } else if tickets.is_empty() {
        println!("No tickets found.");
    } else {
        for ticket in tickets {
            println!("{}", format_ticket_line(ticket));
        }
        println!("\n{} ticket(s)", tickets.len());
    }
    Ok(())
}

/// In JSON mode, emit the not-found body before passing the error on.
fn report_not_found<T>(result: Result<T>, json: bool) -> Result<T> {
    if json {
        if let Err(err) = &result {
            if err.is_not_found() {
                print_json(&MessageResponse::new(TICKET_NOT_FOUND))?;
            }
        }
    }
    result
}
