//! Create command implementation.

use ticket_lib::{NewTicket, Result, TicketStore, TicketType};

use crate::cli::CreateArgs;
use crate::config::Config;
use crate::format::{format_ticket_line, print_json};

/// Execute the create command.
///
/// # Errors
///
/// Returns `Validation` if the name or type is blank, or a persistence error
/// if the ticket cannot be written.
pub fn execute(args: &CreateArgs, store: &TicketStore, config: &Config) -> Result<()> {
    let ticket_type = match args.ticket_type.as_deref() {
        Some(t) => t.parse::<TicketType>()?,
        None => config.default_type.clone(),
    };

    let ticket = store.create_ticket(&NewTicket::new(args.name.clone(), ticket_type))?;

    if config.json {
        print_json(&ticket)?;
    } else {
        println!("Created {}", format_ticket_line(&ticket));
    }
    Ok(())
}
