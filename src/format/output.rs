use serde::{Deserialize, Serialize};
use ticket_lib::Ticket;

pub const TICKET_UPDATED: &str = "Ticket updated";
pub const TICKET_DELETED: &str = "Ticket deleted";
pub const TICKET_NOT_FOUND: &str = "Ticket not found";

/// Message-only response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Merged ticket plus confirmation, returned by update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub message: String,
    pub ticket: Ticket,
}

impl UpdateResponse {
    #[must_use]
    pub fn updated(ticket: Ticket) -> Self {
        Self {
            message: TICKET_UPDATED.to_string(),
            ticket,
        }
    }
}

/// Pretty-print `value` as JSON on stdout.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
