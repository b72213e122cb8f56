//! Sample tickets for demos and fixtures.

use crate::model::{Status, Ticket, TicketType};

/// The eight sample tickets written by `td init --seed`.
#[must_use]
pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        Ticket::new(1, "Fix next.js api route bug", Status::Open, TicketType::Bug),
        Ticket::new(2, "Add user authentication", Status::InProgress, TicketType::Feature),
        Ticket::new(3, "Update documentation", Status::Closed, TicketType::Task),
        Ticket::new(4, "Refactor ticket model", Status::Open, TicketType::Improvement),
        Ticket::new(5, "Resolve deployment error", Status::Open, TicketType::Bug),
        Ticket::new(6, "Implement dark mode", Status::InProgress, TicketType::Feature),
        Ticket::new(7, "Optimize database queries", Status::Open, TicketType::Improvement),
        Ticket::new(8, "Fix login redirect issue", Status::Closed, TicketType::Bug),
    ]
}
