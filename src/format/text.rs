//! Text formatting functions for `td`.
//!
//! Plain text (non-ANSI) formatting for terminal output:
//! - Status icons (○ ◐ ✓ ?)
//! - Type badges ([bug], [feature], etc.)
//! - Ticket line formatting

use ticket_lib::{Status, Ticket, TicketType};

/// Status icon characters.
pub mod icons {
    /// Open ticket (hollow circle).
    pub const OPEN: &str = "○";
    /// In progress (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Closed (checkmark).
    pub const CLOSED: &str = "✓";
    /// Any other status.
    pub const OTHER: &str = "?";
}

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: &Status) -> &'static str {
    match status {
        Status::Open => icons::OPEN,
        Status::InProgress => icons::IN_PROGRESS,
        Status::Closed => icons::CLOSED,
        Status::Custom(_) => icons::OTHER,
    }
}

/// Format ticket type as a bracketed badge.
#[must_use]
pub fn format_type_badge(ticket_type: &TicketType) -> String {
    format!("[{}]", ticket_type.as_str())
}

/// Format a single-line ticket summary.
///
/// Format: `{icon} #{id} {[type]} {name} ({status})`
#[must_use]
pub fn format_ticket_line(ticket: &Ticket) -> String {
    format!(
        "{} #{} {} {} ({})",
        format_status_icon(&ticket.status),
        ticket.id,
        format_type_badge(&ticket.ticket_type),
        ticket.name,
        ticket.status,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_ticket() -> Ticket {
        Ticket::new(7, "Test name", Status::Open, TicketType::Task)
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(format_status_icon(&Status::Open), "○");
        assert_eq!(format_status_icon(&Status::InProgress), "◐");
        assert_eq!(format_status_icon(&Status::Closed), "✓");
        assert_eq!(
            format_status_icon(&Status::Custom("on hold".to_string())),
            "?"
        );
    }

    #[test]
    fn test_format_type_badge() {
        assert_eq!(format_type_badge(&TicketType::Bug), "[bug]");
        assert_eq!(format_type_badge(&TicketType::Improvement), "[improvement]");
        assert_eq!(
            format_type_badge(&TicketType::Custom("spike".to_string())),
            "[spike]"
        );
    }

    #[test]
    fn test_format_ticket_line_open() {
        let line = format_ticket_line(&make_test_ticket());
        assert_eq!(line, "○ #7 [task] Test name (open)");
    }

    #[test]
    fn test_format_ticket_line_in_progress() {
        let mut ticket = make_test_ticket();
        ticket.status = Status::InProgress;
        let line = format_ticket_line(&ticket);
        assert!(line.starts_with("◐"));
        assert!(line.ends_with("(in progress)"));
    }

    #[test]
    fn test_format_ticket_line_closed_bug() {
        let mut ticket = make_test_ticket();
        ticket.status = Status::Closed;
        ticket.ticket_type = TicketType::Bug;
        let line = format_ticket_line(&ticket);
        assert!(line.starts_with("✓"));
        assert!(line.contains("[bug]"));
    }
}
