//! Query and update types for ticket operations.
//!
//! [`filter`] is the stateless search layer applied over a ticket snapshot.

use serde::Deserialize;

use crate::model::{Status, Ticket, TicketType};

/// Fields to update on a ticket. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketUpdate {
    pub name: Option<String>,
    pub status: Option<Status>,
    pub ticket_type: Option<TicketType>,
}

impl TicketUpdate {
    /// Build an update from loosely-typed surface input.
    ///
    /// Blank values are treated as not supplied.
    #[must_use]
    pub fn from_raw(name: Option<&str>, status: Option<&str>, ticket_type: Option<&str>) -> Self {
        Self {
            name: non_blank(name).map(str::to_string),
            status: non_blank(status).and_then(|s| s.parse().ok()),
            ticket_type: non_blank(ticket_type).and_then(|t| t.parse().ok()),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none() && self.ticket_type.is_none()
    }

    /// Merge supplied fields into `ticket`. Returns whether anything changed.
    pub(crate) fn apply_to(&self, ticket: &mut Ticket) -> bool {
        let mut changed = false;
        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            if ticket.name != name {
                ticket.name = name.to_string();
                changed = true;
            }
        }
        if let Some(status) = self.status.as_ref().filter(|s| !s.as_str().trim().is_empty()) {
            if &ticket.status != status {
                ticket.status = status.clone();
                changed = true;
            }
        }
        if let Some(ticket_type) = self
            .ticket_type
            .as_ref()
            .filter(|t| !t.as_str().trim().is_empty())
        {
            if &ticket.ticket_type != ticket_type {
                ticket.ticket_type = ticket_type.clone();
                changed = true;
            }
        }
        changed
    }
}

/// Search criteria. Every supplied criterion must match (AND).
///
/// Deserializes straight from the `query`/`status`/`type` parameters of a
/// search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Criteria {
    /// Case-insensitive substring of the ticket name.
    #[serde(alias = "query")]
    pub text: Option<String>,
    /// Case-insensitive exact status.
    pub status: Option<String>,
    /// Case-insensitive exact type.
    #[serde(rename = "type")]
    pub ticket_type: Option<String>,
}

impl Criteria {
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn ticket_type(mut self, ticket_type: impl Into<String>) -> Self {
        self.ticket_type = Some(ticket_type.into());
        self
    }

    /// True when no criterion is active, i.e. filtering is the identity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        non_blank(self.text.as_deref()).is_none()
            && non_blank(self.status.as_deref()).is_none()
            && non_blank(self.ticket_type.as_deref()).is_none()
    }

    /// Check a single ticket against every active criterion.
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(text) = non_blank(self.text.as_deref()) {
            if !ticket.name.to_lowercase().contains(&text.to_lowercase()) {
                return false;
            }
        }
        if let Some(status) = non_blank(self.status.as_deref()) {
            if !eq_ignore_case(ticket.status.as_str(), status) {
                return false;
            }
        }
        if let Some(ticket_type) = non_blank(self.ticket_type.as_deref()) {
            if !eq_ignore_case(ticket.ticket_type.as_str(), ticket_type) {
                return false;
            }
        }
        true
    }
}

/// Filter tickets by `criteria`, preserving input order.
#[must_use]
pub fn filter(tickets: &[Ticket], criteria: &Criteria) -> Vec<Ticket> {
    if criteria.is_empty() {
        return tickets.to_vec();
    }
    tickets
        .iter()
        .filter(|ticket| criteria.matches(ticket))
        .cloned()
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
