//! Core data types for ticket-lib.
//!
//! The serde format is the wire and on-disk format: one flat object with
//! `id`, `name`, `status` and `type`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TicketError;

/// Ticket lifecycle status.
///
/// The set is open-ended: anything other than the conventional values is
/// kept verbatim as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "closed")]
    Closed,
    #[serde(untagged)]
    Custom(String),
}

impl Status {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in progress",
            Self::Closed => "closed",
            Self::Custom(value) => value,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TicketError::validation("status", "cannot be empty"));
        }
        match trimmed.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in progress" | "in_progress" | "inprogress" => Ok(Self::InProgress),
            "closed" => Ok(Self::Closed),
            _ => Ok(Self::Custom(trimmed.to_string())),
        }
    }
}

/// Ticket classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    #[default]
    Task,
    Bug,
    Feature,
    Improvement,
    #[serde(untagged)]
    Custom(String),
}

impl TicketType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Task => "task",
            Self::Bug => "bug",
            Self::Feature => "feature",
            Self::Improvement => "improvement",
            Self::Custom(value) => value,
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TicketError::validation("type", "cannot be empty"));
        }
        match trimmed.to_lowercase().as_str() {
            "task" => Ok(Self::Task),
            "bug" => Ok(Self::Bug),
            "feature" => Ok(Self::Feature),
            "improvement" => Ok(Self::Improvement),
            _ => Ok(Self::Custom(trimmed.to_string())),
        }
    }
}

/// A support/work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u64,
    pub name: String,
    pub status: Status,
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
}

impl Ticket {
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, status: Status, ticket_type: TicketType) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            ticket_type,
        }
    }
}

/// Input for creating a ticket. The store assigns `id` and `status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewTicket {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ticket_type: TicketType,
}

impl NewTicket {
    #[must_use]
    pub fn new(name: impl Into<String>, ticket_type: TicketType) -> Self {
        Self {
            name: name.into(),
            ticket_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!("open".parse::<Status>().unwrap(), Status::Open);
        assert_eq!("OPEN".parse::<Status>().unwrap(), Status::Open);
        assert_eq!("In Progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("closed".parse::<Status>().unwrap(), Status::Closed);
        assert_eq!(
            "Won't Fix".parse::<Status>().unwrap(),
            Status::Custom("Won't Fix".to_string())
        );
        assert!("   ".parse::<Status>().unwrap_err().is_validation());
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("BUG".parse::<TicketType>().unwrap(), TicketType::Bug);
        assert_eq!(
            "improvement".parse::<TicketType>().unwrap(),
            TicketType::Improvement
        );
        let custom = "spike".parse::<TicketType>().unwrap();
        assert_eq!(custom, TicketType::Custom("spike".to_string()));
        assert!("".parse::<TicketType>().is_err());
    }

    #[test]
    fn test_ticket_serde_shape() {
        let ticket = Ticket::new(2, "Add login", Status::InProgress, TicketType::Feature);
        let json = serde_json::to_string(&ticket).unwrap();
        assert_eq!(
            json,
            r#"{"id":2,"name":"Add login","status":"in progress","type":"feature"}"#
        );
    }

    #[test]
    fn test_custom_values_survive_serde() {
        let json = r#"{"id":5,"name":"Audit","status":"on hold","type":"chore"}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.status, Status::Custom("on hold".to_string()));
        assert_eq!(ticket.ticket_type, TicketType::Custom("chore".to_string()));
        assert_eq!(serde_json::to_string(&ticket).unwrap(), json);
    }

    #[test]
    fn test_ticket_missing_field_rejected() {
        let json = r#"{"id":1,"name":"No status","type":"bug"}"#;
        assert!(serde_json::from_str::<Ticket>(json).is_err());
    }

    #[test]
    fn test_new_ticket_defaults_to_task() {
        let new: NewTicket = serde_json::from_str(r#"{"name":"Write docs"}"#).unwrap();
        assert_eq!(new.ticket_type, TicketType::Task);
    }
}
