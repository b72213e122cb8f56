//! Error types for `ticket-lib`.
//!
//! Every failure falls into one of three classes (see [`ErrorKind`]):
//! a missing ticket, rejected input, or a persistence failure.

use thiserror::Error;

/// Primary error type for ticket-lib operations.
#[derive(Error, Debug)]
pub enum TicketError {
    // === Ticket Errors ===
    /// Ticket with the specified ID was not found.
    #[error("Ticket not found: {id}")]
    NotFound { id: u64 },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    // === JSONL Errors ===
    /// Failed to parse a line in the JSONL file.
    #[error("JSONL parse error at line {line}: {reason}")]
    JsonlParse { line: usize, reason: String },

    // === Storage Errors ===
    /// Storage backend failure that is not a plain I/O error.
    #[error("Storage error: {0}")]
    Storage(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of a [`TicketError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested ticket does not exist.
    NotFound,
    /// Input was rejected before any mutation was attempted.
    Validation,
    /// The backing representation could not be read or written.
    Persistence,
}

impl TicketError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::JsonlParse { .. } | Self::Storage(_) | Self::Io(_) | Self::Json(_) => {
                ErrorKind::Persistence
            }
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound)
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation)
    }

    #[must_use]
    pub const fn is_persistence(&self) -> bool {
        matches!(self.kind(), ErrorKind::Persistence)
    }
}

/// Result type using `TicketError`.
pub type Result<T> = std::result::Result<T, TicketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(TicketError::NotFound { id: 7 }.kind(), ErrorKind::NotFound);
        assert_eq!(
            TicketError::validation("name", "cannot be empty").kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            TicketError::JsonlParse {
                line: 3,
                reason: "eof".to_string()
            }
            .kind(),
            ErrorKind::Persistence
        );
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(TicketError::from(io).is_persistence());
        assert!(TicketError::Storage("lock".to_string()).is_persistence());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            TicketError::NotFound { id: 99 }.to_string(),
            "Ticket not found: 99"
        );
        assert_eq!(
            TicketError::validation("name", "cannot be empty").to_string(),
            "Validation failed: name: cannot be empty"
        );
    }
}
