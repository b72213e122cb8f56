//! `ticket-lib`: in-process ticket store.
//!
//! A mutable collection of support tickets with CRUD operations and a
//! multi-field search filter. Data lives in memory and is persisted by
//! rewriting a JSONL file atomically on every mutation.
//!
//! # Quick Start
//!
//! ```no_run
//! use ticket_lib::{Criteria, NewTicket, TicketStore, TicketType, TicketUpdate};
//!
//! // Load existing file (missing file = empty store)
//! let store = TicketStore::open(".tickets/tickets.jsonl").unwrap();
//!
//! // Create
//! let ticket = store.create_ticket(&NewTicket::new("Fix bug", TicketType::Bug)).unwrap();
//!
//! // Update
//! store.update_ticket(ticket.id, &TicketUpdate::from_raw(None, Some("closed"), None)).unwrap();
//!
//! // Search
//! let open_bugs = store.search(&Criteria::default().status("open").ticket_type("bug")).unwrap();
//! ```

pub mod error;
pub mod jsonl;
pub mod model;
pub mod query;
pub mod seed;
pub mod store;

pub use error::{ErrorKind, Result, TicketError};
pub use model::{NewTicket, Status, Ticket, TicketType};
pub use query::{Criteria, TicketUpdate, filter};
pub use store::{Backend, JsonlBackend, MemoryBackend, TicketStore};
