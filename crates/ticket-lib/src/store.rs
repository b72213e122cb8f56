//! Ticket store with pluggable persistence.
//!
//! The store owns the ticket collection. Every mutation runs a full
//! read-modify-write cycle under one write lock: take the backend's lock,
//! reload the collection, apply the change, hand the complete new
//! collection to the [`Backend`], and only then swap it in. A failed write
//! leaves the snapshot untouched.
//!
//! Reloading inside the backend lock lets several stores share one file
//! without losing each other's writes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::error::{Result, TicketError};
use crate::jsonl::{self, FileLock};
use crate::model::{NewTicket, Status, Ticket};
use crate::query::{self, Criteria, TicketUpdate};

/// Durable representation of the ticket collection.
///
/// `replace` receives the complete collection and must swap it in
/// atomically; implementations never write partial state.
pub trait Backend: Send + Sync {
    /// Read the whole collection.
    fn load(&self) -> Result<Vec<Ticket>>;

    /// Atomically replace the whole collection.
    fn replace(&self, tickets: &[Ticket]) -> Result<()>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;

    /// Backing file, if any.
    fn path(&self) -> Option<&Path> {
        None
    }

    /// Exclude other writers of the same durable state until the returned
    /// guard is dropped. Backends private to one store need no lock.
    fn lock(&self) -> Result<Option<FileLock>> {
        Ok(None)
    }
}

/// Backend holding the collection in process memory only.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    tickets: Mutex<Vec<Ticket>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets: Mutex::new(tickets),
        }
    }

    fn tickets(&self) -> Result<MutexGuard<'_, Vec<Ticket>>> {
        self.tickets
            .lock()
            .map_err(|_| TicketError::Storage("memory backend lock poisoned".to_string()))
    }
}

impl Backend for MemoryBackend {
    fn load(&self) -> Result<Vec<Ticket>> {
        Ok(self.tickets()?.clone())
    }

    fn replace(&self, tickets: &[Ticket]) -> Result<()> {
        *self.tickets()? = tickets.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Backend writing one JSONL file via temp-file-and-rename.
#[derive(Debug, Clone)]
pub struct JsonlBackend {
    path: PathBuf,
}

impl JsonlBackend {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Backend for JsonlBackend {
    fn load(&self) -> Result<Vec<Ticket>> {
        jsonl::load(&self.path)
    }

    fn replace(&self, tickets: &[Ticket]) -> Result<()> {
        jsonl::save(&self.path, tickets)
    }

    fn describe(&self) -> String {
        format!("jsonl:{}", self.path.display())
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }

    fn lock(&self) -> Result<Option<FileLock>> {
        jsonl::lock(&self.path).map(Some)
    }
}

struct Snapshot {
    tickets: Vec<Ticket>,
    /// High-water mark; never decreases, so deleted ids are not reused.
    next_id: u64,
}

impl Snapshot {
    fn new(tickets: Vec<Ticket>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tickets.len());
        let mut max_id = 0;
        for ticket in &tickets {
            if !seen.insert(ticket.id) {
                return Err(TicketError::validation(
                    "id",
                    format!("duplicate ticket id {}", ticket.id),
                ));
            }
            max_id = max_id.max(ticket.id);
        }
        Ok(Self {
            tickets,
            next_id: next_after(max_id)?,
        })
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or(TicketError::NotFound { id })
    }
}

fn next_after(id: u64) -> Result<u64> {
    id.checked_add(1)
        .ok_or_else(|| TicketError::Storage("ticket id space exhausted".to_string()))
}

/// The ticket collection and its persistence.
///
/// `TicketStore` is `Send + Sync`; share it between threads with `Arc`.
pub struct TicketStore {
    backend: Box<dyn Backend>,
    state: RwLock<Snapshot>,
}

impl TicketStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create an empty store with no durable backing.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(MemoryBackend::default()),
            state: RwLock::new(Snapshot {
                tickets: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create an in-memory store pre-populated with `tickets`.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if two tickets share an id.
    pub fn with_tickets(tickets: Vec<Ticket>) -> Result<Self> {
        let state = Snapshot::new(tickets.clone())?;
        Ok(Self {
            backend: Box::new(MemoryBackend::new(tickets)),
            state: RwLock::new(state),
        })
    }

    /// Open a store backed by a JSONL file. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_backend(Box::new(JsonlBackend::new(path.as_ref())))
    }

    /// Open a store over an arbitrary backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot load its collection.
    pub fn with_backend(backend: Box<dyn Backend>) -> Result<Self> {
        let tickets = backend.load()?;
        debug!(
            backend = %backend.describe(),
            count = tickets.len(),
            "opened ticket store"
        );
        Ok(Self {
            state: RwLock::new(Snapshot::new(tickets)?),
            backend,
        })
    }

    /// Backing file, if the store has one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.backend.path()
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Get a single ticket by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the ticket doesn't exist.
    pub fn get_ticket(&self, id: u64) -> Result<Ticket> {
        let state = self.read()?;
        let idx = state.position(id)?;
        Ok(state.tickets[idx].clone())
    }

    /// All tickets in storage order.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the store lock is poisoned.
    pub fn list_tickets(&self) -> Result<Vec<Ticket>> {
        Ok(self.read()?.tickets.clone())
    }

    /// Create a ticket. The id is allocated here and status is always open.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the name or type is blank, or a persistence
    /// error if the new collection cannot be written.
    pub fn create_ticket(&self, new: &NewTicket) -> Result<Ticket> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(TicketError::validation("name", "cannot be empty"));
        }
        if new.ticket_type.as_str().trim().is_empty() {
            return Err(TicketError::validation("type", "cannot be empty"));
        }

        let (mut state, lock) = self.begin_mutation()?;
        let id = state.next_id;
        let next_id = next_after(id)?;
        let ticket = Ticket::new(id, name, Status::Open, new.ticket_type.clone());

        let mut tickets = state.tickets.clone();
        tickets.push(ticket.clone());
        self.commit(&mut state, tickets)?;
        state.next_id = next_id;
        drop(state);
        drop(lock);

        info!(id, ticket_type = %ticket.ticket_type, "created ticket");
        Ok(ticket)
    }

    /// Merge the supplied fields of `update` into ticket `id`.
    ///
    /// Blank values are skipped. An update that changes nothing returns the
    /// ticket without rewriting the backend.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the ticket doesn't exist, or a persistence
    /// error if the new collection cannot be written.
    pub fn update_ticket(&self, id: u64, update: &TicketUpdate) -> Result<Ticket> {
        let (mut state, lock) = self.begin_mutation()?;
        let idx = state.position(id)?;

        let mut updated = state.tickets[idx].clone();
        if !update.apply_to(&mut updated) {
            debug!(id, "update changed nothing");
            return Ok(updated);
        }

        let mut tickets = state.tickets.clone();
        tickets[idx] = updated.clone();
        self.commit(&mut state, tickets)?;
        drop(state);
        drop(lock);

        info!(id, status = %updated.status, "updated ticket");
        Ok(updated)
    }

    /// Delete a ticket.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the ticket doesn't exist, or a persistence
    /// error if the new collection cannot be written.
    pub fn delete_ticket(&self, id: u64) -> Result<()> {
        let (mut state, lock) = self.begin_mutation()?;
        let idx = state.position(id)?;

        let mut tickets = state.tickets.clone();
        tickets.remove(idx);
        self.commit(&mut state, tickets)?;
        drop(state);
        drop(lock);

        info!(id, "deleted ticket");
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Filter the current snapshot by `criteria`.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the store lock is poisoned.
    pub fn search(&self, criteria: &Criteria) -> Result<Vec<Ticket>> {
        let state = self.read()?;
        Ok(query::filter(&state.tickets, criteria))
    }

    /// Number of tickets.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the store lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.tickets.len())
    }

    /// Whether the store holds no tickets.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the store lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.tickets.is_empty())
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Take the write lock and the backend lock, then refresh the snapshot
    /// from the backend so the change applies to the latest collection.
    fn begin_mutation(&self) -> Result<(RwLockWriteGuard<'_, Snapshot>, Option<FileLock>)> {
        let mut state = self.write()?;
        let lock = self.backend.lock()?;
        let fresh = Snapshot::new(self.backend.load()?)?;
        state.next_id = state.next_id.max(fresh.next_id);
        state.tickets = fresh.tickets;
        Ok((state, lock))
    }

    fn commit(&self, state: &mut Snapshot, tickets: Vec<Ticket>) -> Result<()> {
        debug!(
            backend = %self.backend.describe(),
            count = tickets.len(),
            "writing ticket collection"
        );
        self.backend.replace(&tickets)?;
        state.tickets = tickets;
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Snapshot>> {
        self.state
            .read()
            .map_err(|_| TicketError::Storage("ticket store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Snapshot>> {
        self.state
            .write()
            .map_err(|_| TicketError::Storage("ticket store lock poisoned".to_string()))
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for TicketStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketStore")
            .field("backend", &self.backend.describe())
            .finish_non_exhaustive()
    }
}
