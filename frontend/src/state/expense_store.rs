//! # Expense Store
//!
//! Session cache of the user's expenses. The collection is only ever
//! replaced wholesale by a successful fetch; deletes go to the service and
//! are followed by a full re-fetch instead of a local removal, so the cache
//! always mirrors the service's last answer.
//!
//! Every refresh is tagged with a ticket. A response is applied only if no
//! newer refresh (or `clear`) was issued since, so a slow response cannot
//! overwrite a fresher one.

use shared::ExpenseRecord;
use std::cell::RefCell;
use std::rc::Rc;

use crate::services::{ApiError, ExpenseService};

/// Identifies one issued refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
}

/// What happened to a successful fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The collection now holds `count` records
    Applied { count: usize },
    /// A newer refresh was issued meanwhile; the response was dropped
    Superseded,
}

#[derive(Debug, Default)]
struct StoreState {
    records: Vec<ExpenseRecord>,
    issued: u64,
}

/// Shared handle to the expense collection. Clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    state: Rc<RefCell<StoreState>>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current collection in fetch order
    pub fn all(&self) -> Vec<ExpenseRecord> {
        self.state.borrow().records.clone()
    }

    /// Run `f` against the collection without cloning it
    pub fn with_all<R>(&self, f: impl FnOnce(&[ExpenseRecord]) -> R) -> R {
        f(&self.state.borrow().records)
    }

    pub fn len(&self) -> usize {
        self.state.borrow().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn begin_refresh(&self) -> RefreshTicket {
        let mut state = self.state.borrow_mut();
        state.issued += 1;
        RefreshTicket {
            generation: state.issued,
        }
    }

    /// Apply a fetch result. Failures leave the collection untouched and
    /// are handed back to the caller.
    pub fn complete_refresh(
        &self,
        ticket: RefreshTicket,
        result: Result<Vec<ExpenseRecord>, ApiError>,
    ) -> Result<RefreshOutcome, ApiError> {
        let records = result?;
        let mut state = self.state.borrow_mut();
        if ticket.generation != state.issued {
            log::debug!(
                "Dropping expense list from refresh #{} (latest is #{})",
                ticket.generation,
                state.issued
            );
            return Ok(RefreshOutcome::Superseded);
        }

        let count = records.len();
        state.records = records;
        Ok(RefreshOutcome::Applied { count })
    }

    /// Replace the collection with the service's current list
    pub async fn refresh(&self, service: &dyn ExpenseService) -> Result<RefreshOutcome, ApiError> {
        let ticket = self.begin_refresh();
        let result = service.fetch_expenses().await;
        self.complete_refresh(ticket, result).map_err(|e| {
            log::error!("Failed to fetch expenses: {}", e);
            e
        })
    }

    /// Delete remotely, then re-fetch. The record is never removed locally:
    /// if the re-fetch fails the previous collection stays as it was.
    pub async fn delete(&self, service: &dyn ExpenseService, id: i64) -> Result<RefreshOutcome, ApiError> {
        if let Err(e) = service.delete_expense(id).await {
            log::error!("Failed to delete expense {}: {}", id, e);
            return Err(e);
        }
        log::info!("Deleted expense {}", id);
        self.refresh(service).await
    }

    /// Empty the collection and invalidate any refresh still in flight
    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.records.clear();
        state.issued += 1;
    }
}
