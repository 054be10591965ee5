//! View state: the single in-memory customer list snapshot.
//!
//! # Design
//! The displayed list is always a verbatim snapshot of the last successful
//! fetch. `apply_fetch` replaces the snapshot wholesale on success; on
//! failure it keeps the previous snapshot untouched and hands the error back
//! for display, so a failed refresh never clears a loaded list. There is no
//! local patching after a successful write — the owner re-fetches instead
//! (refetch-after-write).

use crate::error::ApiError;
use crate::types::Customer;

/// Whether anything is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Empty,
    Loaded,
}

/// Next-id heuristic for pre-populating the create form.
///
/// Returns 1 for an empty list, otherwise the maximum id present plus one
/// (a record with a missing id deserializes as 0 and counts as such). This
/// is a convenience default only — the server remains the arbiter of
/// whether the id is accepted.
pub fn next_id(customers: &[Customer]) -> u64 {
    customers.iter().map(|c| c.id).max().map_or(1, |max| max + 1)
}

/// Owner of the customer list snapshot.
#[derive(Debug, Default)]
pub struct CustomerStore {
    customers: Vec<Customer>,
}

impl CustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn state(&self) -> ListState {
        if self.customers.is_empty() {
            ListState::Empty
        } else {
            ListState::Loaded
        }
    }

    pub fn find(&self, id: u64) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn next_id(&self) -> u64 {
        next_id(&self.customers)
    }

    /// Fold a fetch result into the snapshot.
    ///
    /// On `Ok` the snapshot is replaced wholesale. On `Err` the previous
    /// snapshot is preserved and the error is returned for display.
    pub fn apply_fetch(&mut self, fetched: Result<Vec<Customer>, ApiError>) -> Result<(), ApiError> {
        let customers = fetched?;
        self.customers = customers;
        Ok(())
    }
}
