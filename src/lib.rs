#![doc(test(attr(deny(warnings))))]

//! Bill Core is a personal income/expense ledger: validated records, an ordered
//! store persisted to key-value storage, date and category filtering, totals, and
//! an edit session mediating form input.

pub mod cli;
pub mod clock;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::core::services::{
    CategoryFilter, DateBucket, Entry, FilterService, SummaryService, Totals, ViewFilter,
};
pub use crate::core::{CommitOutcome, EditSession, LedgerStore, Mutation, SessionState};
pub use crate::errors::{LedgerError, PersistenceError, ValidationError};
pub use crate::ledger::{Category, Direction, DraftField, Record, RecordDraft};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Bill Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
