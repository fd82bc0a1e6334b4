//! Form state for creating a record or editing an existing one.

use crate::clock::Clock;
use crate::core::ledger_store::{LedgerStore, Mutation};
use crate::errors::{LedgerError, Result};
use crate::ledger::{DraftField, Record, RecordDraft};

/// Whether the form targets a new record or the record at an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Inactive,
    Editing(usize),
}

/// Result of a successful [`EditSession::commit`].
#[derive(Debug)]
pub enum CommitOutcome {
    Added(Mutation),
    Updated(Mutation),
    /// The edited record moved or vanished before commit. Nothing was written and the
    /// form was kept.
    Stale { index: usize },
}

#[derive(Debug, Clone)]
struct EditTarget {
    index: usize,
    revision: u64,
    original: Record,
}

/// Mediates between a single form object and the [`LedgerStore`].
#[derive(Debug, Clone)]
pub struct EditSession {
    target: Option<EditTarget>,
    form: RecordDraft,
}

impl EditSession {
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            target: None,
            form: RecordDraft::blank(clock.today()),
        }
    }

    pub fn state(&self) -> SessionState {
        match &self.target {
            Some(target) => SessionState::Editing(target.index),
            None => SessionState::Inactive,
        }
    }

    pub fn form(&self) -> &RecordDraft {
        &self.form
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Replaces the whole form.
    pub fn replace_form(&mut self, form: RecordDraft) {
        self.form = form;
    }

    /// Starts (or re-targets) editing of the record at `index`, seeding the form with a copy.
    pub fn begin_edit(&mut self, store: &LedgerStore, index: usize) -> Result<()> {
        let record = store.get(index).ok_or(LedgerError::IndexOutOfRange {
            index,
            len: store.len(),
        })?;
        self.form = RecordDraft::from(record);
        self.target = Some(EditTarget {
            index,
            revision: store.revision(),
            original: record.clone(),
        });
        Ok(())
    }

    /// Drops the form contents and returns to `Inactive` without touching the ledger.
    pub fn cancel(&mut self, clock: &dyn Clock) {
        self.target = None;
        self.reset(clock);
    }

    /// Submits the form: updates the edited record, or adds a new one when inactive.
    ///
    /// On validation failure the state and form are left as they were.
    pub fn commit(&mut self, store: &mut LedgerStore, clock: &dyn Clock) -> Result<CommitOutcome> {
        let Some(target) = self.target.as_ref() else {
            let mutation = store.add(&self.form)?;
            self.reset(clock);
            return Ok(CommitOutcome::Added(mutation));
        };

        let index = target.index;
        if !target_still_valid(target, store) {
            tracing::warn!(index, "edit target changed before commit, discarding session");
            self.target = None;
            return Ok(CommitOutcome::Stale { index });
        }

        let mutation = store.update(index, &self.form)?;
        self.target = None;
        self.reset(clock);
        Ok(CommitOutcome::Updated(mutation))
    }

    fn reset(&mut self, clock: &dyn Clock) {
        self.form = RecordDraft::blank(clock.today());
    }
}

fn target_still_valid(target: &EditTarget, store: &LedgerStore) -> bool {
    match store.get(target.index) {
        None => false,
        Some(_) if store.revision() == target.revision => true,
        Some(current) => *current == target.original,
    }
}
