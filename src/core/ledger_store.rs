use crate::errors::{LedgerError, PersistenceError, Result};
use crate::ledger::{Record, RecordDraft};
use crate::storage::{KeyValueBackend, MemoryStore, StorageBackend, StoredBill};

/// Outcome of a successful mutation.
///
/// The in-memory change has been applied either way; `persistence` holds the write
/// failure, if any. It is reported here once and not retried.
#[derive(Debug)]
pub struct Mutation {
    pub index: usize,
    pub persistence: Option<PersistenceError>,
}

impl Mutation {
    pub fn is_persisted(&self) -> bool {
        self.persistence.is_none()
    }
}

/// What happened while reading the stored ledger at startup.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub warnings: Vec<String>,
    pub error: Option<PersistenceError>,
}

/// Owns the ordered record sequence and writes it through on every mutation.
///
/// Records are addressed by their current position. Insertion order is the only order.
pub struct LedgerStore {
    records: Vec<Record>,
    storage: Box<dyn StorageBackend>,
    revision: u64,
    load_report: LoadReport,
}

impl LedgerStore {
    /// Loads the stored ledger. Read or decode failures fall back to an empty ledger.
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let mut report = LoadReport::default();
        let records = match storage.load() {
            Ok(Some(bills)) => decode_bills(&bills, &mut report),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load stored bills, starting empty");
                report.error = Some(err);
                Vec::new()
            }
        };
        report.loaded = records.len();
        tracing::info!(
            records = records.len(),
            skipped = report.warnings.len(),
            "ledger opened"
        );
        Self {
            records,
            storage,
            revision: 0,
            load_report: report,
        }
    }

    /// Ledger backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::open(Box::new(KeyValueBackend::new(MemoryStore::new())))
    }

    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counter bumped by every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    /// Validates `candidate` and appends it.
    pub fn add(&mut self, candidate: &RecordDraft) -> Result<Mutation> {
        let record = candidate.validate()?;
        self.records.push(record);
        let index = self.records.len() - 1;
        tracing::debug!(index, len = self.records.len(), "record added");
        Ok(self.commit(index))
    }

    /// Replaces the record at `index` with the validated `candidate`.
    pub fn update(&mut self, index: usize, candidate: &RecordDraft) -> Result<Mutation> {
        self.check_index(index)?;
        let record = candidate.validate()?;
        self.records[index] = record;
        tracing::debug!(index, "record updated");
        Ok(self.commit(index))
    }

    /// Removes the record at `index`, keeping the relative order of the rest.
    pub fn remove(&mut self, index: usize) -> Result<(Record, Mutation)> {
        self.check_index(index)?;
        let removed = self.records.remove(index);
        tracing::debug!(index, len = self.records.len(), "record removed");
        Ok((removed, self.commit(index)))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(LedgerError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }

    fn commit(&mut self, index: usize) -> Mutation {
        self.revision += 1;
        let bills: Vec<StoredBill> = self.records.iter().map(StoredBill::from).collect();
        let persistence = match self.storage.save(&bills) {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(error = %err, "failed to persist ledger, keeping in-memory state");
                Some(err)
            }
        };
        Mutation { index, persistence }
    }
}

fn decode_bills(bills: &[StoredBill], report: &mut LoadReport) -> Vec<Record> {
    let mut records = Vec::with_capacity(bills.len());
    for (position, bill) in bills.iter().enumerate() {
        match bill.to_draft().validate() {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(position, error = %err, "skipping invalid stored bill");
                report
                    .warnings
                    .push(format!("stored bill #{} skipped: {}", position, err));
            }
        }
    }
    records
}
