#![allow(dead_code)]

use bill_core::{DraftField, FixedClock, LedgerStore, Record, RecordDraft};
use chrono::NaiveDate;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

pub fn clock_at(y: i32, m: u32, d: u32) -> FixedClock {
    FixedClock(day(y, m, d))
}

/// Builds a fully populated draft from plain strings.
pub fn draft(direction: &str, category: &str, amount: &str, date: &str, desc: &str) -> RecordDraft {
    RecordDraft::default()
        .with(DraftField::Direction, direction)
        .with(DraftField::Category, category)
        .with(DraftField::Amount, amount)
        .with(DraftField::Date, date)
        .with(DraftField::Description, desc)
}

/// In-memory store pre-filled with the given drafts.
pub fn store_with(drafts: &[RecordDraft]) -> LedgerStore {
    let mut store = LedgerStore::in_memory();
    for candidate in drafts {
        store.add(candidate).expect("seed draft must be valid");
    }
    store
}

/// A mixed ledger spanning several days, months and years.
pub fn sample_records() -> Vec<Record> {
    let drafts = [
        draft("income", "salary", "5000", "2024-01-15", ""),
        draft("expense", "shopping", "120.5", "2024-06-01", "shoes"),
        draft("expense", "dining", "32", "2024-06-01", "lunch"),
        draft("expense", "transport", "4", "2024-06-20", ""),
        draft("income", "bonus", "800", "2023-12-31", "year end"),
        draft("expense", "entertainment", "60", "2024-05-31", "cinema"),
        draft("expense", "shopping", "15", "2025-06-01", ""),
    ];
    drafts
        .iter()
        .map(|d| d.validate().expect("sample draft must be valid"))
        .collect()
}
