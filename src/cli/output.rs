use colored::Colorize;

use crate::config::Config;
use crate::core::services::{Entry, Totals};
use crate::core::{CommitOutcome, LedgerStore};
use crate::errors::PersistenceError;
use crate::ledger::{Direction, Record};

pub fn format_amount(amount: f64, config: &Config) -> String {
    format!(
        "{}{:.*}",
        config.currency_symbol, config.decimals, amount
    )
}

pub fn render_record(record: &Record, config: &Config) -> String {
    let sign = match record.direction {
        Direction::Income => "+",
        Direction::Expense => "-",
    };
    let amount = format!("{}{}", sign, format_amount(record.amount, config));
    let amount = match record.direction {
        Direction::Income => amount.green(),
        Direction::Expense => amount.red(),
    };
    let mut line = format!(
        "{}  {:<7}  {:<13}  {:>12}",
        record.date.format("%Y-%m-%d"),
        record.direction.as_str(),
        record.category.as_str(),
        amount
    );
    if !record.description.is_empty() {
        line.push_str("  ");
        line.push_str(&record.description);
    }
    line
}

pub fn render_entries(entries: &[Entry<'_>], config: &Config) -> String {
    if entries.is_empty() {
        return "No records.\n".to_string();
    }
    entries
        .iter()
        .map(|entry| format!("[{:>3}] {}\n", entry.index, render_record(entry.record, config)))
        .collect()
}

pub fn render_totals(totals: &Totals, config: &Config) -> String {
    format!(
        "income {}  expense {}  balance {}\n",
        format_amount(totals.income, config).green(),
        format_amount(totals.expense, config).red(),
        format_amount(totals.balance, config).bold()
    )
}

pub fn render_outcome(outcome: &CommitOutcome, store: &LedgerStore, config: &Config) -> String {
    let (verb, mutation) = match outcome {
        CommitOutcome::Added(mutation) => ("Added", mutation),
        CommitOutcome::Updated(mutation) => ("Updated", mutation),
        CommitOutcome::Stale { index } => {
            return format!("Record {} changed before the edit was saved.\n", index)
        }
    };
    let mut out = match store.get(mutation.index) {
        Some(record) => format!(
            "{} [{}] {}\n",
            verb,
            mutation.index,
            render_record(record, config)
        ),
        None => format!("{} [{}]\n", verb, mutation.index),
    };
    if let Some(err) = &mutation.persistence {
        out.push_str(&persistence_warning(err));
    }
    out
}

pub fn persistence_warning(err: &PersistenceError) -> String {
    format!(
        "{} change kept for this session but not saved: {}\n",
        "warning:".yellow(),
        err
    )
}
