//! Command-line front end: a thin collaborator that drives the ledger core.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use thiserror::Error;

use crate::clock::Clock;
use crate::config::{ConfigError, HOME_ENV};
use crate::core::services::{CategoryFilter, DateBucket};
use crate::errors::{LedgerError, PersistenceError};

pub use commands::Context;

/// bills: record income and expenses and browse them by period and category.
#[derive(Debug, Parser, Clone)]
#[command(name = "bills", version)]
pub struct Args {
    /// Directory holding configuration and ledger data. Defaults to ~/.bill_core
    #[arg(long, global = true, env = HOME_ENV)]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a record. Missing fields are reported, the date defaults to today.
    Add(RecordArgs),
    /// List records matching a period and category, with totals.
    List(ViewArgs),
    /// Show income, expense and balance for a period and category.
    Summary(ViewArgs),
    /// Replace fields of the record at INDEX (as shown by `list`).
    Edit(EditArgs),
    /// Delete the record at INDEX.
    Remove {
        index: usize,
    },
    /// Show or change the theme: light, dark or toggle.
    Theme {
        value: Option<String>,
    },
    /// Show or change configuration.
    Config(ConfigArgs),
}

/// Record fields as entered by the user.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct RecordArgs {
    /// income or expense
    #[arg(long = "type")]
    pub direction: Option<String>,
    /// shopping, transport, dining, entertainment, bonus or salary
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub amount: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long = "desc")]
    pub description: Option<String>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ViewArgs {
    /// all, today, month or year. Defaults to the configured period.
    #[arg(long)]
    pub period: Option<DateBucket>,
    /// A category name, or all.
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct EditArgs {
    pub index: usize,
    #[command(flatten)]
    pub fields: RecordArgs,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ConfigArgs {
    #[arg(long)]
    pub currency: Option<String>,
    #[arg(long)]
    pub period: Option<DateBucket>,
    #[arg(long)]
    pub decimals: Option<usize>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] PersistenceError),
    #[error("Invalid input: {0}")]
    Input(String),
}

/// Runs one command and returns the text to print.
pub fn run(args: Args, clock: &dyn Clock) -> Result<String, CliError> {
    let home = crate::config::app_data_dir(args.home);
    let mut ctx = Context::open(&home)?;
    tracing::debug!(home = %home.display(), command = ?args.command, "running command");
    match args.command {
        Command::Add(fields) => commands::add(&mut ctx, &fields, clock),
        Command::List(view) => commands::list(&ctx, &view, clock),
        Command::Summary(view) => commands::summary(&ctx, &view, clock),
        Command::Edit(edit) => commands::edit(&mut ctx, edit.index, &edit.fields, clock),
        Command::Remove { index } => commands::remove(&mut ctx, index),
        Command::Theme { value } => commands::theme(&ctx, value.as_deref()),
        Command::Config(update) => commands::config(&mut ctx, &update),
    }
}
