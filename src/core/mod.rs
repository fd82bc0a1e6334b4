//! Ledger state, edit sessions and the pure view services built on top of them.

pub mod edit_session;
pub mod ledger_store;
pub mod preferences;
pub mod services;

pub use edit_session::{CommitOutcome, EditSession, SessionState};
pub use ledger_store::{LedgerStore, LoadReport, Mutation};
pub use preferences::{Theme, ThemeService};
