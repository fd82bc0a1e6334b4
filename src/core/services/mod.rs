pub mod filter_service;
pub mod summary_service;

pub use filter_service::{CategoryFilter, DateBucket, Entry, FilterService, ViewFilter};
pub use summary_service::{SummaryService, Totals};
