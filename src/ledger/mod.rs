//! Record model: directions, categories, validated records and editable drafts.

pub mod draft;
pub mod record;

pub use draft::{DraftField, RecordDraft};
pub use record::{Category, Direction, Record};
