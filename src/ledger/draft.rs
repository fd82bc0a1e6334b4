//! The editable form object that sits between user input and a validated [`Record`].

use chrono::NaiveDate;

use super::record::{parse_amount, parse_date, Category, Direction, Record};
use crate::errors::ValidationError;

/// Fields of a [`RecordDraft`] that can be replaced individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Direction,
    Category,
    Amount,
    Date,
    Description,
}

/// Raw, unvalidated record contents as entered in a form.
///
/// Every field is kept as text so invalid input survives a failed submit and can be
/// corrected in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub direction: String,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

impl RecordDraft {
    /// Empty form with the date preset to `today`.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Direction => &self.direction,
            DraftField::Category => &self.category,
            DraftField::Amount => &self.amount,
            DraftField::Date => &self.date,
            DraftField::Description => &self.description,
        }
    }

    /// Replaces a single field, leaving the others untouched.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Direction => self.direction = value,
            DraftField::Category => self.category = value,
            DraftField::Amount => self.amount = value,
            DraftField::Date => self.date = value,
            DraftField::Description => self.description = value,
        }
    }

    pub fn with(mut self, field: DraftField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Validates the draft, reporting the first violated constraint in field order.
    pub fn validate(&self) -> Result<Record, ValidationError> {
        let direction: Direction = self.direction.parse()?;
        let category: Category = self.category.parse()?;
        let amount = parse_amount(&self.amount)?;
        let date = parse_date(&self.date)?;
        Ok(Record {
            direction,
            category,
            amount,
            date,
            description: self.description.clone(),
        })
    }
}

impl From<&Record> for RecordDraft {
    fn from(record: &Record) -> Self {
        Self {
            direction: record.direction.as_str().to_string(),
            category: record.category.as_str().to_string(),
            amount: record.amount.to_string(),
            date: record.date.format("%Y-%m-%d").to_string(),
            description: record.description.clone(),
        }
    }
}

impl From<Record> for RecordDraft {
    fn from(record: Record) -> Self {
        Self::from(&record)
    }
}

impl TryFrom<&RecordDraft> for Record {
    type Error = ValidationError;

    fn try_from(draft: &RecordDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}
