//! Derives the visible list from the full ledger and two independent selectors.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ledger::{Category, Record};

/// Named time window applied to a record's date, relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateBucket {
    #[default]
    All,
    Today,
    ThisMonth,
    ThisYear,
}

impl DateBucket {
    pub fn matches(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateBucket::All => true,
            DateBucket::Today => date == today,
            DateBucket::ThisMonth => date.year() == today.year() && date.month() == today.month(),
            DateBucket::ThisYear => date.year() == today.year(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DateBucket::All => "all",
            DateBucket::Today => "today",
            DateBucket::ThisMonth => "month",
            DateBucket::ThisYear => "year",
        }
    }
}

impl fmt::Display for DateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateBucket {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(DateBucket::All),
            "today" | "day" => Ok(DateBucket::Today),
            "month" | "this-month" => Ok(DateBucket::ThisMonth),
            "year" | "this-year" => Ok(DateBucket::ThisYear),
            other => Err(format!(
                "unknown period `{}` (expected all, today, month or year)",
                other
            )),
        }
    }
}

/// Category selector. An empty selector means every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        category.map_or(CategoryFilter::All, CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        value
            .parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|err| err.to_string())
    }
}

/// Both selectors as owned by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewFilter {
    pub date: DateBucket,
    pub category: CategoryFilter,
}

impl ViewFilter {
    pub fn new(date: DateBucket, category: CategoryFilter) -> Self {
        Self { date, category }
    }

    pub fn matches(&self, record: &Record, today: NaiveDate) -> bool {
        self.date.matches(record.date, today) && self.category.matches(record.category)
    }
}

/// A record in a filtered view, paired with its position in the ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<'a> {
    pub index: usize,
    pub record: &'a Record,
}

impl AsRef<Record> for Entry<'_> {
    fn as_ref(&self) -> &Record {
        self.record
    }
}

pub struct FilterService;

impl FilterService {
    /// Every record, in ledger order.
    pub fn entries(records: &[Record]) -> Vec<Entry<'_>> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| Entry { index, record })
            .collect()
    }

    pub fn by_date<'a, I>(entries: I, bucket: DateBucket, today: NaiveDate) -> Vec<Entry<'a>>
    where
        I: IntoIterator<Item = Entry<'a>>,
    {
        entries
            .into_iter()
            .filter(|entry| bucket.matches(entry.record.date, today))
            .collect()
    }

    pub fn by_category<'a, I>(entries: I, category: CategoryFilter) -> Vec<Entry<'a>>
    where
        I: IntoIterator<Item = Entry<'a>>,
    {
        entries
            .into_iter()
            .filter(|entry| category.matches(entry.record.category))
            .collect()
    }

    /// Records matching both selectors, in their original order.
    pub fn apply<'a>(
        records: &'a [Record],
        filter: &ViewFilter,
        today: NaiveDate,
    ) -> Vec<Entry<'a>> {
        let dated = Self::by_date(Self::entries(records), filter.date, today);
        Self::by_category(dated, filter.category)
    }
}
