use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::errors::ValidationError;

/// Whether a record brings money in or sends it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Income,
    Expense,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Income, Direction::Expense];

    /// Stable lowercase key used on the wire and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Income => "income",
            Direction::Expense => "expense",
        }
    }

    fn legacy_label(self) -> &'static str {
        match self {
            Direction::Income => "收入",
            Direction::Expense => "支出",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(ValidationError::MissingDirection);
        }
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(value) || d.legacy_label() == value)
            .ok_or_else(|| ValidationError::UnknownDirection(value.to_string()))
    }
}

/// Closed set of record categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Shopping,
    Transport,
    Dining,
    Entertainment,
    Bonus,
    Salary,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Shopping,
        Category::Transport,
        Category::Dining,
        Category::Entertainment,
        Category::Bonus,
        Category::Salary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Shopping => "shopping",
            Category::Transport => "transport",
            Category::Dining => "dining",
            Category::Entertainment => "entertainment",
            Category::Bonus => "bonus",
            Category::Salary => "salary",
        }
    }

    fn legacy_label(self) -> &'static str {
        match self {
            Category::Shopping => "购物",
            Category::Transport => "交通",
            Category::Dining => "餐饮",
            Category::Entertainment => "娱乐",
            Category::Bonus => "奖金",
            Category::Salary => "工资",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value) || c.legacy_label() == value)
            .ok_or_else(|| ValidationError::UnknownCategory(value.to_string()))
    }
}

/// One validated ledger entry.
///
/// Records carry no identifier; the ledger addresses them by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub direction: Direction,
    pub category: Category,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
}

impl Record {
    /// Builds a record, rejecting amounts that are negative or not finite.
    pub fn new(
        direction: Direction,
        category: Category,
        amount: f64,
        date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let amount = check_amount(amount)?;
        Ok(Self {
            direction,
            category,
            amount,
            date,
            description: String::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Amount with the sign of its direction: positive for income, negative for expense.
    pub fn signed_amount(&self) -> f64 {
        match self.direction {
            Direction::Income => self.amount,
            Direction::Expense => -self.amount,
        }
    }
}

impl AsRef<Record> for Record {
    fn as_ref(&self) -> &Record {
        self
    }
}

/// Parses user-supplied amount text with standard float parsing.
pub(crate) fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingAmount);
    }
    let parsed: f64 = value
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(value.to_string()))?;
    if !parsed.is_finite() {
        return Err(ValidationError::InvalidAmount(value.to_string()));
    }
    if parsed < 0.0 {
        return Err(ValidationError::NegativeAmount(value.to_string()));
    }
    Ok(normalize_zero(parsed))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingDate);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

fn check_amount(amount: f64) -> Result<f64, ValidationError> {
    if !amount.is_finite() {
        return Err(ValidationError::InvalidAmount(amount.to_string()));
    }
    if amount < 0.0 {
        return Err(ValidationError::NegativeAmount(amount.to_string()));
    }
    Ok(normalize_zero(amount))
}

// -0.0 compares equal to 0.0 but prints as "-0".
fn normalize_zero(amount: f64) -> f64 {
    if amount == 0.0 {
        0.0
    } else {
        amount
    }
}
