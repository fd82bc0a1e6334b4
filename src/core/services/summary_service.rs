use crate::ledger::{Direction, Record};

/// Income, expense and their difference over a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Sums amounts by direction. Empty input yields all zeros.
    pub fn totals<I>(records: I) -> Totals
    where
        I: IntoIterator,
        I::Item: AsRef<Record>,
    {
        let (income, expense) = records
            .into_iter()
            .fold((0.0, 0.0), |(income, expense), item| {
                let record = item.as_ref();
                match record.direction {
                    Direction::Income => (income + record.amount, expense),
                    Direction::Expense => (income, expense + record.amount),
                }
            });
        Totals {
            income,
            expense,
            balance: income - expense,
        }
    }
}
