use chrono::Month;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals over the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Sum of all amounts (zero when there are no expenses)
    pub total: Decimal,

    /// Number of expenses included in the total
    pub count: usize,
}

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category name as first recorded
    pub category: String,

    pub total: Decimal,

    pub count: usize,
}

/// Total spent in one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    /// The month that was matched
    pub month: Month,

    /// Restricts matching to one year; `None` matches that month in every year.
    pub year: Option<i32>,

    pub total: Decimal,

    pub count: usize,
}
