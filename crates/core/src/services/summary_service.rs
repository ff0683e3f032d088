use chrono::Month;
use rust_decimal::Decimal;

use crate::errors::CoreError;
use crate::models::expense::Expense;
use crate::models::ledger::Ledger;
use crate::models::summary::{CategoryTotal, ExpenseSummary, MonthlySummary};

/// Read-only queries and aggregation over a ledger.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Total of every expense.
    pub fn total(&self, ledger: &Ledger) -> Result<ExpenseSummary, CoreError> {
        Self::summarize(ledger.expenses.iter())
    }

    /// Per-category totals, in the order each category first appears.
    /// Categories are grouped case-insensitively; the first spelling wins.
    pub fn category_totals(&self, ledger: &Ledger) -> Result<Vec<CategoryTotal>, CoreError> {
        let mut totals: Vec<CategoryTotal> = Vec::new();

        for expense in &ledger.expenses {
            match totals
                .iter_mut()
                .find(|t| t.category.eq_ignore_ascii_case(&expense.category))
            {
                Some(entry) => {
                    entry.total = Self::checked_sum(entry.total, expense.amount)?;
                    entry.count += 1;
                }
                None => totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                    count: 1,
                }),
            }
        }

        Ok(totals)
    }

    /// Total for one calendar month, given by its English name.
    ///
    /// Without `year` every year's occurrence of the month is included.
    pub fn monthly(
        &self,
        ledger: &Ledger,
        month_name: &str,
        year: Option<i32>,
    ) -> Result<MonthlySummary, CoreError> {
        let month = Self::parse_month(month_name)?;
        let number = month.number_from_month();

        let ExpenseSummary { total, count } = Self::summarize(
            ledger
                .expenses
                .iter()
                .filter(|e| e.month() == number)
                .filter(|e| year.map_or(true, |y| e.year() == y)),
        )?;

        Ok(MonthlySummary {
            month,
            year,
            total,
            count,
        })
    }

    /// Expenses whose category matches `category` (case-insensitive), in stored order.
    pub fn filter_by_category<'a>(&self, ledger: &'a Ledger, category: &str) -> Vec<&'a Expense> {
        let wanted = category.trim();
        ledger
            .expenses
            .iter()
            .filter(|e| e.category.eq_ignore_ascii_case(wanted))
            .collect()
    }

    /// Match a full English month name, ignoring case. Abbreviations are rejected.
    pub fn parse_month(name: &str) -> Result<Month, CoreError> {
        let wanted = name.trim();
        (1u8..=12)
            .filter_map(|n| Month::try_from(n).ok())
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::InvalidMonth(name.to_string()))
    }

    fn summarize<'a>(
        expenses: impl Iterator<Item = &'a Expense>,
    ) -> Result<ExpenseSummary, CoreError> {
        let mut total = Decimal::ZERO;
        let mut count = 0;
        for expense in expenses {
            total = Self::checked_sum(total, expense.amount)?;
            count += 1;
        }
        Ok(ExpenseSummary { total, count })
    }

    fn checked_sum(a: Decimal, b: Decimal) -> Result<Decimal, CoreError> {
        a.checked_add(b).ok_or(CoreError::AmountOverflow)
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
