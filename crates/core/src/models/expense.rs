use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, SubsecRound};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recorded expense.
///
/// `created_at` is local wall-clock time captured when the record is created.
/// Updates only ever touch `amount` and `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier. Older files store it under `expense_id`.
    #[serde(alias = "expense_id")]
    pub id: Uuid,

    /// Amount spent (always positive)
    pub amount: Decimal,

    /// Free-text category, e.g. "food" or "rent"
    pub category: String,

    /// Creation timestamp (date and time, no timezone)
    pub created_at: NaiveDateTime,
}

impl Expense {
    /// Create an expense stamped with the current local time.
    pub fn new(amount: Decimal, category: impl Into<String>) -> Self {
        // Microsecond precision keeps the stored timestamp short and stable.
        let now = Local::now().naive_local().trunc_subsecs(6);
        Self::with_timestamp(amount, category, now)
    }

    /// Create an expense with an explicit creation timestamp.
    pub fn with_timestamp(
        amount: Decimal,
        category: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category: category.into(),
            created_at,
        }
    }

    /// Calendar date of creation, without the time component.
    pub fn date(&self) -> NaiveDate {
        self.created_at.date()
    }

    /// Month of creation, 1-based (January = 1).
    pub fn month(&self) -> u32 {
        self.created_at.month()
    }

    pub fn year(&self) -> i32 {
        self.created_at.year()
    }
}
