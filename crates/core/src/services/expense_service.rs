use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::expense::Expense;
use crate::models::ledger::Ledger;

/// Record operations on an in-memory ledger: add, update, remove, clear.
///
/// Pure business logic — no I/O. Persisting is the caller's job.
pub struct ExpenseService;

impl ExpenseService {
    pub fn new() -> Self {
        Self
    }

    /// Append a new expense. Insertion order is kept.
    pub fn add_expense(&self, ledger: &mut Ledger, mut expense: Expense) -> Result<(), CoreError> {
        expense.category = Self::validate(expense.amount, &expense.category)?;

        if ledger.get(expense.id).is_some() {
            return Err(CoreError::ValidationError(format!(
                "Duplicate expense id {}",
                expense.id
            )));
        }

        ledger.expenses.push(expense);
        Ok(())
    }

    /// Overwrite amount and category of an existing expense.
    /// `id` and `created_at` are left untouched.
    pub fn update_expense(
        &self,
        ledger: &mut Ledger,
        expense_id: Uuid,
        amount: Decimal,
        category: &str,
    ) -> Result<Expense, CoreError> {
        let idx = ledger
            .position(expense_id)
            .ok_or_else(|| CoreError::ExpenseNotFound(expense_id.to_string()))?;

        let category = Self::validate(amount, category)?;

        let expense = &mut ledger.expenses[idx];
        expense.amount = amount;
        expense.category = category;
        Ok(expense.clone())
    }

    /// Remove an expense by id, returning it.
    pub fn remove_expense(&self, ledger: &mut Ledger, expense_id: Uuid) -> Result<Expense, CoreError> {
        let idx = ledger
            .position(expense_id)
            .ok_or_else(|| CoreError::ExpenseNotFound(expense_id.to_string()))?;
        Ok(ledger.expenses.remove(idx))
    }

    /// Drop every expense. Returns how many were removed.
    pub fn clear(&self, ledger: &mut Ledger) -> usize {
        let removed = ledger.expenses.len();
        ledger.expenses.clear();
        removed
    }

    /// Rules:
    /// - Amount must be positive
    /// - Category must not be blank
    ///
    /// Returns the trimmed category.
    fn validate(amount: Decimal, category: &str) -> Result<String, CoreError> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::ValidationError(
                "Expense amount must be positive".into(),
            ));
        }

        let category = category.trim();
        if category.is_empty() {
            return Err(CoreError::ValidationError(
                "Expense category must not be empty".into(),
            ));
        }

        Ok(category.to_string())
    }
}

impl Default for ExpenseService {
    fn default() -> Self {
        Self::new()
    }
}
