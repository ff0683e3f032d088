pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use config::Config;
use errors::CoreError;
use models::{
    expense::Expense,
    ledger::Ledger,
    summary::{CategoryTotal, ExpenseSummary, MonthlySummary},
};
use services::{expense_service::ExpenseService, summary_service::SummaryService};
use storage::manager::Store;

/// Main entry point for the Expense Tracker core library.
///
/// Holds the loaded collection and the store it came from. Every mutating
/// operation rewrites the whole file before returning; if the write fails the
/// in-memory collection is rolled back to its previous state.
#[must_use]
pub struct ExpenseTracker {
    config: Config,
    store: Store,
    ledger: Ledger,
    expense_service: ExpenseService,
    summary_service: SummaryService,
}

impl std::fmt::Debug for ExpenseTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseTracker")
            .field("data_file", &self.store.path())
            .field("expenses", &self.ledger.len())
            .field("currency", &self.config.currency)
            .finish()
    }
}

impl ExpenseTracker {
    /// Load the collection from the configured data file.
    /// A missing or unreadable file yields an empty tracker.
    pub fn open(config: Config) -> Result<Self, CoreError> {
        let store = Store::new(config.data_file.clone());
        let ledger = store.load()?;
        Ok(Self::build(config, store, ledger))
    }

    /// Write the current collection to the data file.
    pub fn save(&self) -> Result<(), CoreError> {
        self.store.save(&self.ledger)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ── Record Operations ───────────────────────────────────────────

    /// Record a new expense stamped with the current time and persist.
    pub fn add(&mut self, amount: Decimal, category: &str) -> Result<Expense, CoreError> {
        let expense = Expense::new(amount, category);
        let id = self.add_expense(expense)?;
        self.ledger
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::ExpenseNotFound(id.to_string()))
    }

    /// Append a fully built expense (e.g. with an explicit timestamp) and persist.
    pub fn add_expense(&mut self, expense: Expense) -> Result<Uuid, CoreError> {
        let id = expense.id;
        let previous = self.ledger.clone();
        self.expense_service.add_expense(&mut self.ledger, expense)?;
        self.persist_or_rollback(previous)?;
        info!(%id, "expense added");
        Ok(id)
    }

    /// Change amount and category of an existing expense and persist.
    /// Nothing is written when the id is unknown.
    pub fn update(
        &mut self,
        expense_id: Uuid,
        amount: Decimal,
        category: &str,
    ) -> Result<Expense, CoreError> {
        let previous = self.ledger.clone();
        let updated = self
            .expense_service
            .update_expense(&mut self.ledger, expense_id, amount, category)?;
        self.persist_or_rollback(previous)?;
        info!(id = %expense_id, "expense updated");
        Ok(updated)
    }

    /// Remove an expense by id and persist. Returns the removed record.
    pub fn delete(&mut self, expense_id: Uuid) -> Result<Expense, CoreError> {
        let previous = self.ledger.clone();
        let removed = self
            .expense_service
            .remove_expense(&mut self.ledger, expense_id)?;
        self.persist_or_rollback(previous)?;
        info!(id = %expense_id, "expense deleted");
        Ok(removed)
    }

    /// Empty the whole collection and persist. Returns how many were removed.
    pub fn clear(&mut self) -> Result<usize, CoreError> {
        let previous = self.ledger.clone();
        let removed = self.expense_service.clear(&mut self.ledger);
        self.persist_or_rollback(previous)?;
        info!(removed, "all expenses deleted");
        Ok(removed)
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// All expenses in stored (insertion) order.
    #[must_use]
    pub fn list(&self) -> &[Expense] {
        &self.ledger.expenses
    }

    /// Expenses in one category (case-insensitive), in stored order.
    #[must_use]
    pub fn list_by_category(&self, category: &str) -> Vec<&Expense> {
        self.summary_service.filter_by_category(&self.ledger, category)
    }

    #[must_use]
    pub fn get(&self, expense_id: Uuid) -> Option<&Expense> {
        self.ledger.get(expense_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Sum of every expense.
    pub fn summary(&self) -> Result<ExpenseSummary, CoreError> {
        self.summary_service.total(&self.ledger)
    }

    /// Per-category totals in first-seen order.
    pub fn category_totals(&self) -> Result<Vec<CategoryTotal>, CoreError> {
        self.summary_service.category_totals(&self.ledger)
    }

    /// Sum of expenses created in the named month, optionally of one year.
    pub fn monthly_summary(
        &self,
        month_name: &str,
        year: Option<i32>,
    ) -> Result<MonthlySummary, CoreError> {
        self.summary_service.monthly(&self.ledger, month_name, year)
    }

    /// Render an amount with the configured currency prefix, e.g. `Rs12.50`.
    #[must_use]
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!("{}{}", self.config.currency, amount)
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Write the mutated ledger; on failure restore `previous` so memory
    /// matches what is on disk.
    fn persist_or_rollback(&mut self, previous: Ledger) -> Result<(), CoreError> {
        if let Err(e) = self.save() {
            self.ledger = previous;
            return Err(e);
        }
        Ok(())
    }

    fn build(config: Config, store: Store, ledger: Ledger) -> Self {
        Self {
            config,
            store,
            ledger,
            expense_service: ExpenseService::new(),
            summary_service: SummaryService::new(),
        }
    }
}
