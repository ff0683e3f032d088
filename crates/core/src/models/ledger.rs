use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::expense::Expense;

/// The full expense collection. Everything in here is written to the
/// data file as one unit on every mutation.
///
/// Insertion order is preserved; listings show expenses in the order they
/// were added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    /// All recorded expenses, oldest first
    pub expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Look up an expense by id.
    pub fn get(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Index of the expense with the given id, if present.
    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }
}

impl From<Vec<Expense>> for Ledger {
    fn from(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }
}
