use std::path::PathBuf;

use clap::{Parser, Subcommand};
use expense_tracker_core::config::{Config, DEFAULT_CURRENCY, DEFAULT_DATA_FILE};
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "expense-tracker", version, about = "Expense Tracker CLI")]
pub struct Cli {
    /// Path to the expense data file
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE", default_value = DEFAULT_DATA_FILE)]
    pub file: PathBuf,

    /// Currency prefix shown in front of amounts
    #[arg(long, global = true, env = "EXPENSE_TRACKER_CURRENCY", default_value = DEFAULT_CURRENCY)]
    pub currency: String,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(self.file.clone()).with_currency(self.currency.clone())
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a new expense
    Add {
        /// Amount of the expense
        #[arg(allow_hyphen_values = true)]
        amount: Decimal,

        /// Category of the expense
        category: String,
    },

    /// Update an expense
    Update {
        /// ID of the expense to update
        expense_id: Uuid,

        /// Amount of the expense
        #[arg(allow_hyphen_values = true)]
        amount: Decimal,

        /// Category of the expense
        category: String,
    },

    /// Delete an expense
    Delete {
        /// ID of the expense to delete
        expense_id: Uuid,
    },

    /// View all expenses
    #[command(name = "expense_list")]
    ExpenseList {
        /// Only show expenses in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// View expense summary
    #[command(name = "expense_summary")]
    ExpenseSummary {
        /// Also print a total per category
        #[arg(long)]
        by_category: bool,
    },

    /// View monthly expense
    #[command(name = "monthly_expense")]
    MonthlyExpense {
        /// Month for which to view the expense (e.g. "January")
        month: String,

        /// Only count expenses from this year
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Delete all expenses
    #[command(name = "bulk_delete")]
    BulkDelete {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
