use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::CommandFactory;
use expense_tracker_core::errors::CoreError;
use expense_tracker_core::models::expense::Expense;
use expense_tracker_core::ExpenseTracker;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::cli::{Cli, Commands};
use crate::prompt;
use crate::table;

/// Dispatch one parsed invocation. Console input is only read by `bulk_delete`.
pub fn run<R: BufRead, W: Write>(cli: Cli, input: &mut R, out: &mut W) -> Result<()> {
    let Some(command) = cli.command.as_ref() else {
        writeln!(out, "{}", Cli::command().render_help())?;
        return Ok(());
    };

    let mut tracker = ExpenseTracker::open(cli.config())
        .with_context(|| format!("failed to open {}", cli.file.display()))?;

    match command {
        Commands::Add { amount, category } => cmd_add(&mut tracker, *amount, category, out),
        Commands::Update {
            expense_id,
            amount,
            category,
        } => cmd_update(&mut tracker, *expense_id, *amount, category, out),
        Commands::Delete { expense_id } => cmd_delete(&mut tracker, *expense_id, out),
        Commands::ExpenseList { category } => cmd_list(&tracker, category.as_deref(), out),
        Commands::ExpenseSummary { by_category } => cmd_summary(&tracker, *by_category, out),
        Commands::MonthlyExpense { month, year } => cmd_monthly(&tracker, month, *year, out),
        Commands::BulkDelete { yes } => cmd_bulk_delete(&mut tracker, *yes, input, out),
    }
}

fn cmd_add<W: Write>(
    tracker: &mut ExpenseTracker,
    amount: Decimal,
    category: &str,
    out: &mut W,
) -> Result<()> {
    let expense = tracker.add(amount, category)?;
    writeln!(
        out,
        "Expense added : {} for {}",
        tracker.format_amount(expense.amount),
        expense.category
    )?;
    Ok(())
}

fn cmd_update<W: Write>(
    tracker: &mut ExpenseTracker,
    expense_id: Uuid,
    amount: Decimal,
    category: &str,
    out: &mut W,
) -> Result<()> {
    if let Some(expense) = found(tracker.update(expense_id, amount, category), out)? {
        writeln!(
            out,
            "Expense updated : {} for {}",
            tracker.format_amount(expense.amount),
            expense.category
        )?;
    }
    Ok(())
}

fn cmd_delete<W: Write>(tracker: &mut ExpenseTracker, expense_id: Uuid, out: &mut W) -> Result<()> {
    if let Some(expense) = found(tracker.delete(expense_id), out)? {
        writeln!(
            out,
            "Expense deleted : {} for {}",
            tracker.format_amount(expense.amount),
            expense.category
        )?;
    }
    Ok(())
}

fn cmd_list<W: Write>(tracker: &ExpenseTracker, category: Option<&str>, out: &mut W) -> Result<()> {
    let expenses: Vec<&Expense> = match category {
        Some(category) => tracker.list_by_category(category),
        None => tracker.list().iter().collect(),
    };
    write!(out, "{}", table::render(&expenses))?;
    Ok(())
}

fn cmd_summary<W: Write>(tracker: &ExpenseTracker, by_category: bool, out: &mut W) -> Result<()> {
    let summary = tracker.summary()?;
    writeln!(out, "Total expenses=: {}", tracker.format_amount(summary.total))?;

    if by_category {
        for entry in tracker.category_totals()? {
            writeln!(
                out,
                "  {:<20}{}",
                entry.category,
                tracker.format_amount(entry.total)
            )?;
        }
    }
    Ok(())
}

fn cmd_monthly<W: Write>(
    tracker: &ExpenseTracker,
    month: &str,
    year: Option<i32>,
    out: &mut W,
) -> Result<()> {
    match tracker.monthly_summary(month, year) {
        Ok(summary) => {
            writeln!(
                out,
                "Total expenses for {} = {}",
                month,
                tracker.format_amount(summary.total)
            )?;
        }
        Err(CoreError::InvalidMonth(_)) => writeln!(out, "Invalid month name")?,
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn cmd_bulk_delete<R: BufRead, W: Write>(
    tracker: &mut ExpenseTracker,
    skip_prompt: bool,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let confirmed = skip_prompt
        || prompt::confirm(input, out, "Are you sure you want to delete all expenses?")
            .context("failed to read confirmation")?;

    if confirmed {
        tracker.clear()?;
        writeln!(out, "All expenses deleted")?;
    } else {
        writeln!(out, "Bulk delete operation canceled")?;
    }
    Ok(())
}

/// Turn a not-found error into a console message; other errors propagate.
fn found<W: Write>(result: Result<Expense, CoreError>, out: &mut W) -> Result<Option<Expense>> {
    match result {
        Ok(expense) => Ok(Some(expense)),
        Err(CoreError::ExpenseNotFound(_)) => {
            writeln!(out, "Expense not found")?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
