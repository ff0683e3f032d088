use expense_tracker_core::models::expense::Expense;

const RULE_WIDTH: usize = 82;

/// Fixed-width listing: ordinal, date, category, amount.
///
/// Ordinals count the rows shown, starting at 1. Only the date part of the
/// creation timestamp is printed.
pub fn render(expenses: &[&Expense]) -> String {
    let mut lines = Vec::with_capacity(expenses.len() + 2);
    lines.push(row("ID", "Date", "Category", "Amount"));
    lines.push("-".repeat(RULE_WIDTH));

    for (i, expense) in expenses.iter().enumerate() {
        lines.push(row(
            &(i + 1).to_string(),
            &expense.date().to_string(),
            &expense.category,
            &expense.amount.to_string(),
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn row(ordinal: &str, date: &str, category: &str, amount: &str) -> String {
    format!("{ordinal:<5}{date:<15}{category:<20}{amount:<10}")
        .trim_end()
        .to_string()
}
