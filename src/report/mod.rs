mod document;

pub(crate) use document::{render_document, write_document};

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Budget, Expense};
use crate::summary::Summary;
use crate::util::{format_amount, format_number};

const TITLE: &str = "*** Expense Summary for the Current Month ***";

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Expense Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Render the monthly summary. Output depends only on the arguments.
pub(crate) fn render_text(summary: &Summary, budget: Budget) -> String {
    let stars = "*".repeat(TITLE.len());
    let mut out = format!("{stars}\n{TITLE}\n{stars}\n\nExpenses By Category:\n");

    let rows = summary
        .amount_by_category
        .iter()
        .map(|(category, amount)| CategoryRow {
            category: category.clone(),
            amount: format_number(*amount),
        });
    let mut table = Table::new(rows);
    table
        .with(Style::ascii())
        .modify(Columns::single(1), Alignment::right());
    out.push_str(&table.to_string());
    out.push('\n');

    out.push_str(&format!("Your Budget was: {}\n", format_amount(budget.amount())));
    out.push_str(&format!("Total spent: {}\n", format_amount(summary.total_spent)));
    if summary.is_over_budget() {
        out.push_str(&format!(
            "You've exceeded your budget by {}\n",
            format_amount(summary.budget_left.abs())
        ));
    } else {
        out.push_str(&format!(
            "Remaining Budget: {}\n",
            format_amount(summary.budget_left)
        ));
    }
    out
}

/// Every expense grouped under its category, categories in first-appearance order.
pub(crate) fn render_listing(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut groups: Vec<(&str, Vec<&Expense>)> = Vec::new();
    for expense in expenses {
        let category = expense.category().as_str();
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, items)) => items.push(expense),
            None => groups.push((category, vec![expense])),
        }
    }

    let mut out = String::from("All Expenses:\n");
    for (category, items) in groups {
        let rows = items.iter().map(|e| ExpenseRow {
            name: e.name().to_string(),
            amount: format_amount(e.amount()),
        });
        let mut table = Table::new(rows);
        table.with(Style::ascii());
        out.push_str(&format!("\nCategory: {category}\n{table}\n"));
    }
    out
}
