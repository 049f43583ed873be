#![allow(clippy::unwrap_used)]

use std::path::Path;

use rust_decimal_macros::dec;

use super::*;

fn test_config(dir: &Path) -> Config {
    Config {
        expense_file: dir.join("expense.csv"),
        report_file: dir.join("expense_report.pdf"),
        smtp: None,
    }
}

/// Feed `script` to a fresh session and return what it printed plus the final book.
fn run_script(dir: &Path, book: ExpenseBook, script: &str) -> (String, ExpenseBook) {
    let config = test_config(dir);
    let store = ExpenseStore::new(&config.expense_file);
    let mut out = Vec::new();
    let book = {
        let mut session = Session::new(&config, store, book, script.as_bytes(), &mut out);
        session.run().unwrap();
        session.book
    };
    (String::from_utf8(out).unwrap(), book)
}

fn sample_book() -> ExpenseBook {
    ExpenseBook::new(vec![
        Expense::new("Rent", dec!(800), Category::Housing).unwrap(),
        Expense::new("Groceries", dec!(150.25), Category::Food).unwrap(),
    ])
}

// ── MenuOption ────────────────────────────────────────────────

#[test]
fn test_menu_option_parse() {
    assert_eq!(MenuOption::parse("1"), Some(MenuOption::AddExpense));
    assert_eq!(MenuOption::parse(" 3 "), Some(MenuOption::Summarize));
    assert_eq!(MenuOption::parse("8"), Some(MenuOption::Exit));
    assert_eq!(MenuOption::parse("0"), None);
    assert_eq!(MenuOption::parse("9"), None);
    assert_eq!(MenuOption::parse("add"), None);
    assert_eq!(MenuOption::parse(""), None);
}

#[test]
fn test_menu_option_numbers_match_labels() {
    for (i, option) in MenuOption::all().iter().enumerate() {
        assert_eq!(MenuOption::parse(&(i + 1).to_string()), Some(*option));
        assert!(!option.label().is_empty());
    }
}

// ── Session ───────────────────────────────────────────────────

#[test]
fn test_budget_is_reprompted_until_valid() {
    let dir = tempfile::tempdir().unwrap();
    let (out, _) = run_script(dir.path(), ExpenseBook::default(), "abc\n-5\n1000\n8\n");
    assert_eq!(out.matches("Invalid input.").count(), 2);
    assert!(out.contains("Your monthly budget is $1,000.00"));
    assert!(out.contains("See you next time in Wallet!"));
}

#[test]
fn test_end_of_input_ends_session() {
    let dir = tempfile::tempdir().unwrap();
    let (out, _) = run_script(dir.path(), ExpenseBook::default(), "");
    assert!(out.contains("WELCOME TO WALLET!"));
    assert!(!out.contains("Available Operations:"));

    let (out, _) = run_script(dir.path(), ExpenseBook::default(), "100\n");
    assert!(out.contains("Available Operations:"));
    assert!(!out.contains("See you next time"));
}

#[test]
fn test_invalid_option() {
    let dir = tempfile::tempdir().unwrap();
    let (out, _) = run_script(dir.path(), ExpenseBook::default(), "100\n9\nx\n8\n");
    assert_eq!(out.matches("Invalid option. Please try again.").count(), 2);
}

#[test]
fn test_add_and_summarize() {
    let dir = tempfile::tempdir().unwrap();
    let (out, book) = run_script(
        dir.path(),
        ExpenseBook::default(),
        "1000\n1\nCoffee\n4.50\n1\n3\n8\n",
    );
    assert!(out.contains("ADDING AN EXPENSE"));
    assert!(out.contains("Expense added successfully."));
    assert!(out.contains("Total spent: $4.50"));
    assert!(out.contains("Remaining Budget: $995.50"));
    assert_eq!(book.len(), 1);
    assert_eq!(book.as_slice()[0].category(), &Category::Food);
}

#[test]
fn test_add_expense_reprompts_bad_fields() {
    let dir = tempfile::tempdir().unwrap();
    let script = "100\n1\n  \nLunch\nabc\n-3\n12\n42\nsnacks\n10\nPet Stuff\n8\n";
    let (out, book) = run_script(dir.path(), ExpenseBook::default(), script);

    assert!(out.contains("Expense name cannot be blank"));
    assert!(out.contains("'abc' is not a valid number"));
    assert!(out.contains("Amount cannot be negative"));
    assert!(out.contains("Invalid category number 42, expected 1-10"));
    assert!(out.contains("'snacks' is not a valid number"));
    assert!(out.contains("Enter the new category name: "));

    let expense = &book.as_slice()[0];
    assert_eq!(expense.name(), "Lunch");
    assert_eq!(expense.amount(), dec!(12));
    assert_eq!(expense.category(), &Category::Custom("Pet Stuff".into()));
}

#[test]
fn test_oversized_amounts_are_reprompted_and_summary_survives() {
    let dir = tempfile::tempdir().unwrap();
    let huge = "79228162514264337593543950335";
    let script = format!(
        "{huge}\n1000\n1\nA\n{huge}\n1000000000000\n1\n1\nB\n1000000000000\n1\n3\n8\n"
    );
    let (out, book) = run_script(dir.path(), ExpenseBook::default(), &script);

    assert_eq!(out.matches("is larger than the").count(), 2);
    assert_eq!(book.len(), 2);
    assert!(out.contains("Total spent: $2,000,000,000,000.00"));
    assert!(out.contains("You've exceeded your budget by $1,999,999,999,000.00"));
    assert!(out.contains("See you next time in Wallet!"));
}

#[test]
fn test_over_budget_summary() {
    let dir = tempfile::tempdir().unwrap();
    let (out, _) = run_script(dir.path(), sample_book(), "500\n3\n8\n");
    assert!(out.contains("Total spent: $950.25"));
    assert!(out.contains("You've exceeded your budget by $450.25"));
    assert!(!out.contains("Remaining Budget"));
}

#[test]
fn test_delete_from_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    let (out, _) = run_script(dir.path(), ExpenseBook::default(), "100\n4\n8\n");
    assert!(out.contains("No expenses to delete."));
}

#[test]
fn test_delete_absent_and_present() {
    let dir = tempfile::tempdir().unwrap();
    let (out, book) = run_script(dir.path(), sample_book(), "100\n4\nGym\n4\nrent\n8\n");
    assert!(out.contains("No expense with the name 'Gym' found."));
    assert!(out.contains("'Rent' deleted successfully."));
    assert_eq!(book.len(), 1);
    assert_eq!(book.as_slice()[0].name(), "Groceries");
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("rent"), "Rent");
    assert_eq!(capitalize("GROCERIES run"), "Groceries run");
    assert_eq!(capitalize("é"), "É");
    assert_eq!(capitalize(""), "");
}

#[test]
fn test_save_then_view() {
    let dir = tempfile::tempdir().unwrap();
    let (out, _) = run_script(dir.path(), sample_book(), "100\n5\n2\n5\n8\n");

    // Nothing saved yet on the first view
    let first_view = out.find("No expenses found.").unwrap();
    let saved = out.find("2 expenses saved to").unwrap();
    let listing = out.find("All Expenses:").unwrap();
    assert!(first_view < saved && saved < listing);
    assert!(out.contains("Category: Housing"));
    assert!(out.contains("$150.25"));

    let loaded = ExpenseStore::new(dir.path().join("expense.csv")).load().unwrap();
    assert_eq!(loaded, sample_book().as_slice());
}

#[test]
fn test_export_report() {
    let dir = tempfile::tempdir().unwrap();
    let (out, _) = run_script(dir.path(), sample_book(), "1000\n6\n8\n");
    assert!(out.contains("Report saved to"));
    let pdf = std::fs::read(dir.path().join("expense_report.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn test_email_without_smtp_is_reported_and_session_continues() {
    let dir = tempfile::tempdir().unwrap();
    let (out, _) = run_script(dir.path(), sample_book(), "1000\n7\n3\n8\n");
    assert!(out.contains("Error: Email is not configured"));
    assert!(out.contains("Remaining Budget: $49.75"));
    assert!(out.contains("See you next time in Wallet!"));
}

#[test]
fn test_failed_load_is_reported_and_session_continues() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("expense.csv"),
        "Expense Name,Amount,Category\nBroken,abc,Food\n",
    )
    .unwrap();
    let (out, _) = run_script(dir.path(), ExpenseBook::default(), "100\n5\n8\n");
    assert!(out.contains("Error: Line 2: failed to parse amount 'abc'"));
    assert!(out.contains("See you next time in Wallet!"));
}
