use anyhow::Result;
use rust_decimal::Decimal;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::delivery::parse_address;
use crate::error::{DeliveryError, ValidationError};
use crate::models::{check_ceiling, Budget, Category, Expense, ExpenseBook};
use crate::report;
use crate::store::ExpenseStore;
use crate::util::{format_amount, parse_decimal};

const RULE: &str = "===============================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuOption {
    AddExpense,
    SaveExpenses,
    Summarize,
    DeleteExpense,
    ViewExpenses,
    ExportReport,
    EmailReport,
    Exit,
}

impl MenuOption {
    pub(crate) fn all() -> &'static [MenuOption] {
        &[
            Self::AddExpense,
            Self::SaveExpenses,
            Self::Summarize,
            Self::DeleteExpense,
            Self::ViewExpenses,
            Self::ExportReport,
            Self::EmailReport,
            Self::Exit,
        ]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::SaveExpenses => "Save Expenses",
            Self::Summarize => "Summarize Expenses",
            Self::DeleteExpense => "Delete an Expense",
            Self::ViewExpenses => "View Expenses",
            Self::ExportReport => "Export Report (PDF)",
            Self::EmailReport => "Email Report",
            Self::Exit => "Exit",
        }
    }

    /// Options are chosen by their 1-based menu number.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        let n: usize = s.trim().parse().ok()?;
        Self::all().get(n.checked_sub(1)?).copied()
    }
}

pub(crate) fn as_menu(config: &Config) -> Result<()> {
    let store = ExpenseStore::new(&config.expense_file);
    let book = ExpenseBook::new(store.load()?);
    let stdin = io::stdin();
    let mut session = Session::new(config, store, book, stdin.lock(), io::stdout().lock());
    session.run()
}

/// One interactive run: a budget, the in-memory book, and the terminal.
pub(crate) struct Session<'a, R, W> {
    config: &'a Config,
    store: ExpenseStore,
    book: ExpenseBook,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub(crate) fn new(
        config: &'a Config,
        store: ExpenseStore,
        book: ExpenseBook,
        input: R,
        out: W,
    ) -> Self {
        Self {
            config,
            store,
            book,
            input,
            out,
        }
    }

    /// Loop until Exit or end of input. Failed operations are reported
    /// and the loop carries on.
    pub(crate) fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{RULE}\n      WELCOME TO WALLET!\n{RULE}")?;
        let Some(budget) = self.prompt_valid("Enter your monthly budget: ", Budget::parse)? else {
            return Ok(());
        };
        writeln!(self.out, "Your monthly budget is {}", format_amount(budget.amount()))?;

        loop {
            self.print_menu()?;
            let Some(choice) =
                self.read_line("Enter the number corresponding to the desired operation: ")?
            else {
                break;
            };
            match MenuOption::parse(&choice) {
                Some(MenuOption::Exit) => {
                    writeln!(self.out, "Exiting...\n\nSee you next time in Wallet!")?;
                    break;
                }
                Some(option) => {
                    if let Err(e) = self.perform(option, budget) {
                        tracing::warn!(option = option.label(), error = %e, "operation failed");
                        writeln!(self.out, "Error: {e:#}")?;
                    }
                }
                None => writeln!(self.out, "Invalid option. Please try again.")?,
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out, "\nAvailable Operations:")?;
        for (i, option) in MenuOption::all().iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, option.label())?;
        }
        Ok(())
    }

    fn perform(&mut self, option: MenuOption, budget: Budget) -> Result<()> {
        match option {
            MenuOption::AddExpense => self.add_expense(),
            MenuOption::SaveExpenses => self.save_expenses(),
            MenuOption::Summarize => {
                let text = super::summary_text(self.book.as_slice(), budget);
                writeln!(self.out, "{text}")?;
                Ok(())
            }
            MenuOption::DeleteExpense => self.delete_expense(),
            MenuOption::ViewExpenses => {
                let saved = self.store.load()?;
                write!(self.out, "{}", report::render_listing(&saved))?;
                Ok(())
            }
            MenuOption::ExportReport => {
                let path = &self.config.report_file;
                super::export_report(self.book.as_slice(), budget, path)?;
                writeln!(self.out, "Report saved to {}", path.display())?;
                Ok(())
            }
            MenuOption::EmailReport => self.email_report(budget),
            MenuOption::Exit => Ok(()),
        }
    }

    fn add_expense(&mut self) -> Result<()> {
        writeln!(self.out, "{RULE}\nADDING AN EXPENSE\n{RULE}")?;
        let Some(expense) = self.prompt_expense()? else {
            return Ok(());
        };
        tracing::debug!(%expense, "expense added");
        self.book.push(expense);
        writeln!(self.out, "Expense added successfully.")?;
        Ok(())
    }

    fn save_expenses(&mut self) -> Result<()> {
        writeln!(self.out, "Saving expenses...")?;
        self.store.save(self.book.as_slice())?;
        writeln!(
            self.out,
            "{} expenses saved to {}.",
            self.book.len(),
            self.store.path().display()
        )?;
        Ok(())
    }

    fn delete_expense(&mut self) -> Result<()> {
        writeln!(self.out, "{RULE}\nDELETING AN EXPENSE\n{RULE}")?;
        if self.book.is_empty() {
            writeln!(self.out, "No expenses to delete.")?;
            return Ok(());
        }
        let Some(name) = self.read_line("Enter the name of the expense to delete: ")? else {
            return Ok(());
        };
        match self.book.delete_by_name(&name) {
            0 => writeln!(self.out, "No expense with the name '{name}' found.")?,
            1 => writeln!(self.out, "'{}' deleted successfully.", capitalize(&name))?,
            n => writeln!(
                self.out,
                "'{}' deleted successfully ({n} expenses removed).",
                capitalize(&name)
            )?,
        }
        Ok(())
    }

    fn email_report(&mut self, budget: Budget) -> Result<()> {
        if self.config.smtp.is_none() {
            return Err(DeliveryError::NotConfigured(super::SMTP_SETTINGS).into());
        }
        let Some(recipient) = self.prompt_valid("Enter the recipient's email address: ", |s| {
            parse_address(s).map(|_| s.to_string())
        })?
        else {
            return Ok(());
        };
        writeln!(self.out, "Sending report to {recipient}...")?;
        super::email_report(self.config, self.book.as_slice(), budget, &recipient)?;
        writeln!(self.out, "Email sent successfully to {recipient}.")?;
        Ok(())
    }

    fn prompt_expense(&mut self) -> Result<Option<Expense>> {
        let Some(name) = self.prompt_valid("Enter Expense name: ", |s| {
            if s.is_empty() {
                Err(ValidationError::BlankName)
            } else {
                Ok(s.to_string())
            }
        })?
        else {
            return Ok(None);
        };

        let Some(amount) = self.prompt_valid("Enter Expense amount: ", |s| {
            let amount = parse_decimal(s)?;
            if amount < Decimal::ZERO {
                Err(ValidationError::NegativeAmount(amount))
            } else {
                check_ceiling(amount)
            }
        })?
        else {
            return Ok(None);
        };

        let Some(category) = self.prompt_category()? else {
            return Ok(None);
        };

        Ok(Some(Expense::new(&name, amount, category)?))
    }

    fn prompt_category(&mut self) -> Result<Option<Category>> {
        let custom = Category::custom_choice();
        loop {
            writeln!(self.out, "Select a category:")?;
            for (i, category) in Category::presets().iter().enumerate() {
                writeln!(self.out, "{}. {}", i + 1, category)?;
            }
            writeln!(self.out, "{custom}. Custom Category")?;

            let prompt = format!("Enter the number corresponding to the category (1-{custom}): ");
            let Some(choice) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            let custom_name = if choice.parse::<usize>().ok() == Some(custom) {
                match self.read_line("Enter the new category name: ")? {
                    Some(name) => Some(name),
                    None => return Ok(None),
                }
            } else {
                None
            };

            match Category::from_choice(&choice, custom_name.as_deref()) {
                Ok(category) => return Ok(Some(category)),
                Err(e) => writeln!(self.out, "Invalid input. {e}.")?,
            }
        }
    }

    /// Ask until `parse` accepts the answer. `None` means input ended.
    fn prompt_valid<T, E: Display>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.out, "Invalid input. {e}.")?,
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Upper-case the first letter and lower-case the rest: `"rent"` -> `"Rent"`.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
