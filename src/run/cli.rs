use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use crate::models::Budget;
use crate::report;
use crate::store::ExpenseStore;

pub(crate) fn as_cli(args: &[String], config: &Config) -> Result<()> {
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };
    match command.as_str() {
        "summary" | "s" => cli_summary(&args[2..], config),
        "view" | "v" => cli_view(config),
        "export" => cli_export(&args[2..], config),
        "email" => cli_email(&args[2..], config),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("wallet {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Wallet - track expenses against a monthly budget");
    println!();
    println!("Usage: wallet [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch the interactive menu");
    println!("  summary <budget>              Print the summary of saved expenses");
    println!("  view                          List saved expenses by category");
    println!("  export <budget> [path]        Write the summary as a PDF");
    println!("  email <budget> <recipient>    Write the PDF and email it");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment:");
    println!("  WALLET_FILE, WALLET_REPORT    Expense CSV and report PDF locations");
    println!("  WALLET_SMTP_HOST, WALLET_SMTP_PORT, WALLET_SMTP_USER,");
    println!("  WALLET_SMTP_PASSWORD, WALLET_SENDER");
}

fn budget_arg(args: &[String], usage: &str) -> Result<Budget> {
    let raw = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("Usage: {usage}"))?;
    Budget::parse(raw).with_context(|| format!("Invalid budget '{raw}'"))
}

fn cli_summary(args: &[String], config: &Config) -> Result<()> {
    let budget = budget_arg(args, "wallet summary <budget>")?;
    let expenses = ExpenseStore::new(&config.expense_file).load()?;
    print!("{}", super::summary_text(&expenses, budget));
    Ok(())
}

fn cli_view(config: &Config) -> Result<()> {
    let expenses = ExpenseStore::new(&config.expense_file).load()?;
    print!("{}", report::render_listing(&expenses));
    Ok(())
}

fn cli_export(args: &[String], config: &Config) -> Result<()> {
    let budget = budget_arg(args, "wallet export <budget> [path]")?;
    let output_path = args
        .get(1)
        .map(|a| PathBuf::from(shellexpand(a)))
        .unwrap_or_else(|| config.report_file.clone());

    let expenses = ExpenseStore::new(&config.expense_file).load()?;
    super::export_report(&expenses, budget, &output_path)?;
    println!("Report saved to {}", output_path.display());
    Ok(())
}

fn cli_email(args: &[String], config: &Config) -> Result<()> {
    let usage = "wallet email <budget> <recipient>";
    let budget = budget_arg(args, usage)?;
    let recipient = args
        .get(1)
        .ok_or_else(|| anyhow::anyhow!("Usage: {usage}"))?;

    let expenses = ExpenseStore::new(&config.expense_file).load()?;
    super::email_report(config, &expenses, budget, recipient)?;
    println!("Email sent successfully to {recipient}.");
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
