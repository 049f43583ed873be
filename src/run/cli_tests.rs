#![allow(clippy::unwrap_used)]

use std::path::Path;

use rust_decimal_macros::dec;

use super::*;
use crate::config::SmtpConfig;
use crate::models::{Category, Expense};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn test_config(dir: &Path) -> Config {
    Config {
        expense_file: dir.join("expense.csv"),
        report_file: dir.join("expense_report.pdf"),
        smtp: None,
    }
}

fn seed(config: &Config) {
    ExpenseStore::new(&config.expense_file)
        .save(&[Expense::new("Books", dec!(34), Category::WorkEducation).unwrap()])
        .unwrap();
}

// ── dispatch ──────────────────────────────────────────────────

#[test]
fn test_no_command_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    assert!(as_cli(&[], &config).is_ok());
    assert!(as_cli(&args(&["wallet"]), &config).is_ok());
}

// ── argument helpers ──────────────────────────────────────────

#[test]
fn test_budget_arg() {
    let budget = budget_arg(&args(&["1,500"]), "usage").unwrap();
    assert_eq!(budget.amount(), dec!(1500));
}

#[test]
fn test_budget_arg_missing() {
    let err = budget_arg(&[], "wallet summary <budget>").unwrap_err();
    assert_eq!(err.to_string(), "Usage: wallet summary <budget>");
}

#[test]
fn test_budget_arg_invalid() {
    let err = budget_arg(&args(&["-20"]), "usage").unwrap_err();
    assert_eq!(err.to_string(), "Invalid budget '-20'");
}

#[test]
fn test_shellexpand_plain_path() {
    assert_eq!(shellexpand("/tmp/report.pdf"), "/tmp/report.pdf");
    assert_eq!(shellexpand("report.pdf"), "report.pdf");
}

#[test]
fn test_shellexpand_home() {
    let expanded = shellexpand("~/report.pdf");
    assert!(!expanded.starts_with('~'));
    assert!(expanded.ends_with("/report.pdf"));
}

// ── commands ──────────────────────────────────────────────────

#[test]
fn test_unknown_command() {
    let dir = tempfile::tempdir().unwrap();
    let err = as_cli(&args(&["wallet", "frobnicate"]), &test_config(dir.path())).unwrap_err();
    assert_eq!(err.to_string(), "Unknown command: frobnicate");
}

#[test]
fn test_help_and_version() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    assert!(as_cli(&args(&["wallet", "help"]), &config).is_ok());
    assert!(as_cli(&args(&["wallet", "-V"]), &config).is_ok());
}

#[test]
fn test_summary_and_view() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    seed(&config);
    assert!(as_cli(&args(&["wallet", "summary", "100"]), &config).is_ok());
    assert!(as_cli(&args(&["wallet", "view"]), &config).is_ok());
}

#[test]
fn test_summary_without_file_is_empty_not_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(as_cli(&args(&["wallet", "s", "100"]), &test_config(dir.path())).is_ok());
}

#[test]
fn test_export_to_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    seed(&config);
    let target = dir.path().join("custom.pdf");
    as_cli(
        &args(&["wallet", "export", "100", target.to_str().unwrap()]),
        &config,
    )
    .unwrap();
    assert!(std::fs::read(&target).unwrap().starts_with(b"%PDF"));
    assert!(!config.report_file.exists());
}

#[test]
fn test_export_to_default_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    as_cli(&args(&["wallet", "export", "100"]), &config).unwrap();
    assert!(config.report_file.exists());
}

#[test]
fn test_email_requires_recipient() {
    let dir = tempfile::tempdir().unwrap();
    let err = as_cli(&args(&["wallet", "email", "100"]), &test_config(dir.path())).unwrap_err();
    assert!(err.to_string().starts_with("Usage: wallet email"));
}

#[test]
fn test_email_not_configured() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let err = as_cli(&args(&["wallet", "email", "100", "me@example.com"]), &config).unwrap_err();
    assert!(err.to_string().starts_with("Email is not configured"));
    assert!(!config.report_file.exists());
}

#[test]
fn test_email_invalid_recipient_fails_before_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path());
    config.smtp = Some(SmtpConfig {
        host: "smtp.example.com".into(),
        port: 465,
        username: "me@example.com".into(),
        password: "pw".into(),
        sender: "me@example.com".into(),
    });
    let err = as_cli(&args(&["wallet", "email", "100", "not-an-address"]), &config).unwrap_err();
    assert!(err.to_string().starts_with("Invalid email address"));
    assert!(!config.report_file.exists());
}
