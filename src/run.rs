mod cli;
mod menu;

pub(crate) use cli::as_cli;
pub(crate) use menu::as_menu;

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::delivery::{parse_address, Mailer};
use crate::error::{DeliveryError, ReportError};
use crate::models::{Budget, Expense};
use crate::report;
use crate::summary::Summary;

const SMTP_SETTINGS: &str = "WALLET_SMTP_HOST, WALLET_SMTP_USER and WALLET_SMTP_PASSWORD";

pub(crate) fn summary_text(expenses: &[Expense], budget: Budget) -> String {
    report::render_text(&Summary::compute(expenses, budget), budget)
}

/// Render the summary into a PDF at `path`, dated today.
pub(crate) fn export_report(
    expenses: &[Expense],
    budget: Budget,
    path: &Path,
) -> Result<(), ReportError> {
    let today = chrono::Local::now().date_naive();
    report::write_document(path, &summary_text(expenses, budget), today)
}

/// Export the report to the configured path and mail it to `recipient`.
/// The address and SMTP settings are checked before anything is rendered.
pub(crate) fn email_report(
    config: &Config,
    expenses: &[Expense],
    budget: Budget,
    recipient: &str,
) -> Result<()> {
    let smtp = config
        .smtp
        .as_ref()
        .ok_or(DeliveryError::NotConfigured(SMTP_SETTINGS))?;
    parse_address(recipient)?;
    let mailer = Mailer::from_config(smtp)?;

    export_report(expenses, budget, &config.report_file)?;
    mailer.send_report(recipient, &config.report_file)?;
    tracing::info!(recipient, "report emailed");
    Ok(())
}
