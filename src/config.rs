use std::path::PathBuf;

use crate::error::ConfigError;

pub(crate) const FILE_VAR: &str = "WALLET_FILE";
pub(crate) const REPORT_VAR: &str = "WALLET_REPORT";
pub(crate) const SMTP_HOST_VAR: &str = "WALLET_SMTP_HOST";
pub(crate) const SMTP_PORT_VAR: &str = "WALLET_SMTP_PORT";
pub(crate) const SMTP_USER_VAR: &str = "WALLET_SMTP_USER";
pub(crate) const SMTP_PASSWORD_VAR: &str = "WALLET_SMTP_PASSWORD";
pub(crate) const SENDER_VAR: &str = "WALLET_SENDER";

const DEFAULT_SMTP_PORT: u16 = 465;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SmtpConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) sender: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) expense_file: PathBuf,
    pub(crate) report_file: PathBuf,
    /// `None` until host, user and password are all set.
    pub(crate) smtp: Option<SmtpConfig>,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key → value source. Blank values count as unset.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let (expense_file, report_file) = match (get(FILE_VAR), get(REPORT_VAR)) {
            (Some(file), Some(report)) => (PathBuf::from(file), PathBuf::from(report)),
            (file, report) => {
                let data_dir = data_dir()?;
                (
                    file.map(PathBuf::from)
                        .unwrap_or_else(|| data_dir.join("expense.csv")),
                    report
                        .map(PathBuf::from)
                        .unwrap_or_else(|| data_dir.join("expense_report.pdf")),
                )
            }
        };

        let port = match get(SMTP_PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                key: SMTP_PORT_VAR,
                value: raw,
            })?,
            None => DEFAULT_SMTP_PORT,
        };

        let smtp = match (get(SMTP_HOST_VAR), get(SMTP_USER_VAR), get(SMTP_PASSWORD_VAR)) {
            (Some(host), Some(username), Some(password)) => Some(SmtpConfig {
                sender: get(SENDER_VAR).unwrap_or_else(|| username.clone()),
                host,
                port,
                username,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            expense_file,
            report_file,
            smtp,
        })
    }

    /// Make sure the directories holding the expense file and report exist.
    pub(crate) fn ensure_dirs(&self) -> std::io::Result<()> {
        for path in [&self.expense_file, &self.report_file] {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

fn data_dir() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        directories::ProjectDirs::from("com", "wallet", "Wallet").ok_or(ConfigError::NoDataDir)?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
