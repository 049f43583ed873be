mod config;
mod delivery;
mod error;
mod logging;
mod models;
mod report;
mod run;
mod store;
mod summary;
mod util;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    logging::init();
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::from_env()?;
    config
        .ensure_dirs()
        .context("Failed to create data directory")?;
    tracing::debug!(file = %config.expense_file.display(), "starting");

    match args.len() {
        1 => run::as_menu(&config),
        2.. => run::as_cli(&args, &config),
        _ => {
            eprintln!("Usage: wallet [command]");
            Ok(())
        }
    }
}
