use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::StoreError;
use crate::models::{Category, Expense};
use crate::util::parse_decimal;

const NAME_COLUMN: &str = "Expense Name";
const AMOUNT_COLUMN: &str = "Amount";
const CATEGORY_COLUMN: &str = "Category";

/// Flat CSV file holding every saved expense.
#[derive(Debug, Clone)]
pub(crate) struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read all expenses. A missing or empty file is an empty collection;
    /// any unreadable row fails the whole load.
    pub(crate) fn load(&self) -> Result<Vec<Expense>, StoreError> {
        let file = match std::fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no expense file yet");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = rdr.headers()?.clone();
        if headers.iter().all(|h| h.is_empty()) {
            return Ok(Vec::new());
        }
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or(StoreError::MissingColumn(name))
        };
        let name_col = column(NAME_COLUMN)?;
        let amount_col = column(AMOUNT_COLUMN)?;
        let category_col = column(CATEGORY_COLUMN)?;

        let mut expenses = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let field = |i: usize| record.get(i).unwrap_or("");

            let raw_amount = field(amount_col);
            let amount = parse_decimal(raw_amount).map_err(|_| StoreError::Parse {
                line,
                value: raw_amount.to_string(),
            })?;
            let expense = Category::parse(field(category_col))
                .and_then(|category| Expense::new(field(name_col), amount, category))
                .map_err(|source| StoreError::InvalidRecord { line, source })?;
            expenses.push(expense);
        }

        tracing::info!(path = %self.path.display(), count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    /// Replace the file with `expenses`. Rows go to a temp file in the same
    /// directory which is then renamed over the target.
    pub(crate) fn save(&self, expenses: &[Expense]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        let mut wtr = csv::Writer::from_writer(tmp);
        wtr.write_record([NAME_COLUMN, AMOUNT_COLUMN, CATEGORY_COLUMN])?;
        for expense in expenses {
            let amount = expense.amount().to_string();
            wtr.write_record([expense.name(), amount.as_str(), expense.category().as_str()])?;
        }
        let mut tmp = wtr.into_inner().map_err(|e| io_err(e.into_error()))?;
        tmp.flush().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;

        tracing::info!(path = %self.path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }
}
