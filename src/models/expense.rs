use rust_decimal::Decimal;

use super::Category;
use crate::error::ValidationError;
use crate::util::format_amount;

/// A single recorded expense. Fields are private so every value went through `new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Expense {
    name: String,
    amount: Decimal,
    category: Category,
}

impl Expense {
    pub(crate) fn new(
        name: &str,
        amount: Decimal,
        category: Category,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::BlankName);
        }
        if amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount(amount));
        }
        let amount = super::check_ceiling(amount)?;
        if category.as_str().trim().is_empty() {
            return Err(ValidationError::BlankCategory);
        }
        Ok(Self {
            name: name.to_string(),
            amount,
            category,
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn amount(&self) -> Decimal {
        self.amount
    }

    pub(crate) fn category(&self) -> &Category {
        &self.category
    }

    pub(crate) fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

impl std::fmt::Display for Expense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.name,
            format_amount(self.amount),
            self.category
        )
    }
}
