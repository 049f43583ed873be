use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Monthly spending limit, entered once per session and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Budget {
    limit_amount: Decimal,
}

impl Budget {
    pub(crate) fn new(limit_amount: Decimal) -> Result<Self, ValidationError> {
        if limit_amount < Decimal::ZERO {
            return Err(ValidationError::NegativeBudget(limit_amount));
        }
        Ok(Self {
            limit_amount: super::check_ceiling(limit_amount)?,
        })
    }

    pub(crate) fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::new(crate::util::parse_decimal(s)?)
    }

    pub(crate) fn amount(&self) -> Decimal {
        self.limit_amount
    }
}
