mod book;
mod budget;
mod category;
mod expense;

pub(crate) use book::ExpenseBook;
pub(crate) use budget::Budget;
pub(crate) use category::Category;
pub(crate) use expense::Expense;

use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Largest amount or budget accepted. Keeps every sum and difference far
/// inside `Decimal`'s range so summaries never overflow.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Reject values past [`MAX_AMOUNT`].
pub(crate) fn check_ceiling(amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount > MAX_AMOUNT {
        return Err(ValidationError::TooLarge(amount));
    }
    Ok(amount)
}
