use rust_decimal::Decimal;

use crate::models::{Budget, Expense};

/// Spend-vs-budget figures derived from a set of expenses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) total_spent: Decimal,
    /// Category name and summed amount, in order of first appearance.
    pub(crate) amount_by_category: Vec<(String, Decimal)>,
    pub(crate) budget_left: Decimal,
}

impl Summary {
    pub(crate) fn compute(expenses: &[Expense], budget: Budget) -> Self {
        let mut total_spent = Decimal::ZERO;
        let mut amount_by_category: Vec<(String, Decimal)> = Vec::new();

        // Amounts are capped at `MAX_AMOUNT`, so these sums stay in range.
        for expense in expenses {
            total_spent += expense.amount();
            let name = expense.category().as_str();
            match amount_by_category.iter_mut().find(|(c, _)| c == name) {
                Some((_, sum)) => *sum += expense.amount(),
                None => amount_by_category.push((name.to_string(), expense.amount())),
            }
        }

        Self {
            total_spent,
            amount_by_category,
            budget_left: budget.amount() - total_spent,
        }
    }

    #[cfg(test)]
    pub(crate) fn amount_for(&self, category: &str) -> Option<Decimal> {
        self.amount_by_category
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, amount)| *amount)
    }

    pub(crate) fn is_over_budget(&self) -> bool {
        self.budget_left < Decimal::ZERO
    }
}
