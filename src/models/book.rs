use super::Expense;

/// The session's in-memory expenses, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ExpenseBook {
    expenses: Vec<Expense>,
}

impl ExpenseBook {
    pub(crate) fn new(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    pub(crate) fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Remove every expense whose name matches (case-insensitive, trimmed).
    /// Returns how many were removed.
    pub(crate) fn delete_by_name(&mut self, name: &str) -> usize {
        let before = self.expenses.len();
        self.expenses.retain(|e| !e.has_name(name));
        before - self.expenses.len()
    }

    pub(crate) fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    pub(crate) fn len(&self) -> usize {
        self.expenses.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
