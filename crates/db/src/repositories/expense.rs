//! Expense repository.

use splitbook_core::{Expense, ExpenseRecord};
use splitbook_shared::types::{ExpenseId, GroupId};

use super::RepositoryError;
use crate::store::Store;

/// Expense repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    store: Store,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Stores an expense under its group.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the group does not exist.
    pub fn create(&self, expense: Expense) -> Result<Expense, RepositoryError> {
        if !self.store.groups.contains_key(&expense.group_id) {
            return Err(RepositoryError::NotFound(format!(
                "group {}",
                expense.group_id
            )));
        }

        self.store
            .expenses
            .entry(expense.group_id)
            .or_default()
            .push(expense.clone());
        tracing::debug!(
            group_id = %expense.group_id,
            expense_id = %expense.id,
            amount = %expense.record.amount,
            "expense created"
        );
        Ok(expense)
    }

    /// Finds one expense of a group.
    #[must_use]
    pub fn find_by_id(&self, group_id: GroupId, id: ExpenseId) -> Option<Expense> {
        self.store
            .expenses
            .get(&group_id)?
            .iter()
            .find(|expense| expense.id == id)
            .cloned()
    }

    /// Expenses of a group, newest first.
    #[must_use]
    pub fn list_for_group(&self, group_id: GroupId) -> Vec<Expense> {
        let mut expenses = self.snapshot(group_id);
        expenses.reverse();
        expenses
    }

    /// Expenses of a group in the order they were recorded.
    ///
    /// The returned vector is detached from the store.
    #[must_use]
    pub fn snapshot(&self, group_id: GroupId) -> Vec<Expense> {
        self.store
            .expenses
            .get(&group_id)
            .map(|expenses| expenses.clone())
            .unwrap_or_default()
    }

    /// Accounting records of a group in the order they were recorded.
    #[must_use]
    pub fn records(&self, group_id: GroupId) -> Vec<ExpenseRecord> {
        self.store
            .expenses
            .get(&group_id)
            .map(|expenses| expenses.iter().map(|e| e.record.clone()).collect())
            .unwrap_or_default()
    }

    /// Removes an expense from its group.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the group has no such expense.
    pub fn delete(&self, group_id: GroupId, id: ExpenseId) -> Result<Expense, RepositoryError> {
        let not_found = || RepositoryError::NotFound(format!("expense {id}"));

        let mut expenses = self.store.expenses.get_mut(&group_id).ok_or_else(not_found)?;
        let position = expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or_else(not_found)?;
        let removed = expenses.remove(position);

        tracing::debug!(group_id = %group_id, expense_id = %id, "expense deleted");
        Ok(removed)
    }
}
