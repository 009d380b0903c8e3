//! Group headline figures.
use api_types::{balance::GroupSummary, expense::Expense, member::Member};

/// Sum of non-deleted expense amounts.
pub fn total_spent(expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .filter(|expense| !expense.is_deleted)
        .map(|expense| expense.amount)
        .sum()
}

/// Figures for a group's detail view.
pub fn group_summary(expenses: &[Expense], members: &[Member]) -> GroupSummary {
    GroupSummary {
        total_spent: total_spent(expenses),
        expense_count: expenses
            .iter()
            .filter(|expense| !expense.is_deleted)
            .count(),
        member_count: members.len(),
    }
}
