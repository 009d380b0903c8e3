//! Balance aggregation across a group's expenses and splits.
use std::collections::HashMap;

use api_types::{
    balance::{BalanceReport, MemberBalance},
    expense::{Expense, ExpenseSplit},
    member::Member,
    settlement::Settlement,
};
use uuid::Uuid;

use crate::{ResultEngine, settlements::compute_settlements};

/// Computes each member's paid total, owed total and net balance.
///
/// Returns one record per roster member, in roster order. Soft-deleted
/// expenses are skipped. An expense whose payer is not on the roster, or a
/// split for a member not on the roster, is dropped silently; the engine is
/// lenient toward partially loaded data.
///
/// No rounding is applied here: whatever drift the split calculator produced
/// flows through to the balances.
pub fn compute_balances(
    expenses: &[Expense],
    splits: &[ExpenseSplit],
    members: &[Member],
) -> Vec<MemberBalance> {
    let mut balances: Vec<MemberBalance> = members
        .iter()
        .map(|member| MemberBalance {
            member_id: member.id,
            member: member.clone(),
            paid: 0.0,
            owed: 0.0,
            balance: 0.0,
        })
        .collect();
    let index: HashMap<Uuid, usize> = members
        .iter()
        .enumerate()
        .map(|(position, member)| (member.id, position))
        .collect();

    for expense in expenses {
        if expense.is_deleted {
            continue;
        }
        if let Some(&position) = index.get(&expense.paid_by) {
            balances[position].paid += expense.amount;
        }
    }

    for split in splits {
        if let Some(&position) = index.get(&split.member_id) {
            balances[position].owed += split.amount;
        }
    }

    for balance in &mut balances {
        balance.balance = balance.paid - balance.owed;
    }

    balances
}

/// Runs the aggregator and the settlement planner as one read-only report.
///
/// This is the balance-query entry point: the caller fetches the group's
/// current records, and the report is recomputed from scratch on every call.
pub fn compute_balance_report(
    expenses: &[Expense],
    splits: &[ExpenseSplit],
    members: &[Member],
    settlements: &[Settlement],
) -> ResultEngine<BalanceReport> {
    let balances = compute_balances(expenses, splits, members);
    let suggestions = compute_settlements(&balances, settlements)?;
    tracing::debug!(
        "balance report: {} members, {} suggestions",
        balances.len(),
        suggestions.len()
    );
    Ok(BalanceReport {
        balances,
        suggestions,
    })
}
