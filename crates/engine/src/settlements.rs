//! Settlement planning: the greedy creditor/debtor matcher.
use api_types::{
    balance::{MemberBalance, SettlementSuggestion},
    settlement::Settlement,
};
use uuid::Uuid;

use crate::{
    ResultEngine,
    error::EngineError,
    money::{EPSILON, round_to_cents},
};

struct WorkingBalance {
    member_id: Uuid,
    balance: f64,
}

/// Derives a transfer list that zeroes every balance up to [`EPSILON`].
///
/// Recorded settlements are first applied to a working copy of the balances:
/// the payer's balance rises by the settled amount (their debt shrank) and
/// the payee's falls by the same amount. Settlements naming members absent
/// from `balances` are skipped.
///
/// The remaining creditors and debtors are then matched greedily, largest
/// first, with a two-pointer sweep. This keeps the transfer count low in the
/// common case but is a heuristic: the provably minimum transaction count is
/// not guaranteed (that problem is NP-hard in general).
///
/// Fails with [`EngineError::InvalidBalanceInput`] when any balance or
/// settlement amount is non-finite.
pub fn compute_settlements(
    balances: &[MemberBalance],
    existing_settlements: &[Settlement],
) -> ResultEngine<Vec<SettlementSuggestion>> {
    for balance in balances {
        if !balance.balance.is_finite() {
            return Err(EngineError::InvalidBalanceInput(format!(
                "non-finite balance for member {}",
                balance.member_id
            )));
        }
    }
    for settlement in existing_settlements {
        if !settlement.amount.is_finite() {
            return Err(EngineError::InvalidBalanceInput(format!(
                "non-finite amount in settlement {}",
                settlement.id
            )));
        }
    }

    let mut working: Vec<WorkingBalance> = balances
        .iter()
        .map(|balance| WorkingBalance {
            member_id: balance.member_id,
            balance: balance.balance,
        })
        .collect();

    for settlement in existing_settlements {
        if let Some(from) = working
            .iter_mut()
            .find(|w| w.member_id == settlement.from_member)
        {
            from.balance += settlement.amount;
        }
        if let Some(to) = working
            .iter_mut()
            .find(|w| w.member_id == settlement.to_member)
        {
            to.balance -= settlement.amount;
        }
    }

    // Balances within EPSILON of zero are already settled and drop out here.
    let (mut creditors, mut debtors): (Vec<WorkingBalance>, Vec<WorkingBalance>) = working
        .into_iter()
        .filter(|w| w.balance > EPSILON || w.balance < -EPSILON)
        .partition(|w| w.balance > EPSILON);

    creditors.sort_by(|a, b| b.balance.total_cmp(&a.balance));
    debtors.sort_by(|a, b| a.balance.total_cmp(&b.balance));

    tracing::debug!(
        "planning settlements: {} creditors, {} debtors",
        creditors.len(),
        debtors.len()
    );

    let mut suggestions = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < creditors.len() && j < debtors.len() {
        let amount = creditors[i].balance.min(debtors[j].balance.abs());

        suggestions.push(SettlementSuggestion {
            from_member: debtors[j].member_id,
            to_member: creditors[i].member_id,
            amount: round_to_cents(amount),
        });

        creditors[i].balance -= amount;
        debtors[j].balance += amount;

        if creditors[i].balance < EPSILON {
            i += 1;
        }
        if debtors[j].balance.abs() < EPSILON {
            j += 1;
        }
    }

    Ok(suggestions)
}
