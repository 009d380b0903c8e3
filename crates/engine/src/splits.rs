//! Split calculation for a single expense.
//!
//! Runs at expense-creation time; the caller persists the returned shares as
//! split rows. The computation is pure: same inputs, same output.
use std::collections::HashMap;

use api_types::expense::SplitStrategy;
use uuid::Uuid;

use crate::{ResultEngine, error::EngineError, money::round_to_cents};

/// Computes each participant's owed share of `total_amount`.
///
/// Strategy semantics:
///
/// - `equal`: the total divided evenly, each share rounded to two decimals on
///   its own. The rounding remainder is not redistributed, so the shares of
///   one expense can sum to a few cents off the total.
/// - `unequal`: `weights` holds the absolute amount owed per participant,
///   taken verbatim; missing entries default to 0.
/// - `percentage`: `weights` holds percentages of the total. They are not
///   validated to sum to 100; that is the caller's contract.
/// - `shares`: `weights` holds relative share counts. The denominator is the
///   sum over every weight entry, participant or not.
///
/// Unknown weight keys are ignored; the output has exactly one entry per
/// participant.
pub fn compute_splits(
    total_amount: f64,
    strategy: SplitStrategy,
    participants: &[Uuid],
    weights: Option<&HashMap<Uuid, f64>>,
) -> ResultEngine<HashMap<Uuid, f64>> {
    if participants.is_empty() {
        return Err(EngineError::InvalidSplitInput(
            "at least one participant is required".to_string(),
        ));
    }
    if !total_amount.is_finite() || total_amount <= 0.0 {
        return Err(EngineError::InvalidSplitInput(
            "total amount must be > 0".to_string(),
        ));
    }

    let mut splits = HashMap::with_capacity(participants.len());

    match strategy {
        SplitStrategy::Equal => {
            let share = total_amount / participants.len() as f64;
            for &member_id in participants {
                splits.insert(member_id, round_to_cents(share));
            }
        }
        SplitStrategy::Unequal => {
            let weights = required_weights(strategy, weights)?;
            for &member_id in participants {
                splits.insert(member_id, weights.get(&member_id).copied().unwrap_or(0.0));
            }
        }
        SplitStrategy::Percentage => {
            let weights = required_weights(strategy, weights)?;
            for &member_id in participants {
                let percentage = weights.get(&member_id).copied().unwrap_or(0.0);
                splits.insert(member_id, round_to_cents(total_amount * percentage / 100.0));
            }
        }
        SplitStrategy::Shares => {
            let weights = required_weights(strategy, weights)?;
            let total_shares: f64 = weights.values().sum();
            if !total_shares.is_finite() || total_shares <= 0.0 {
                return Err(EngineError::InvalidSplitInput(
                    "share counts must sum to a positive value".to_string(),
                ));
            }
            for &member_id in participants {
                let share = weights.get(&member_id).copied().unwrap_or(0.0);
                splits.insert(member_id, round_to_cents(total_amount * share / total_shares));
            }
        }
    }

    Ok(splits)
}

fn required_weights<'a>(
    strategy: SplitStrategy,
    weights: Option<&'a HashMap<Uuid, f64>>,
) -> ResultEngine<&'a HashMap<Uuid, f64>> {
    weights.ok_or_else(|| {
        EngineError::InvalidSplitInput(format!(
            "weights are required for {} splits",
            strategy.as_str()
        ))
    })
}
