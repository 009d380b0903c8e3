//! Create-request validation.
//!
//! The checks the surrounding application runs before persisting a new
//! expense or settlement. Centralized here so every entry surface enforces
//! the same invariants.
use api_types::{expense::ExpenseNew, settlement::SettlementNew};

use crate::{ResultEngine, error::EngineError};

const MAX_EXPENSE_AMOUNT: f64 = 999_999.99;

/// Validates an expense create request.
///
/// Split weights are checked later by the split calculator, which knows the
/// per-strategy rules.
pub fn validate_expense(input: &ExpenseNew) -> ResultEngine<()> {
    let description_len = input.description.trim().chars().count();
    if description_len < 3 || description_len > 100 {
        return Err(EngineError::InvalidExpense(
            "description must be 3 to 100 characters".to_string(),
        ));
    }
    if !input.amount.is_finite() || input.amount <= 0.0 {
        return Err(EngineError::InvalidExpense(
            "amount must be positive".to_string(),
        ));
    }
    if input.amount > MAX_EXPENSE_AMOUNT {
        return Err(EngineError::InvalidExpense(
            "amount exceeds 999999.99".to_string(),
        ));
    }
    if input.participants.is_empty() {
        return Err(EngineError::InvalidExpense(
            "at least one participant is required".to_string(),
        ));
    }
    Ok(())
}

/// Validates a settlement create request.
pub fn validate_settlement(input: &SettlementNew) -> ResultEngine<()> {
    if !input.amount.is_finite() || input.amount <= 0.0 {
        return Err(EngineError::InvalidSettlement(
            "amount must be positive".to_string(),
        ));
    }
    if input.from_member == input.to_member {
        return Err(EngineError::InvalidSettlement(
            "payer and payee must differ".to_string(),
        ));
    }
    Ok(())
}
