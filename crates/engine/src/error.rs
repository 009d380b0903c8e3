//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidSplitInput`] thrown when a split cannot be computed from its
//!   inputs.
//! - [`InvalidBalanceInput`] thrown when malformed balance data reaches the
//!   settlement planner.
//!
//!  [`InvalidSplitInput`]: EngineError::InvalidSplitInput
//!  [`InvalidBalanceInput`]: EngineError::InvalidBalanceInput
use thiserror::Error;

/// Engine custom errors.
///
/// Every failure is raised synchronously and the computation returns no
/// partial result. Unknown member references are not errors: they are
/// dropped where they occur (see the aggregator and planner docs).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid split input: {0}")]
    InvalidSplitInput(String),
    #[error("Invalid balance input: {0}")]
    InvalidBalanceInput(String),
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),
    #[error("Invalid settlement: {0}")]
    InvalidSettlement(String),
}
