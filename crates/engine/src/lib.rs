pub use balances::{compute_balance_report, compute_balances};
pub use error::EngineError;
pub use money::{EPSILON, format_amount, round_to_cents};
pub use settlements::compute_settlements;
pub use splits::compute_splits;
pub use summary::{group_summary, total_spent};
pub use validate::{validate_expense, validate_settlement};

mod balances;
mod error;
mod money;
mod settlements;
mod splits;
mod summary;
mod validate;

type ResultEngine<T> = Result<T, EngineError>;
