use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

pub mod member {
    use super::*;

    /// A group member as supplied by the surrounding application.
    ///
    /// The engine treats members as immutable input: it reads the id and the
    /// display attributes, nothing else.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Member {
        pub id: Uuid,
        pub email: String,
        pub display_name: String,
        pub avatar_url: Option<String>,
    }
}

pub mod group {
    use super::*;

    /// An expense group.
    ///
    /// `currency` is an opaque label (e.g. `"USD"`). It is carried alongside
    /// amounts and rendered back to the user untouched; the engine never
    /// converts between currencies.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Group {
        pub id: Uuid,
        pub name: String,
        pub description: Option<String>,
        pub created_by: Uuid,
        pub currency: String,
        pub is_archived: bool,
        pub created_at: DateTime<Utc>,
    }
}

pub mod expense {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ExpenseCategory {
        Food,
        Transport,
        Accommodation,
        Entertainment,
        Utilities,
        Other,
    }

    /// How an expense's amount is divided among its participants.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum SplitStrategy {
        Equal,
        Unequal,
        Percentage,
        Shares,
    }

    impl SplitStrategy {
        /// Returns the canonical strategy string used by the database.
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Equal => "equal",
                Self::Unequal => "unequal",
                Self::Percentage => "percentage",
                Self::Shares => "shares",
            }
        }
    }

    /// An expense recorded in a group.
    ///
    /// `is_deleted` is a soft-delete flag: deleted expenses stay in storage
    /// but are excluded from every computation.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Expense {
        pub id: Uuid,
        pub group_id: Uuid,
        pub description: String,
        /// Decimal currency amount, > 0.
        pub amount: f64,
        pub paid_by: Uuid,
        pub expense_date: NaiveDate,
        pub category: ExpenseCategory,
        pub split_strategy: SplitStrategy,
        pub receipt_url: Option<String>,
        pub notes: Option<String>,
        pub created_by: Uuid,
        pub is_deleted: bool,
        pub created_at: DateTime<Utc>,
    }

    /// One participant's share of a single expense.
    ///
    /// Per expense, split amounts sum to the expense amount up to one minor
    /// unit of rounding slack per split.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseSplit {
        pub id: Uuid,
        pub expense_id: Uuid,
        pub member_id: Uuid,
        pub amount: f64,
    }

    /// Request body for creating an expense.
    ///
    /// `weights` is required for every strategy except `equal`; its meaning
    /// depends on the strategy (absolute amounts, percentages or share
    /// counts).
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub description: String,
        pub amount: f64,
        pub paid_by: Uuid,
        pub expense_date: NaiveDate,
        pub category: ExpenseCategory,
        pub split_strategy: SplitStrategy,
        pub notes: Option<String>,
        pub participants: Vec<Uuid>,
        pub weights: Option<HashMap<Uuid, f64>>,
    }
}

pub mod settlement {
    use super::*;

    /// A real-world transfer already completed between two members.
    ///
    /// Reduces the payer's net debt and the payee's net credit by `amount`.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Settlement {
        pub id: Uuid,
        pub group_id: Uuid,
        pub from_member: Uuid,
        pub to_member: Uuid,
        /// Decimal currency amount, > 0.
        pub amount: f64,
        pub settlement_date: NaiveDate,
        pub notes: Option<String>,
        pub created_at: DateTime<Utc>,
    }

    /// Request body for recording a settlement.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SettlementNew {
        pub from_member: Uuid,
        pub to_member: Uuid,
        pub amount: f64,
        pub settlement_date: NaiveDate,
        pub notes: Option<String>,
    }
}

pub mod balance {
    use super::*;

    /// A member's net position across a group, recomputed on every query.
    ///
    /// `balance = paid - owed`; positive means the member is owed money,
    /// negative means the member owes money.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct MemberBalance {
        pub member_id: Uuid,
        pub member: member::Member,
        pub paid: f64,
        pub owed: f64,
        pub balance: f64,
    }

    /// A proposed transfer that reduces outstanding debt.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct SettlementSuggestion {
        pub from_member: Uuid,
        pub to_member: Uuid,
        pub amount: f64,
    }

    /// The composed read-only report served at balance-query time.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct BalanceReport {
        pub balances: Vec<MemberBalance>,
        pub suggestions: Vec<SettlementSuggestion>,
    }

    /// Headline figures for a group's detail view.
    #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
    pub struct GroupSummary {
        /// Sum of non-deleted expense amounts.
        pub total_spent: f64,
        pub expense_count: usize,
        pub member_count: usize,
    }
}

#[cfg(test)]
mod tests {
    use super::expense::SplitStrategy;

    #[test]
    fn split_strategy_serializes_snake_case() {
        let json = serde_json::to_string(&SplitStrategy::Percentage).unwrap();
        assert_eq!(json, "\"percentage\"");

        let parsed: SplitStrategy = serde_json::from_str("\"shares\"").unwrap();
        assert_eq!(parsed, SplitStrategy::Shares);
        assert_eq!(parsed.as_str(), "shares");
    }
}
