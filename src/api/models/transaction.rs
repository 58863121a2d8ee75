use std::convert::{TryFrom, TryInto};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{asset::AssetSymbol, error::APIError};
use crate::db::models::transaction::Transaction as DBTransaction;

#[derive(Debug, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub user_id: Uuid,
    pub kind: TransactionKind,
    pub symbol: AssetSymbol,
    pub amount: String,
    pub state: TransactionState,
    pub reference: String,
}

impl TryFrom<DBTransaction> for Transaction {
    type Error = APIError;

    fn try_from(value: DBTransaction) -> Result<Self, Self::Error> {
        Ok(Transaction {
            id: value.id,
            created_at: value.created_at,
            updated_at: value.updated_at,
            user_id: value.user_id,
            kind: value.kind.try_into()?,
            symbol: value.symbol.as_str().try_into()?,
            amount: value.amount.to_string(),
            state: value.state.try_into()?,
            reference: value.reference,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct NewTransactionRequest {
    pub kind: TransactionKind,
    pub symbol: AssetSymbol,
    pub amount: String,
    pub reference: Option<String>,
}

/// Admin verdict on a pending transaction.
#[derive(Debug, Deserialize)]
pub struct AdminDecisionRequest {
    pub decision: AdminDecision,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum AdminDecision {
    Approved,
    Rejected,
}

impl AdminDecision {
    pub fn terminal_state(&self) -> TransactionState {
        match self {
            AdminDecision::Approved => TransactionState::Completed,
            AdminDecision::Rejected => TransactionState::Failed,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit = 0,
    Withdrawal = 1,
}

const DEPOSIT: &'static str = "deposit";
const WITHDRAWAL: &'static str = "withdrawal";

impl TryFrom<&str> for TransactionKind {
    type Error = APIError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            DEPOSIT => Ok(TransactionKind::Deposit),
            WITHDRAWAL => Ok(TransactionKind::Withdrawal),
            _ => Err(APIError::InvalidValue {
                description: format!("transaction kind cannot be {}", value),
            }),
        }
    }
}

impl TryFrom<i16> for TransactionKind {
    type Error = APIError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TransactionKind::Deposit),
            1 => Ok(TransactionKind::Withdrawal),
            _ => Err(APIError::InvalidValue {
                description: format!("transaction kind cannot be {}", value),
            }),
        }
    }
}

impl Into<&'static str> for TransactionKind {
    fn into(self) -> &'static str {
        match self {
            TransactionKind::Deposit => DEPOSIT,
            TransactionKind::Withdrawal => WITHDRAWAL,
        }
    }
}

impl Into<i16> for TransactionKind {
    fn into(self) -> i16 {
        match self {
            TransactionKind::Deposit => 0,
            TransactionKind::Withdrawal => 1,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum TransactionState {
    Pending = 0,
    Completed = 1,
    Failed = 2,
}

const PENDING: &'static str = "pending";
const COMPLETED: &'static str = "completed";
const FAILED: &'static str = "failed";

impl TryFrom<&str> for TransactionState {
    type Error = APIError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            PENDING => Ok(TransactionState::Pending),
            COMPLETED => Ok(TransactionState::Completed),
            FAILED => Ok(TransactionState::Failed),
            _ => Err(APIError::InvalidValue {
                description: format!("transaction state cannot be {}", value),
            }),
        }
    }
}

impl TryFrom<i16> for TransactionState {
    type Error = APIError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TransactionState::Pending),
            1 => Ok(TransactionState::Completed),
            2 => Ok(TransactionState::Failed),
            _ => Err(APIError::InvalidValue {
                description: format!("transaction state cannot be {}", value),
            }),
        }
    }
}

impl Into<&'static str> for TransactionState {
    fn into(self) -> &'static str {
        match self {
            TransactionState::Pending => PENDING,
            TransactionState::Completed => COMPLETED,
            TransactionState::Failed => FAILED,
        }
    }
}

impl Into<i16> for TransactionState {
    fn into(self) -> i16 {
        match self {
            TransactionState::Pending => 0,
            TransactionState::Completed => 1,
            TransactionState::Failed => 2,
        }
    }
}

impl std::fmt::Display for TransactionState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let value: &'static str = (*self).into();
        write!(f, "{}", value)
    }
}

#[cfg(test)]
mod test {
    use std::convert::TryFrom;

    use super::*;

    #[test]
    fn test_state_conversions() {
        assert_eq!(
            TransactionState::try_from(0).unwrap(),
            TransactionState::Pending
        );
        assert_eq!(
            TransactionState::try_from(2).unwrap(),
            TransactionState::Failed
        );
        assert!(TransactionState::try_from(3).is_err());
    }

    #[test]
    fn test_kind_conversions() {
        assert_eq!(
            TransactionKind::try_from("deposit").unwrap(),
            TransactionKind::Deposit
        );
        assert!(TransactionKind::try_from("transfer").is_err());
        assert!(TransactionKind::try_from(2).is_err());
    }

    #[test]
    fn test_admin_decision_terminal_states() {
        assert_eq!(
            AdminDecision::Approved.terminal_state(),
            TransactionState::Completed
        );
        assert_eq!(
            AdminDecision::Rejected.terminal_state(),
            TransactionState::Failed
        );
    }
}
