use std::fmt;

use chrono::{DateTime, Utc};

use crate::ids::TransactionId;
use crate::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    InterestAdded,
    FeeCharged,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
            Self::InterestAdded => "Interest Added",
            Self::FeeCharged => "Fee Charged",
        };

        return write!(f, "{label}");
    }
}

/// A single recorded balance change. Immutable once created.
///
/// The amount is always non-negative, the type carries the sign.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: TransactionId,
    amount: Money,
    date: DateTime<Utc>,
    tx_type: TransactionType,
    description: String,
}

impl Transaction {
    pub(crate) fn new(amount: Money, tx_type: TransactionType, description: &str) -> Self {
        return Self {
            id: TransactionId::generate(),
            amount,
            date: Utc::now(),
            tx_type,
            description: description.to_string(),
        };
    }

    pub fn id(&self) -> TransactionId {
        return self.id;
    }

    pub fn amount(&self) -> Money {
        return self.amount;
    }

    pub fn date(&self) -> DateTime<Utc> {
        return self.date;
    }

    pub fn tx_type(&self) -> TransactionType {
        return self.tx_type;
    }

    pub fn description(&self) -> &str {
        return &self.description;
    }

    /// The amount signed by type: deposits and interest count positive,
    /// withdrawals and fees count negative.
    pub fn signed_amount(&self) -> Money {
        return match self.tx_type {
            TransactionType::Deposit | TransactionType::InterestAdded => self.amount,
            TransactionType::Withdrawal | TransactionType::FeeCharged => -self.amount,
        };
    }
}
