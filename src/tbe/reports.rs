use serde::Serialize;

use crate::models::{Account, Transaction};

/// Flat, display-ready view of one account. Owns no domain rules, every
/// field is already formatted for output.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountReport {
    pub account: String,
    pub kind: String,
    pub owner: String,
    pub balance: String,
    pub opened: String,
}

impl AccountReport {
    pub fn from_account(account: &Account) -> Self {
        return Self {
            account: account.number().to_string(),
            kind: account.kind().to_string(),
            owner: account.owner().name().to_string(),
            balance: account.balance().to_string(),
            opened: account.date_created().to_string(),
        };
    }
}

/// One statement row, ready for output.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub date: String,
    pub kind: String,
    pub amount: String,
    pub description: String,
}

impl StatementLine {
    fn from_transaction(tx: &Transaction) -> Self {
        return Self {
            date: tx.date().format("%Y-%m-%d %H:%M:%S").to_string(),
            kind: tx.tx_type().to_string(),
            amount: tx.amount().to_string(),
            description: tx.description().to_string(),
        };
    }
}

/// The most recent `limit` statement rows for an account, newest first.
pub fn build_statement(account: &Account, limit: usize) -> Vec<StatementLine> {
    return account
        .ledger()
        .recent(limit)
        .into_iter()
        .map(StatementLine::from_transaction)
        .collect();
}
