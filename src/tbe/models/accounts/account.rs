use std::fmt;
use std::ops::{Deref, DerefMut};

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use super::{CurrentAccount, FixedDepositAccount, SavingsAccount};

use crate::ids::AccountNumber;
use crate::models::person::Person;
use crate::models::transactions::{Ledger, Transaction, TransactionType};
use crate::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Savings,
    Current,
    FixedDeposit,
}

impl AccountKind {
    /// Account number prefix for this variant.
    pub fn prefix(&self) -> &'static str {
        return match self {
            Self::Savings => "SAV",
            Self::Current => "CUR",
            Self::FixedDeposit => "FIX",
        };
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Self::Savings => "Savings",
            Self::Current => "Current",
            Self::FixedDeposit => "Fixed Deposit",
        };

        return write!(f, "{label}");
    }
}

/// Why a deposit or withdrawal was not admitted.
///
/// Rejections are ordinary outcomes, nothing here ever aborts the process.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountOperationError {
    #[error("Amount must be positive")]
    NonPositiveAmount,

    #[error("Withdrawal would leave the balance below the minimum")]
    BelowMinimumBalance,

    #[error("Withdrawal would exceed the overdraft limit")]
    OverdraftLimitExceeded,

    #[error("Fixed deposit has not matured yet")]
    NotYetMatured,

    #[error("Fixed deposits only allow a single full withdrawal")]
    PartialWithdrawalNotAllowed,

    #[error("Fixed deposits do not accept further deposits")]
    DepositsDisabled,

    #[error("Amount is too large to apply")]
    AmountOverflow,
}

/// The operations every account variant offers.
pub trait BankOperations {
    /// Attempts to credit the amount. On success the balance grows and a
    /// deposit transaction is recorded.
    fn deposit(&mut self, amount: Money) -> Result<(), AccountOperationError>;

    /// Attempts to debit the amount. On success the balance shrinks and a
    /// withdrawal transaction is recorded. A rejected call has no side
    /// effects.
    fn withdraw(&mut self, amount: Money) -> Result<(), AccountOperationError>;

    fn balance(&self) -> Money;

    fn ledger(&self) -> &Ledger;
}

/// State shared by every account variant.
#[derive(Debug)]
pub struct AccountData {
    pub(crate) number: AccountNumber,
    pub(crate) balance: Money,
    pub(crate) date_created: NaiveDate,
    pub(crate) owner: Person,
    pub(crate) ledger: Ledger,
}

impl AccountData {
    /// Opens the shared state of a new account, recording the initial
    /// deposit when the account is funded.
    pub(crate) fn open(number: AccountNumber, initial_balance: Money, owner: Person) -> Self {
        let mut data = Self {
            number,
            balance: initial_balance,
            date_created: Utc::now().date_naive(),
            owner,
            ledger: Ledger::new(),
        };

        if initial_balance > Money::ZERO {
            data.record(initial_balance, TransactionType::Deposit, "Initial deposit");
        }

        return data;
    }

    pub(crate) fn record(&mut self, amount: Money, tx_type: TransactionType, description: &str) {
        self.ledger.append(Transaction::new(amount, tx_type, description));
    }

    pub fn number(&self) -> &AccountNumber {
        return &self.number;
    }

    pub fn balance(&self) -> Money {
        return self.balance;
    }

    pub fn date_created(&self) -> NaiveDate {
        return self.date_created;
    }

    pub fn owner(&self) -> &Person {
        return &self.owner;
    }

    pub fn owner_mut(&mut self) -> &mut Person {
        return &mut self.owner;
    }

    pub fn ledger(&self) -> &Ledger {
        return &self.ledger;
    }
}

/// A bank account, one of three closed variants.
///
/// Common state is reachable directly through deref, admission rules are
/// variant-specific and dispatched here so no caller ever needs to match
/// on the variant to move money.
#[derive(Debug)]
pub enum Account {
    Savings(SavingsAccount),
    Current(CurrentAccount),
    FixedDeposit(FixedDepositAccount),
}

impl Account {
    pub fn kind(&self) -> AccountKind {
        return match self {
            Self::Savings(_) => AccountKind::Savings,
            Self::Current(_) => AccountKind::Current,
            Self::FixedDeposit(_) => AccountKind::FixedDeposit,
        };
    }
}

impl BankOperations for Account {
    fn deposit(&mut self, amount: Money) -> Result<(), AccountOperationError> {
        return match self {
            Self::Savings(account) => account.deposit(amount),
            Self::Current(account) => account.deposit(amount),
            Self::FixedDeposit(account) => account.deposit(amount),
        };
    }

    fn withdraw(&mut self, amount: Money) -> Result<(), AccountOperationError> {
        return match self {
            Self::Savings(account) => account.withdraw(amount),
            Self::Current(account) => account.withdraw(amount),
            Self::FixedDeposit(account) => account.withdraw(amount),
        };
    }

    fn balance(&self) -> Money {
        return self.deref().balance();
    }

    fn ledger(&self) -> &Ledger {
        return self.deref().ledger();
    }
}

impl Deref for Account {
    type Target = AccountData;

    fn deref(&self) -> &Self::Target {
        return match self {
            Self::Savings(account) => account,
            Self::Current(account) => account,
            Self::FixedDeposit(account) => account,
        };
    }
}

impl DerefMut for Account {
    fn deref_mut(&mut self) -> &mut Self::Target {
        return match self {
            Self::Savings(account) => account,
            Self::Current(account) => account,
            Self::FixedDeposit(account) => account,
        };
    }
}
