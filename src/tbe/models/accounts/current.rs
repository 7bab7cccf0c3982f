use std::ops::{Deref, DerefMut};

use super::{AccountData, AccountOperationError, BankOperations};

use crate::ids::AccountNumber;
use crate::models::person::Person;
use crate::models::transactions::{Ledger, TransactionType};
use crate::Money;

/// Current account: the balance may go negative down to the overdraft
/// limit. Every withdrawal that leaves the account overdrawn triggers a
/// fixed fee on top of the debit.
#[derive(Debug)]
pub struct CurrentAccount {
    data: AccountData,
    overdraft_limit: Money,
}

impl CurrentAccount {
    /// Fee debited whenever a withdrawal leaves the balance negative.
    pub const OVERDRAFT_FEE: Money = Money::from_units(5);

    pub(crate) fn open(
        number: AccountNumber,
        initial_balance: Money,
        owner: Person,
        overdraft_limit: Money,
    ) -> Self {
        return Self {
            data: AccountData::open(number, initial_balance, owner),
            overdraft_limit,
        };
    }

    pub fn overdraft_limit(&self) -> Money {
        return self.overdraft_limit;
    }

    pub fn set_overdraft_limit(&mut self, overdraft_limit: Money) {
        self.overdraft_limit = overdraft_limit;
    }

    /// The fee may push the balance past the overdraft limit, it is not
    /// subject to the admission check.
    fn apply_overdraft_fee(&mut self) {
        self.data.balance = self.data.balance.saturating_sub(Self::OVERDRAFT_FEE);
        self.data
            .record(Self::OVERDRAFT_FEE, TransactionType::FeeCharged, "Overdraft fee");
    }
}

impl BankOperations for CurrentAccount {
    fn deposit(&mut self, amount: Money) -> Result<(), AccountOperationError> {
        if amount <= Money::ZERO {
            return Err(AccountOperationError::NonPositiveAmount);
        }

        let balance = self
            .data
            .balance
            .checked_add(amount)
            .map_err(|_| AccountOperationError::AmountOverflow)?;

        self.data.balance = balance;
        self.data.record(amount, TransactionType::Deposit, "Deposit");

        return Ok(());
    }

    fn withdraw(&mut self, amount: Money) -> Result<(), AccountOperationError> {
        if amount <= Money::ZERO {
            return Err(AccountOperationError::NonPositiveAmount);
        }

        let balance = self
            .data
            .balance
            .checked_sub(amount)
            .map_err(|_| AccountOperationError::AmountOverflow)?;

        if balance < -self.overdraft_limit {
            return Err(AccountOperationError::OverdraftLimitExceeded);
        }

        self.data.balance = balance;
        self.data.record(amount, TransactionType::Withdrawal, "Withdrawal");

        if self.data.balance < Money::ZERO {
            self.apply_overdraft_fee();
        }

        return Ok(());
    }

    fn balance(&self) -> Money {
        return self.data.balance;
    }

    fn ledger(&self) -> &Ledger {
        return &self.data.ledger;
    }
}

impl Deref for CurrentAccount {
    type Target = AccountData;

    fn deref(&self) -> &Self::Target {
        return &self.data;
    }
}

impl DerefMut for CurrentAccount {
    fn deref_mut(&mut self) -> &mut Self::Target {
        return &mut self.data;
    }
}
