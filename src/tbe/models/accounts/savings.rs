use std::ops::{Deref, DerefMut};

use super::{AccountData, AccountOperationError, BankOperations};

use crate::ids::AccountNumber;
use crate::models::person::Person;
use crate::models::transactions::{Ledger, TransactionType};
use crate::Money;

/// Savings account: withdrawals may never leave the balance below the
/// configured minimum, and interest can be credited on demand.
#[derive(Debug)]
pub struct SavingsAccount {
    data: AccountData,
    min_balance: Money,
    interest_rate: f64,
}

impl SavingsAccount {
    pub(crate) fn open(
        number: AccountNumber,
        initial_balance: Money,
        owner: Person,
        min_balance: Money,
        interest_rate: f64,
    ) -> Self {
        return Self {
            data: AccountData::open(number, initial_balance, owner),
            min_balance,
            interest_rate,
        };
    }

    pub fn min_balance(&self) -> Money {
        return self.min_balance;
    }

    pub fn interest_rate(&self) -> f64 {
        return self.interest_rate;
    }

    /// Interest for one period at the current balance.
    pub fn calculate_interest(&self) -> Money {
        return self.data.balance.scaled_by(self.interest_rate);
    }

    /// Credits one period of interest and records it. Invoked by the
    /// registry's batch job, never on a timer.
    pub fn apply_interest(&mut self) {
        let interest = self.calculate_interest();

        self.data.balance = self.data.balance.saturating_add(interest);
        self.data
            .record(interest, TransactionType::InterestAdded, "Interest applied");
    }
}

impl BankOperations for SavingsAccount {
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

        if balance < self.min_balance {
            return Err(AccountOperationError::BelowMinimumBalance);
        }

        self.data.balance = balance;
        self.data.record(amount, TransactionType::Withdrawal, "Withdrawal");

        return Ok(());
    }

    fn balance(&self) -> Money {
        return self.data.balance;
    }

    fn ledger(&self) -> &Ledger {
        return &self.data.ledger;
    }
}

impl Deref for SavingsAccount {
    type Target = AccountData;

    fn deref(&self) -> &Self::Target {
        return &self.data;
    }
}

impl DerefMut for SavingsAccount {
    fn deref_mut(&mut self) -> &mut Self::Target {
        return &mut self.data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INITIAL_BALANCE: Money = Money::from_units(100);
    const MIN_BALANCE: Money = Money::from_units(50);
    const INTEREST_RATE: f64 = 0.05;

    fn build_account() -> SavingsAccount {
        return SavingsAccount::open(
            AccountNumber::generate("SAV"),
            INITIAL_BALANCE,
            Person::new("Alice Chen".to_string(), "alice@example.com".to_string()),
            MIN_BALANCE,
            INTEREST_RATE,
        );
    }

    #[test]
    fn deposit_credits_and_records() {
        let mut account = build_account();

        assert!(account.deposit(Money::from_units(25)).is_ok());

        assert_eq!(account.balance(), Money::from_units(125));
        assert_eq!(account.ledger().len(), 2);

        let head = account.ledger().recent(1)[0];
        assert_eq!(head.tx_type(), TransactionType::Deposit);
        assert_eq!(head.amount(), Money::from_units(25));
    }

    #[test]
    fn deposit_rejects_non_positive_amounts() {
        let mut account = build_account();

        assert_eq!(
            account.deposit(Money::ZERO),
            Err(AccountOperationError::NonPositiveAmount)
        );
        assert_eq!(
            account.deposit(Money::from_units(-5)),
            Err(AccountOperationError::NonPositiveAmount)
        );

        assert_eq!(account.balance(), INITIAL_BALANCE);
        assert_eq!(account.ledger().len(), 1);
    }

    #[test]
    fn withdraw_rejects_below_the_minimum_balance() {
        let mut account = build_account();

        // 100 - 60 would leave 40, below the 50 minimum
        assert_eq!(
            account.withdraw(Money::from_units(60)),
            Err(AccountOperationError::BelowMinimumBalance)
        );

        assert_eq!(account.balance(), INITIAL_BALANCE);
        assert_eq!(account.ledger().len(), 1);
    }

    #[test]
    fn withdraw_down_to_the_minimum_is_allowed() {
        let mut account = build_account();

        assert!(account.withdraw(Money::from_units(40)).is_ok());

        assert_eq!(account.balance(), MIN_BALANCE);

        let head = account.ledger().recent(1)[0];
        assert_eq!(head.tx_type(), TransactionType::Withdrawal);
        assert_eq!(head.amount(), Money::from_units(40));
    }

    #[test]
    fn withdraw_rejects_non_positive_amounts() {
        let mut account = build_account();

        assert_eq!(
            account.withdraw(Money::ZERO),
            Err(AccountOperationError::NonPositiveAmount)
        );
        assert_eq!(
            account.withdraw(Money::from_units(-1)),
            Err(AccountOperationError::NonPositiveAmount)
        );

        assert_eq!(account.balance(), INITIAL_BALANCE);
    }

    #[test]
    fn calculate_interest_uses_the_current_balance() {
        let mut account = build_account();

        assert_eq!(account.calculate_interest(), Money(50_000)); // 5

        account.withdraw(Money::from_units(50)).unwrap();

        assert_eq!(account.calculate_interest(), Money(25_000)); // 2.5
    }

    #[test]
    fn apply_interest_credits_and_records() {
        let mut account = build_account();
        account.withdraw(Money::from_units(50)).unwrap();

        account.apply_interest();

        assert_eq!(account.balance(), Money(525_000)); // 52.5

        let head = account.ledger().recent(1)[0];
        assert_eq!(head.tx_type(), TransactionType::InterestAdded);
        assert_eq!(head.amount(), Money(25_000));
        assert_eq!(head.description(), "Interest applied");
    }
}
