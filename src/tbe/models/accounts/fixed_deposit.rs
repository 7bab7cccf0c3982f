use std::ops::{Deref, DerefMut};

use chrono::{Datelike, Months, NaiveDate, Utc};

use super::{AccountData, AccountOperationError, BankOperations};

use crate::ids::AccountNumber;
use crate::models::person::Person;
use crate::models::transactions::{Ledger, TransactionType};
use crate::Money;

/// Fixed deposit account: funded once at opening, then frozen until the
/// maturity date. The only admitted operation afterwards is a single
/// withdrawal of the full balance at or after maturity.
#[derive(Debug)]
pub struct FixedDepositAccount {
    data: AccountData,
    deposit_amount: Money,
    interest_rate: f64,
    maturity_date: NaiveDate,
}

impl FixedDepositAccount {
    pub(crate) fn open(
        number: AccountNumber,
        deposit_amount: Money,
        owner: Person,
        term_months: u32,
        interest_rate: f64,
    ) -> Self {
        let data = AccountData::open(number, deposit_amount, owner);

        // Terms that overflow the calendar never mature
        let maturity_date = data
            .date_created
            .checked_add_months(Months::new(term_months))
            .unwrap_or(NaiveDate::MAX);

        return Self {
            data,
            deposit_amount,
            interest_rate,
            maturity_date,
        };
    }

    pub fn deposit_amount(&self) -> Money {
        return self.deposit_amount;
    }

    pub fn interest_rate(&self) -> f64 {
        return self.interest_rate;
    }

    pub fn maturity_date(&self) -> NaiveDate {
        return self.maturity_date;
    }

    /// Whether the maturity date has been reached, inclusive.
    pub fn is_matured(&self) -> bool {
        return Utc::now().date_naive() >= self.maturity_date;
    }

    /// Projects principal plus simple interest over the remaining whole
    /// months of the term. Read-only, and not meaningful once the
    /// remaining term reaches zero.
    pub fn calculate_maturity_amount(&self) -> Money {
        let today = Utc::now().date_naive();
        let months_remaining = whole_months_between(today, self.maturity_date);

        let term_in_years = months_remaining as f64 / 12.0;
        let interest = self.deposit_amount.scaled_by(self.interest_rate * term_in_years);

        return self.deposit_amount.saturating_add(interest);
    }
}

/// Whole months from one date to another, truncated, negative when `to`
/// lies before `from`.
fn whole_months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months = (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);

    if months > 0 && to.day() < from.day() {
        months -= 1;
    } else if months < 0 && to.day() > from.day() {
        months += 1;
    }

    return months;
}

impl BankOperations for FixedDepositAccount {
    /// Additional deposits are never admitted.
    fn deposit(&mut self, _amount: Money) -> Result<(), AccountOperationError> {
        return Err(AccountOperationError::DepositsDisabled);
    }

    fn withdraw(&mut self, amount: Money) -> Result<(), AccountOperationError> {
        if amount <= Money::ZERO {
            return Err(AccountOperationError::NonPositiveAmount);
        }

        if !self.is_matured() {
            return Err(AccountOperationError::NotYetMatured);
        }

        if amount != self.data.balance {
            return Err(AccountOperationError::PartialWithdrawalNotAllowed);
        }

        self.data.balance = Money::ZERO;
        self.data
            .record(amount, TransactionType::Withdrawal, "Withdrawal at maturity");

        return Ok(());
    }

    fn balance(&self) -> Money {
        return self.data.balance;
    }

    fn ledger(&self) -> &Ledger {
        return &self.data.ledger;
    }
}

impl Deref for FixedDepositAccount {
    type Target = AccountData;

    fn deref(&self) -> &Self::Target {
        return &self.data;
    }
}

impl DerefMut for FixedDepositAccount {
    fn deref_mut(&mut self) -> &mut Self::Target {
        return &mut self.data;
    }
}
