use crate::ids::AccountNumber;
use crate::models::{
    Account, AccountKind, CurrentAccount, FixedDepositAccount, Person, SavingsAccount,
};
use crate::reports::AccountReport;
use crate::Money;

/// In-memory registry of every open account.
///
/// Accounts are held in creation order, which is the order every listing
/// operation preserves. The registry is plain owned state, callers
/// construct one and pass it where it is needed.
#[derive(Debug, Default)]
pub struct BankingSystem {
    accounts: Vec<Account>,
}

impl BankingSystem {
    pub fn new() -> Self {
        return Self::default();
    }

    pub fn create_savings_account(
        &mut self,
        owner: Person,
        initial_balance: Money,
        min_balance: Money,
        interest_rate: f64,
    ) -> &mut SavingsAccount {
        let number = self.unique_account_number(AccountKind::Savings);

        log::debug!("Opening savings account {number} for {}", owner.name());

        let account = SavingsAccount::open(number, initial_balance, owner, min_balance, interest_rate);
        self.accounts.push(Account::Savings(account));

        return match self.accounts.last_mut() {
            Some(Account::Savings(account)) => account,
            _ => unreachable!("a savings account was just pushed"),
        };
    }

    pub fn create_current_account(
        &mut self,
        owner: Person,
        initial_balance: Money,
        overdraft_limit: Money,
    ) -> &mut CurrentAccount {
        let number = self.unique_account_number(AccountKind::Current);

        log::debug!("Opening current account {number} for {}", owner.name());

        let account = CurrentAccount::open(number, initial_balance, owner, overdraft_limit);
        self.accounts.push(Account::Current(account));

        return match self.accounts.last_mut() {
            Some(Account::Current(account)) => account,
            _ => unreachable!("a current account was just pushed"),
        };
    }

    pub fn create_fixed_deposit_account(
        &mut self,
        owner: Person,
        deposit_amount: Money,
        term_months: u32,
        interest_rate: f64,
    ) -> &mut FixedDepositAccount {
        let number = self.unique_account_number(AccountKind::FixedDeposit);

        log::debug!("Opening fixed deposit account {number} for {}", owner.name());

        let account =
            FixedDepositAccount::open(number, deposit_amount, owner, term_months, interest_rate);
        self.accounts.push(Account::FixedDeposit(account));

        return match self.accounts.last_mut() {
            Some(Account::FixedDeposit(account)) => account,
            _ => unreachable!("a fixed deposit account was just pushed"),
        };
    }

    /// Linear scan for the first account with the given number.
    pub fn find_account_by_number(&self, number: &str) -> Option<&Account> {
        return self
            .accounts
            .iter()
            .find(|account| account.number().as_str() == number);
    }

    pub fn find_account_by_number_mut(&mut self, number: &str) -> Option<&mut Account> {
        return self
            .accounts
            .iter_mut()
            .find(|account| account.number().as_str() == number);
    }

    /// Every account, in creation order.
    pub fn accounts(&self) -> &[Account] {
        return &self.accounts;
    }

    /// Accounts whose owner has the same id, in creation order.
    pub fn accounts_by_owner(&self, owner: &Person) -> Vec<&Account> {
        return self
            .accounts
            .iter()
            .filter(|account| account.owner().id() == owner.id())
            .collect();
    }

    /// Credits one period of interest on every savings account, in
    /// registry order. Meant to be driven by a periodic batch job.
    pub fn apply_interest_to_all_savings(&mut self) {
        for account in self.accounts.iter_mut() {
            if let Account::Savings(savings) = account {
                log::debug!("Applying interest to {}", savings.number());
                savings.apply_interest();
            }
        }
    }

    /// One serializable report row per account, in creation order.
    pub fn build_report(&self) -> Vec<AccountReport> {
        return self.accounts.iter().map(AccountReport::from_account).collect();
    }

    fn unique_account_number(&self, kind: AccountKind) -> AccountNumber {
        // The random part is six digits, retry the rare collision
        loop {
            let number = AccountNumber::generate(kind.prefix());

            if self.find_account_by_number(number.as_str()).is_none() {
                return number;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::{BankOperations, TransactionType};

    fn build_person(name: &str) -> Person {
        return Person::new(name.to_string(), format!("{name}@example.com"));
    }

    fn build_system() -> BankingSystem {
        return BankingSystem::new();
    }

    #[test]
    fn factories_assign_variant_prefixes() {
        let mut bank = build_system();
        let owner = build_person("alice");

        let savings = bank
            .create_savings_account(owner.clone(), Money::from_units(100), Money::ZERO, 0.05)
            .number()
            .clone();
        let current = bank
            .create_current_account(owner.clone(), Money::ZERO, Money::from_units(100))
            .number()
            .clone();
        let fixed = bank
            .create_fixed_deposit_account(owner, Money::from_units(1_000), 12, 0.07)
            .number()
            .clone();

        assert!(savings.as_str().starts_with("SAV-"));
        assert!(current.as_str().starts_with("CUR-"));
        assert!(fixed.as_str().starts_with("FIX-"));
    }

    #[test]
    fn consecutive_accounts_get_distinct_numbers() {
        let mut bank = build_system();
        let owner = build_person("alice");

        let first = bank
            .create_savings_account(owner.clone(), Money::ZERO, Money::ZERO, 0.05)
            .number()
            .clone();
        let second = bank
            .create_savings_account(owner, Money::ZERO, Money::ZERO, 0.05)
            .number()
            .clone();

        assert_ne!(first, second);
    }

    #[test]
    fn find_account_by_number() {
        let mut bank = build_system();
        let owner = build_person("alice");

        let number = bank
            .create_savings_account(owner, Money::from_units(100), Money::ZERO, 0.05)
            .number()
            .clone();

        let found = bank.find_account_by_number(number.as_str());
        assert!(found.is_some());
        assert_eq!(found.unwrap().balance(), Money::from_units(100));

        assert!(bank.find_account_by_number("SAV-000000x").is_none());
    }

    #[test]
    fn new_accounts_self_record_their_initial_deposit() {
        let mut bank = build_system();
        let owner = build_person("alice");

        let account = bank.create_savings_account(owner, Money::from_units(100), Money::ZERO, 0.05);

        assert_eq!(account.ledger().len(), 1);

        let head = account.ledger().recent(1)[0];
        assert_eq!(head.tx_type(), TransactionType::Deposit);
        assert_eq!(head.description(), "Initial deposit");
    }

    #[test]
    fn accounts_are_listed_in_creation_order() {
        let mut bank = build_system();
        let owner = build_person("alice");

        let first = bank
            .create_current_account(owner.clone(), Money::ZERO, Money::ZERO)
            .number()
            .clone();
        let second = bank
            .create_savings_account(owner, Money::ZERO, Money::ZERO, 0.05)
            .number()
            .clone();

        let numbers: Vec<_> = bank
            .accounts()
            .iter()
            .map(|account| account.number().clone())
            .collect();

        assert_eq!(numbers, vec![first, second]);
    }

    #[test]
    fn accounts_by_owner_filters_on_owner_id() {
        let mut bank = build_system();
        let alice = build_person("alice");
        let bob = build_person("bob");

        let alice_savings = bank
            .create_savings_account(alice.clone(), Money::ZERO, Money::ZERO, 0.05)
            .number()
            .clone();
        bank.create_current_account(bob.clone(), Money::ZERO, Money::ZERO);
        let alice_current = bank
            .create_current_account(alice.clone(), Money::ZERO, Money::ZERO)
            .number()
            .clone();

        let owned: Vec<_> = bank
            .accounts_by_owner(&alice)
            .iter()
            .map(|account| account.number().clone())
            .collect();

        assert_eq!(owned, vec![alice_savings, alice_current]);
        assert_eq!(bank.accounts_by_owner(&bob).len(), 1);

        let stranger = build_person("carol");
        assert!(bank.accounts_by_owner(&stranger).is_empty());
    }

    #[test]
    fn interest_batch_touches_only_savings_accounts() {
        let mut bank = build_system();
        let owner = build_person("alice");

        let savings = bank
            .create_savings_account(owner.clone(), Money::from_units(100), Money::ZERO, 0.05)
            .number()
            .clone();
        let current = bank
            .create_current_account(owner.clone(), Money::from_units(100), Money::ZERO)
            .number()
            .clone();
        let fixed = bank
            .create_fixed_deposit_account(owner, Money::from_units(100), 12, 0.07)
            .number()
            .clone();

        bank.apply_interest_to_all_savings();

        assert_eq!(
            bank.find_account_by_number(savings.as_str()).unwrap().balance(),
            Money::from_units(105)
        );
        assert_eq!(
            bank.find_account_by_number(current.as_str()).unwrap().balance(),
            Money::from_units(100)
        );
        assert_eq!(
            bank.find_account_by_number(fixed.as_str()).unwrap().balance(),
            Money::from_units(100)
        );
    }

    #[test]
    fn build_report_has_one_row_per_account() {
        let mut bank = build_system();
        let owner = build_person("alice");

        bank.create_savings_account(owner.clone(), Money::from_units(100), Money::ZERO, 0.05);
        bank.create_current_account(owner, Money::ZERO, Money::from_units(100));

        let report = bank.build_report();

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].kind, "Savings");
        assert_eq!(report[0].balance, "100");
        assert_eq!(report[1].kind, "Current");
        assert_eq!(report[1].balance, "0");
    }
}
