mod accounts;
mod person;
mod transactions;

pub use accounts::{
    Account,
    AccountData,
    AccountKind,
    AccountOperationError,
    BankOperations,
    CurrentAccount,
    FixedDepositAccount,
    SavingsAccount,
};
pub use person::Person;
pub use transactions::{Ledger, Transaction, TransactionType};
