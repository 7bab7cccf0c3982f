mod account;
mod current;
mod fixed_deposit;
mod savings;

pub use account::{
    Account,
    AccountData,
    AccountKind,
    AccountOperationError,
    BankOperations,
};
pub use current::CurrentAccount;
pub use fixed_deposit::FixedDepositAccount;
pub use savings::SavingsAccount;
