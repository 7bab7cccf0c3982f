mod banking_system;

pub use banking_system::BankingSystem;
