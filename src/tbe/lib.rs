pub mod ids;
pub mod models;
pub mod reports;
pub mod services;

mod money;
mod result;

pub use money::{Money, MoneyError};
pub use result::Result;

pub fn build_banking_system() -> services::BankingSystem {
    return services::BankingSystem::new();
}
