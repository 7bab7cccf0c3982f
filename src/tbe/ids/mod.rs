mod account_number;
mod person_id;
mod transaction_id;

pub use account_number::AccountNumber;
pub use person_id::PersonId;
pub use transaction_id::TransactionId;
