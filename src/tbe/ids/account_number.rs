use std::fmt;

use uuid::Uuid;

/// Human-readable account identifier, e.g. `SAV-493021`.
///
/// The prefix names the account variant and is relied on by display and
/// lookup flows, the six digits are drawn from a random uuid. Uniqueness
/// within a registry is enforced by the registry itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn generate(prefix: &str) -> Self {
        let digits = Uuid::new_v4().as_u128() % 1_000_000;

        return Self(format!("{prefix}-{digits:06}"));
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
