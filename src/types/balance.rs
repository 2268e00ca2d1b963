//! Balance data models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which balance to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Funds available for disbursement
    #[default]
    Cash,
    /// Funds not yet settled
    Holding,
    /// Tax balance
    Tax,
}

impl AccountType {
    /// Wire name of the account type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::Holding => "HOLDING",
            Self::Tax => "TAX",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CASH" => Ok(Self::Cash),
            "HOLDING" => Ok(Self::Holding),
            "TAX" => Ok(Self::Tax),
            _ => Err(Error::Configuration(format!(
                "Invalid account type: {s}. Must be 'CASH', 'HOLDING' or 'TAX'"
            ))),
        }
    }
}

/// Account balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Balance in the account currency
    pub balance: i64,
}
