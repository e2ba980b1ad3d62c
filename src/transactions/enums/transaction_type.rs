use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of a transaction. Serialized over the API as its integer code,
/// stored in the database as its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum TransactionType {
    Unspecified,
    Credit,
    Debit,
}

impl TransactionType {
    pub const ALL: [TransactionType; 3] = [Self::Unspecified, Self::Credit, Self::Debit];

    pub fn code(&self) -> i32 {
        match *self {
            Self::Unspecified => 0,
            Self::Credit => 1,
            Self::Debit => 2,
        }
    }

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Unspecified => "TYPE_UNSPECIFIED",
            Self::Credit => "CREDIT TRANSACTION",
            Self::Debit => "DEBIT TRANSACTION",
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl TryFrom<i32> for TransactionType {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("unknown transaction type code {}", code))
    }
}

impl From<TransactionType> for i32 {
    fn from(transaction_type: TransactionType) -> Self {
        transaction_type.code()
    }
}
