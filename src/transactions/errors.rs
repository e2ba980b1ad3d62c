use axum::http::StatusCode;
use thiserror::Error;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TransactionsApiError {
    FailedToCreateTransaction,
    FailedToListTransactions,
}

impl TransactionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::FailedToCreateTransaction => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to create transaction".to_string(),
            },
            Self::FailedToListTransactions => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "failed to list transactions".to_string(),
            },
        }
    }
}

/// Conversion failures between [`Transaction`] and [`TransactionRecord`].
///
/// [`Transaction`]: super::models::transaction::Transaction
/// [`TransactionRecord`]: super::models::transaction_record::TransactionRecord
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("invalid {0}: must be a non-nil uuid")]
    InvalidIdentifier(&'static str),
    #[error("unknown transaction type {0:?}")]
    UnknownTransactionType(String),
}

#[derive(Debug, Error)]
pub enum TransactionsError {
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
    #[error(transparent)]
    Mapping(#[from] MappingError),
}
