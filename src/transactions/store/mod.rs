use async_trait::async_trait;

use crate::app::models::pagination::Pagination;

use super::{
    errors::TransactionsError, models::transaction::Transaction, util::filter::TransactionFilters,
};

#[cfg(test)]
pub mod memory;
pub mod postgres;

/// Persistence for transactions.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Insert `transaction`, stamping `created_at` with the current time.
    ///
    /// A second insert with the same id fails with
    /// [`TransactionsError::DuplicateKey`].
    async fn create(&self, transaction: Transaction) -> Result<Transaction, TransactionsError>;

    /// One page of the transactions matching `filters`, oldest first. An
    /// empty page is an empty vector.
    async fn list(
        &self,
        filters: &TransactionFilters,
        pagination: Pagination,
    ) -> Result<Vec<Transaction>, TransactionsError>;
}
