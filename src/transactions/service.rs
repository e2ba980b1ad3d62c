use std::sync::Arc;

use async_trait::async_trait;

use crate::app::models::pagination::Pagination;

use super::{
    errors::TransactionsError, models::transaction::Transaction, store::TransactionStore,
    util::filter::TransactionFilters,
};

#[async_trait]
pub trait TransactionService: Send + Sync {
    async fn create_transaction(
        &self,
        transaction: Transaction,
    ) -> Result<Transaction, TransactionsError>;

    async fn list_transactions(
        &self,
        filters: TransactionFilters,
        pagination: Pagination,
    ) -> Result<Vec<Transaction>, TransactionsError>;
}

/// Hands requests straight to the store.
pub struct TransactionsService {
    store: Arc<dyn TransactionStore>,
}

impl TransactionsService {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TransactionService for TransactionsService {
    async fn create_transaction(
        &self,
        transaction: Transaction,
    ) -> Result<Transaction, TransactionsError> {
        self.store.create(transaction).await
    }

    async fn list_transactions(
        &self,
        filters: TransactionFilters,
        pagination: Pagination,
    ) -> Result<Vec<Transaction>, TransactionsError> {
        self.store.list(&filters, pagination).await
    }
}
