use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    app::models::pagination::Pagination,
    transactions::{
        errors::TransactionsError,
        models::{transaction::Transaction, transaction_record::TransactionRecord},
        util::{filter::TransactionFilters, mapper},
    },
};

use super::TransactionStore;

/// Keeps rows in a vector and mimics the Postgres store's ordering and
/// unique primary key.
#[derive(Default)]
pub struct InMemoryTransactionStore {
    records: Mutex<Vec<TransactionRecord>>,
}

impl InMemoryTransactionStore {
    pub fn with_records(records: Vec<TransactionRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn create(&self, transaction: Transaction) -> Result<Transaction, TransactionsError> {
        let mut record = mapper::to_storage(&transaction)?;
        record.created_at = Utc::now();

        let mut records = self.records.lock().unwrap();

        if records.iter().any(|r| r.id == record.id) {
            return Err(TransactionsError::DuplicateKey(format!(
                "Key (id)=({}) already exists.",
                record.id
            )));
        }

        records.push(record.clone());

        Ok(mapper::from_storage(record)?)
    }

    async fn list(
        &self,
        filters: &TransactionFilters,
        pagination: Pagination,
    ) -> Result<Vec<Transaction>, TransactionsError> {
        let mut matching: Vec<TransactionRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| filters.matches(r))
            .cloned()
            .collect();

        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let page = matching
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect();

        Ok(mapper::to_domain_list(page)?)
    }
}
