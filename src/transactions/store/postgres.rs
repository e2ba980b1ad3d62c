use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::{
    app::{
        models::pagination::Pagination,
        util::sqlx::{get_code_from_db_err, get_detail_from_db_err, SqlStateCodes},
    },
    transactions::{
        errors::TransactionsError,
        models::{transaction::Transaction, transaction_record::TransactionRecord},
        util::{filter::TransactionFilters, mapper},
    },
};

use super::TransactionStore;

pub struct PgTransactionStore {
    pool: PgPool,
}

impl PgTransactionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn create(&self, transaction: Transaction) -> Result<Transaction, TransactionsError> {
        let mut record = mapper::to_storage(&transaction)?;
        record.created_at = Utc::now();

        let sqlx_result = sqlx::query_as::<_, TransactionRecord>(
            "
            INSERT INTO transactions (
                id, user_id, origin, transaction_type, amount, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, origin, transaction_type, amount, created_at
            ",
        )
        .bind(&record.id)
        .bind(&record.user_id)
        .bind(&record.origin)
        .bind(&record.transaction_type)
        .bind(&record.amount)
        .bind(&record.created_at)
        .fetch_one(&self.pool)
        .await;

        match sqlx_result {
            Ok(created) => Ok(mapper::from_storage(created)?),
            Err(e) => {
                let Some(db_err) = e.as_database_error() else {
                    return Err(TransactionsError::Storage(e));
                };

                match get_code_from_db_err(db_err).as_deref() {
                    Some(SqlStateCodes::UNIQUE_VIOLATION) => Err(TransactionsError::DuplicateKey(
                        get_detail_from_db_err(db_err),
                    )),
                    _ => Err(TransactionsError::Storage(e)),
                }
            }
        }
    }

    async fn list(
        &self,
        filters: &TransactionFilters,
        pagination: Pagination,
    ) -> Result<Vec<Transaction>, TransactionsError> {
        let sql = filters.to_sql();

        let mut sqlx = sqlx::query_as::<_, TransactionRecord>(&sql);

        for option in filters.options() {
            sqlx = sqlx.bind(option.bind_value());
        }
        sqlx = sqlx.bind(pagination.limit()).bind(pagination.offset());

        let records = sqlx.fetch_all(&self.pool).await?;

        Ok(mapper::to_domain_list(records)?)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::postgres::PgPoolOptions;
    use uuid::Uuid;

    use crate::transactions::enums::transaction_type::TransactionType;

    use super::*;

    // Needs a database with the `transactions` table from sql/schema.sql:
    // DATABASE_URL=... cargo test -- --ignored
    #[tokio::test]
    #[ignore]
    async fn create_then_list_against_postgres() {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await
            .expect("failed to connect to database");
        let store = PgTransactionStore::new(pool);

        let origin = format!("test-{}", Uuid::new_v4());
        let client_time = chrono::DateTime::<Utc>::default();
        let transaction = Transaction {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            origin: origin.to_owned(),
            transaction_type: TransactionType::Debit,
            amount: -75,
            created_at: client_time,
        };

        let created = store.create(transaction.clone()).await.unwrap();
        assert_ne!(created.created_at, client_time);
        assert_eq!(created.id, transaction.id);
        assert_eq!(created.transaction_type, TransactionType::Debit);

        let duplicate = store.create(transaction.clone()).await;
        assert!(matches!(duplicate, Err(TransactionsError::DuplicateKey(_))));

        let filters = TransactionFilters::default().with_origin(origin);
        let listed = store.list(&filters, Pagination::default()).await.unwrap();
        assert_eq!(listed, vec![created]);
    }
}
