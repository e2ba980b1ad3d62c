use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `transactions` table. `transaction_type` holds the label, not
/// the numeric code.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub origin: String,
    pub transaction_type: String,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}
