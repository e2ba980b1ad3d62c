use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::transactions::{
    dtos::create_transaction_dto::CreateTransactionDto, enums::transaction_type::TransactionType,
};

/// A money movement as exposed over the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(default)]
    pub origin: String,
    pub transaction_type: TransactionType,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// `created_at` is a placeholder until the store stamps it.
    pub fn new(dto: &CreateTransactionDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            origin: dto.origin.to_owned().unwrap_or_default(),
            transaction_type: dto.transaction_type,
            amount: dto.amount,
            created_at: Utc::now(),
        }
    }
}
