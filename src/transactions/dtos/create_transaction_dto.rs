use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::transactions::enums::transaction_type::TransactionType;

/// Body of `POST /v1/transactions`. A client supplied `created_at` is ignored,
/// a `transaction_type` outside 0, 1 and 2 fails to decode.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransactionDto {
    #[validate(custom(function = "validate_not_nil"))]
    pub id: Uuid,
    #[validate(custom(function = "validate_not_nil"))]
    pub user_id: Uuid,
    pub origin: Option<String>,
    pub transaction_type: TransactionType,
    #[validate(custom(function = "validate_amount"))]
    pub amount: i64,
}

fn validate_not_nil(value: &Uuid) -> Result<(), ValidationError> {
    if value.is_nil() {
        let mut error = ValidationError::new("required");
        error.message = Some("must be a non-nil uuid.".into());
        return Err(error);
    }

    Ok(())
}

fn validate_amount(value: i64) -> Result<(), ValidationError> {
    if value == 0 {
        let mut error = ValidationError::new("required");
        error.message = Some("amount must be nonzero.".into());
        return Err(error);
    }

    Ok(())
}
