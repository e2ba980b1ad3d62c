use uuid::Uuid;

use crate::transactions::{
    enums::transaction_type::TransactionType,
    errors::MappingError,
    models::{transaction::Transaction, transaction_record::TransactionRecord},
};

/// Converts an API transaction into its row form. `created_at` is copied as is.
pub fn to_storage(transaction: &Transaction) -> Result<TransactionRecord, MappingError> {
    let id = validate_uuid(transaction.id, "transaction ID")?;
    let user_id = validate_uuid(transaction.user_id, "user ID")?;

    Ok(TransactionRecord {
        id,
        user_id,
        origin: transaction.origin.to_owned(),
        transaction_type: transaction.transaction_type.value().to_string(),
        amount: transaction.amount,
        created_at: transaction.created_at,
    })
}

pub fn from_storage(record: TransactionRecord) -> Result<Transaction, MappingError> {
    let Some(transaction_type) = TransactionType::from_value(&record.transaction_type) else {
        return Err(MappingError::UnknownTransactionType(record.transaction_type));
    };

    Ok(Transaction {
        id: record.id,
        user_id: record.user_id,
        origin: record.origin,
        transaction_type,
        amount: record.amount,
        created_at: record.created_at,
    })
}

/// Fails on the first row that cannot be converted.
pub fn to_domain_list(records: Vec<TransactionRecord>) -> Result<Vec<Transaction>, MappingError> {
    records.into_iter().map(from_storage).collect()
}

fn validate_uuid(id: Uuid, field: &'static str) -> Result<Uuid, MappingError> {
    if id.is_nil() {
        return Err(MappingError::InvalidIdentifier(field));
    }

    Ok(id)
}
