pub mod transaction_type;
