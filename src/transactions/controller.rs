use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::{
        create_transaction_dto::CreateTransactionDto,
        get_transactions_filter_dto::GetTransactionsFilterDto,
    },
    errors::TransactionsApiError,
    models::transaction::Transaction,
};

#[tracing::instrument(skip_all, fields(id = %dto.id))]
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<CreateTransactionDto>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if let Err(e) = dto.validate() {
        tracing::debug!(%e, "invalid transaction");
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    let transaction = Transaction::new(&dto);

    match state.transactions.create_transaction(transaction).await {
        Ok(_) => Ok((
            StatusCode::CREATED,
            Json(json!({ "message": "Transaction created successfully" })),
        )),
        Err(e) => {
            tracing::error!(%e);
            Err(TransactionsApiError::FailedToCreateTransaction.value())
        }
    }
}

#[tracing::instrument(skip_all)]
pub async fn get_transactions(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let dto = GetTransactionsFilterDto::from_query(query.as_deref());
    let pagination = dto.pagination();
    let filters = dto.filters();

    match state
        .transactions
        .list_transactions(filters, pagination)
        .await
    {
        Ok(transactions) => Ok(Json(transactions)),
        Err(e) => {
            tracing::error!(%e);
            Err(TransactionsApiError::FailedToListTransactions.value())
        }
    }
}
