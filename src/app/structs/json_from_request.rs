use axum::Json;
use axum_macros::FromRequest;

use crate::app::models::api_error::ApiError;

/// `Json` whose rejections (bad content type, syntax, shape) all become the
/// 400 `{"message": "Failed to decode request body"}` body.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonFromRequest<T>(pub T);
