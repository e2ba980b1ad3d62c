use axum::http::StatusCode;

use super::models::api_error::ApiError;

/// Failures outside any feature module: middleware errors and unknown routes.
#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
    RouteNotFound,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "The transactions service failed to handle the request.".to_string(),
            },
            Self::RouteNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Route not found.".to_string(),
            },
        }
    }
}
