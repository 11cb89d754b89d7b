use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::errors::ListingError;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMembersQuery {
    /// Maximum rows to return, 0 for all.
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    /// `id` (default) or `created`.
    pub sort: Option<String>,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for ListingError to implement IntoResponse
pub struct ApiError(pub ListingError);

impl From<ListingError> for ApiError {
    fn from(err: ListingError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            ListingError::GroupNotFound(_) => StatusCode::NOT_FOUND,
            ListingError::InvalidInput(..) => StatusCode::BAD_REQUEST,
            ListingError::StorageError(_)
            | ListingError::FormatError(_)
            | ListingError::LinkError(_)
            | ListingError::DemoContentError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
