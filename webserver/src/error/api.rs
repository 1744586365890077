use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::supply::SupplyError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    SupplyError(#[from] SupplyError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::SupplyError(error) => error.into_response(),
        }
    }
}
