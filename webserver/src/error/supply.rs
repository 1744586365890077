use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::response::api::ApiErrorResponse;

#[derive(Error, Debug)]
pub enum SupplyError {
    #[error("Chain RPC error: {0}")]
    Rpc(String),
    #[error("Computation error: {0}")]
    Computation(String),
}

impl IntoResponse for SupplyError {
    fn into_response(self) -> Response {
        let status_code = match self {
            SupplyError::Rpc(_) | SupplyError::Computation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        ApiErrorResponse::send(status_code.as_u16(), self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[tokio::test]
    async fn rpc_error_is_500_with_error_key() {
        let response =
            SupplyError::Rpc("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Chain RPC error: connection refused");
    }

    #[tokio::test]
    async fn computation_error_has_distinct_message() {
        let response = SupplyError::Computation("overflow".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Computation error: overflow");
    }
}
