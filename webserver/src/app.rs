use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use anyhow::Context;
use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{BoxError, Json, Router};
use lazy_static::lazy_static;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::appstate::AppState;
use crate::handler::{
    home as home_handlers, market as market_handlers,
    supply as supply_handlers,
};
use crate::state::common::CommonState;

lazy_static! {
    static ref HTTP_TIMEOUT: u64 = 60;
}

pub struct ApplicationServer;

impl ApplicationServer {
    pub async fn serve(app_state: AppState) -> anyhow::Result<()> {
        let config = app_state.config();
        let port = config.port;

        tracing::info!(
            rpc_url = %config.rpc_url,
            token = %config.token_address,
            excluded = config.excluded_addresses.len(),
            asset_id = %config.price_asset_id,
            "Serving token supply"
        );
        let router = Self::router(CommonState::new(app_state));

        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        tracing::info!("🚀 Server has launched on http://{addr}");

        axum::serve(listener, router)
            .with_graceful_shutdown(Self::shutdown_signal())
            .await
            .context("Server error")
    }

    pub fn router(common_state: CommonState) -> Router {
        let routes = Router::new()
            .route("/", get(home_handlers::get_home))
            .route("/health", get(home_handlers::get_health))
            .route("/total_supply", get(supply_handlers::get_total_supply))
            .route(
                "/circulating_supply",
                get(supply_handlers::get_circulating_supply),
            )
            .route("/market_cap", get(market_handlers::get_market_cap))
            .with_state(common_state);

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(HandleErrorLayer::new(Self::handle_timeout_error))
                    .timeout(Duration::from_secs(*HTTP_TIMEOUT))
                    .layer(cors),
            )
            .fallback(Self::handle_404)
    }

    /// Maps tower's `TimeoutLayer` errors to a JSON response.
    async fn handle_timeout_error(
        err: BoxError,
    ) -> (StatusCode, Json<serde_json::Value>) {
        if err.is::<tower::timeout::error::Elapsed>() {
            (
                StatusCode::REQUEST_TIMEOUT,
                Json(json!({
                    "error":
                        format!(
                            "request took longer than the configured {} second timeout",
                            *HTTP_TIMEOUT
                        )
                })),
            )
        } else {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": format!("unhandled internal error: {}", err)
                })),
            )
        }
    }

    /// Resolves once the process receives CTRL+C.
    async fn shutdown_signal() {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
        }
        tracing::warn!("signal shutdown");
    }

    async fn handle_404() -> impl IntoResponse {
        (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "The requested resource does not exist on this server!"
            })),
        )
    }
}
