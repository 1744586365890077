use axum::extract::State;
use axum::Json;
use axum_macros::debug_handler;

use crate::error::api::ApiError;
use crate::response::market::MarketCap;
use crate::state::common::CommonState;

#[debug_handler]
pub async fn get_market_cap(
    State(state): State<CommonState>,
) -> Result<Json<MarketCap>, ApiError> {
    let market_cap = state.market_service.market_cap().await?;

    Ok(Json(MarketCap::from(market_cap)))
}
