use axum::extract::State;
use axum::Json;
use axum_macros::debug_handler;

use crate::error::api::ApiError;
use crate::response::supply::SupplyValue;
use crate::state::common::CommonState;

#[debug_handler]
pub async fn get_total_supply(
    State(state): State<CommonState>,
) -> Result<Json<SupplyValue>, ApiError> {
    let total_supply = state.supply_service.total_supply().await?;

    Ok(Json(SupplyValue::from(total_supply)))
}

#[debug_handler]
pub async fn get_circulating_supply(
    State(state): State<CommonState>,
) -> Result<Json<SupplyValue>, ApiError> {
    let circulating_supply = state.supply_service.circulating_supply().await?;

    Ok(Json(SupplyValue::from(circulating_supply)))
}
