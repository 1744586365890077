use axum::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::appstate::AppState;
use crate::error::price::PriceError;

#[derive(Clone)]
pub struct PriceRepository {
    http: Client,
    api_url: String,
}

#[async_trait]
pub trait PriceRepositoryTrait: Send + Sync {
    /// Spot price of `asset_id` quoted in `currency`.
    async fn fetch_price(
        &self,
        asset_id: &str,
        currency: &str,
    ) -> Result<f64, PriceError>;
}

impl PriceRepository {
    pub fn new(app_state: AppState) -> Self {
        Self {
            http: app_state.get_http_client(),
            api_url: app_state.config().price_api_url.clone(),
        }
    }
}

#[async_trait]
impl PriceRepositoryTrait for PriceRepository {
    async fn fetch_price(
        &self,
        asset_id: &str,
        currency: &str,
    ) -> Result<f64, PriceError> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[("ids", asset_id), ("vs_currencies", currency)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PriceError::Status(status.as_u16()));
        }

        // {"<asset_id>": {"<currency>": <price>}}
        let body: Value = response
            .json()
            .await
            .map_err(|e| PriceError::Malformed(e.to_string()))?;

        body.get(asset_id)
            .and_then(|quotes| quotes.get(currency))
            .and_then(Value::as_f64)
            .ok_or_else(|| PriceError::Missing {
                asset_id: asset_id.to_string(),
                currency: currency.to_string(),
            })
    }
}
