use std::sync::Arc;

use crate::appstate::AppState;
use crate::repository::price::{PriceRepository, PriceRepositoryTrait};

const QUOTE_CURRENCY: &str = "usd";

/// Best-effort price lookup. Any upstream failure yields `0.0`, which
/// consumers treat as "price unknown".
#[derive(Clone)]
pub struct PriceService {
    price_repo: Arc<dyn PriceRepositoryTrait>,
}

impl PriceService {
    pub fn new(app_state: AppState) -> Self {
        Self::with_repository(Arc::new(PriceRepository::new(app_state)))
    }

    pub fn with_repository(price_repo: Arc<dyn PriceRepositoryTrait>) -> Self {
        Self { price_repo }
    }

    pub async fn fetch_usd_price(&self, asset_id: &str) -> f64 {
        match self.price_repo.fetch_price(asset_id, QUOTE_CURRENCY).await {
            Ok(price) => price,
            Err(reason) => {
                tracing::warn!(%reason, asset_id, "Price unavailable, using 0");
                0.0
            }
        }
    }
}
