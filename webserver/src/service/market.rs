use crate::appstate::AppState;
use crate::entity::market::MarketCap;
use crate::error::supply::SupplyError;
use crate::service::price::PriceService;
use crate::service::supply::SupplyService;

#[derive(Clone)]
pub struct MarketService {
    supply_service: SupplyService,
    price_service: PriceService,
    asset_id: String,
}

impl MarketService {
    pub fn new(app_state: AppState) -> Self {
        let asset_id = app_state.config().price_asset_id.clone();

        Self::with_services(
            SupplyService::new(app_state.clone()),
            PriceService::new(app_state),
            asset_id,
        )
    }

    pub fn with_services(
        supply_service: SupplyService,
        price_service: PriceService,
        asset_id: String,
    ) -> Self {
        Self {
            supply_service,
            price_service,
            asset_id,
        }
    }

    pub async fn market_cap(&self) -> Result<MarketCap, SupplyError> {
        let circulating_supply =
            self.supply_service.circulating_supply().await?;
        let price = self.price_service.fetch_usd_price(&self.asset_id).await;

        let market_cap = MarketCap::new(circulating_supply, price);
        if !market_cap.market_cap_usd.is_finite() {
            return Err(SupplyError::Computation(format!(
                "market cap of {} at {} is out of range",
                circulating_supply, price
            )));
        }

        Ok(market_cap)
    }
}
