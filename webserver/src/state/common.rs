use crate::appstate::AppState;
use crate::service::market::MarketService;
use crate::service::supply::SupplyService;

#[derive(Clone)]
pub struct CommonState {
    pub supply_service: SupplyService,
    pub market_service: MarketService,
}

impl CommonState {
    pub fn new(data: AppState) -> Self {
        Self {
            supply_service: SupplyService::new(data.clone()),
            market_service: MarketService::new(data),
        }
    }
}
