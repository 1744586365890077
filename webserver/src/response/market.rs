use serde::Serialize;

use crate::entity::market::MarketCap as MarketCapEntity;

#[derive(Clone, Debug, Serialize)]
pub struct MarketCap {
    pub market_cap_usd: f64,
    pub circulating_supply: f64,
    pub token_price_usd: f64,
}

impl From<MarketCapEntity> for MarketCap {
    fn from(value: MarketCapEntity) -> Self {
        Self {
            market_cap_usd: value.market_cap_usd,
            circulating_supply: value.circulating_supply,
            token_price_usd: value.token_price_usd,
        }
    }
}
