#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketCap {
    pub circulating_supply: f64,
    pub token_price_usd: f64,
    pub market_cap_usd: f64,
}

impl MarketCap {
    pub fn new(circulating_supply: f64, token_price_usd: f64) -> Self {
        Self {
            circulating_supply,
            token_price_usd,
            market_cap_usd: circulating_supply * token_price_usd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_price_gives_zero_cap() {
        let market_cap = MarketCap::new(850_000.0, 0.0);
        assert_eq!(market_cap.market_cap_usd, 0.0);
        assert_eq!(market_cap.circulating_supply, 850_000.0);
    }

    #[test]
    fn cap_is_supply_times_price() {
        let market_cap = MarketCap::new(850_000.0, 0.5);
        assert_eq!(market_cap.market_cap_usd, 425_000.0);
    }
}
