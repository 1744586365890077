use std::fmt::Display;

use alloy::primitives::U256;
use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::BigDecimal;

/// Decimals used by the token unless configured otherwise.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Raw on-chain integer amount, before decimal scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Amount(pub U256);

impl Amount {
    /// Exact `raw / 10^decimals`.
    pub fn to_decimal(&self, decimals: u8) -> BigDecimal {
        let raw =
            BigInt::from_bytes_be(Sign::Plus, &self.0.to_be_bytes::<32>());
        BigDecimal::new(raw, i64::from(decimals))
    }

    /// Human readable quantity, rounded once from the exact decimal.
    /// `None` when it does not fit a finite `f64`.
    pub fn denominate(&self, decimals: u8) -> Option<f64> {
        self.to_decimal(decimals)
            .to_string()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
