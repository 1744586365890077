use std::sync::Arc;

use shared::balance::Amount;
use shared::id::EvmAddress;

use crate::appstate::AppState;
use crate::error::supply::SupplyError;
use crate::repository::token::{TokenRepository, TokenRepositoryTrait};

#[derive(Clone)]
pub struct SupplyService {
    token_repo: Arc<dyn TokenRepositoryTrait>,
    excluded_addresses: Arc<[EvmAddress]>,
    decimals: u8,
}

impl SupplyService {
    pub fn new(app_state: AppState) -> Self {
        let excluded_addresses = app_state.config().excluded_addresses.clone();
        let decimals = app_state.config().token_decimals;

        Self::with_repository(
            Arc::new(TokenRepository::new(app_state)),
            excluded_addresses,
            decimals,
        )
    }

    pub fn with_repository(
        token_repo: Arc<dyn TokenRepositoryTrait>,
        excluded_addresses: Vec<EvmAddress>,
        decimals: u8,
    ) -> Self {
        Self {
            token_repo,
            excluded_addresses: excluded_addresses.into(),
            decimals,
        }
    }

    pub async fn total_supply(&self) -> Result<f64, SupplyError> {
        let raw = self.token_repo.total_supply().await.map_err(|reason| {
            tracing::error!(%reason, "Failed to query total supply");
            SupplyError::Rpc(reason)
        })?;

        self.denominate(raw)
    }

    /// Total supply minus the balances of every excluded address. Each raw
    /// value is scaled before it is summed. The result is not clamped.
    pub async fn circulating_supply(&self) -> Result<f64, SupplyError> {
        let total = self.total_supply().await?;

        let mut excluded = Vec::with_capacity(self.excluded_addresses.len());
        for address in self.excluded_addresses.iter() {
            let raw = self
                .token_repo
                .balance_of(address)
                .await
                .map_err(|reason| {
                    tracing::error!(%reason, %address, "Failed to query balance");
                    SupplyError::Rpc(reason)
                })?;
            excluded.push(self.denominate(raw)?);
        }

        let circulating = subtract_excluded(total, &excluded);
        if circulating < 0.0 {
            tracing::warn!(
                total,
                circulating,
                "Excluded balances exceed total supply"
            );
        }

        Ok(circulating)
    }

    fn denominate(&self, amount: Amount) -> Result<f64, SupplyError> {
        amount.denominate(self.decimals).ok_or_else(|| {
            SupplyError::Computation(format!(
                "amount {} with {} decimals is out of range",
                amount, self.decimals
            ))
        })
    }
}

fn subtract_excluded(total: f64, excluded: &[f64]) -> f64 {
    let excluded_sum: f64 = excluded.iter().sum();
    total - excluded_sum
}
