use alloy::providers::DynProvider;
use alloy::sol;
use axum::async_trait;
use shared::balance::Amount;
use shared::id::EvmAddress;

use crate::appstate::AppState;

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IErc20Supply {
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
    }
}

/// Read-only view of the configured ERC-20 contract at the latest block.
#[derive(Clone)]
pub struct TokenRepository {
    provider: DynProvider,
    token: EvmAddress,
}

#[async_trait]
pub trait TokenRepositoryTrait: Send + Sync {
    async fn total_supply(&self) -> Result<Amount, String>;

    async fn balance_of(&self, owner: &EvmAddress) -> Result<Amount, String>;
}

impl TokenRepository {
    pub fn new(app_state: AppState) -> Self {
        Self {
            provider: app_state.get_provider(),
            token: app_state.config().token_address,
        }
    }
}

#[async_trait]
impl TokenRepositoryTrait for TokenRepository {
    async fn total_supply(&self) -> Result<Amount, String> {
        let contract =
            IErc20Supply::new(self.token.as_address(), self.provider.clone());

        contract
            .totalSupply()
            .call()
            .await
            .map(Amount::from)
            .map_err(|e| e.to_string())
    }

    async fn balance_of(&self, owner: &EvmAddress) -> Result<Amount, String> {
        tracing::debug!(token = %self.token, %owner, "Querying balance");

        let contract =
            IErc20Supply::new(self.token.as_address(), self.provider.clone());

        contract
            .balanceOf(owner.as_address())
            .call()
            .await
            .map(Amount::from)
            .map_err(|e| e.to_string())
    }
}
