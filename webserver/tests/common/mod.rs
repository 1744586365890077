#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use alloy::primitives::U256;
use axum::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use clap::Parser;
use shared::balance::Amount;
use shared::id::EvmAddress;
use tower::ServiceExt;
use webserver::appstate::AppState;
use webserver::config::AppConfig;
use webserver::repository::token::TokenRepositoryTrait;

/// Nothing listens here, so every call is refused.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

pub const BURN_ADDRESS: &str = "0x000000000000000000000000000000000000dEaD";
pub const TREASURY_ADDRESS: &str = "0xCAf76feee43a2A7DB0FBe23Ee4018757f352a1ff";

pub fn tokens(whole: u128) -> Amount {
    Amount(U256::from(whole) * U256::from(10u128.pow(18)))
}

pub fn address(value: &str) -> EvmAddress {
    value.parse().unwrap()
}

pub fn app_state(rpc_url: &str, price_api_url: &str) -> AppState {
    let config = AppConfig::parse_from([
        "webserver",
        "--rpc-url",
        rpc_url,
        "--rpc-timeout",
        "2",
        "--price-api-url",
        price_api_url,
        "--price-timeout",
        "2",
    ]);

    AppState::new(Arc::new(config)).unwrap()
}

/// In-memory token contract that records which owners were queried.
#[derive(Default)]
pub struct FakeToken {
    pub total_supply: Option<Amount>,
    pub balances: HashMap<EvmAddress, Amount>,
    pub queried: Mutex<Vec<String>>,
}

impl FakeToken {
    pub fn new(total_supply: Amount) -> Self {
        Self {
            total_supply: Some(total_supply),
            ..Self::default()
        }
    }

    pub fn with_balance(mut self, owner: &str, amount: Amount) -> Self {
        self.balances.insert(address(owner), amount);
        self
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenRepositoryTrait for FakeToken {
    async fn total_supply(&self) -> Result<Amount, String> {
        self.total_supply
            .ok_or_else(|| "execution reverted".to_string())
    }

    async fn balance_of(&self, owner: &EvmAddress) -> Result<Amount, String> {
        self.queried.lock().unwrap().push(owner.to_string());
        self.balances
            .get(owner)
            .copied()
            .ok_or_else(|| format!("no balance for {}", owner))
    }
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

pub async fn get_json(
    router: Router,
    uri: &str,
) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(router, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}
