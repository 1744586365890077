use std::sync::Arc;

use alloy::providers::DynProvider;
use anyhow::Context;
use reqwest::Client;
use shared::client::build_client;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    provider: DynProvider,
    http: Client,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let provider = build_client(&config.rpc_url, config.rpc_timeout())
            .context("Error building RPC provider")?;

        let http = Client::builder()
            .timeout(config.price_timeout())
            .build()
            .context("Error building price http client")?;

        Ok(Self {
            provider,
            http,
            config,
        })
    }

    pub fn get_provider(&self) -> DynProvider {
        self.provider.clone()
    }

    pub fn get_http_client(&self) -> Client {
        self.http.clone()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
