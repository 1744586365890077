use std::str::FromStr;
use std::time::Duration;

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::reqwest::{Client, Url};
use alloy::transports::http::Http;
use anyhow::Context;

pub fn build_client(
    url: &str,
    timeout: Duration,
) -> anyhow::Result<DynProvider> {
    let url = Url::from_str(url)
        .with_context(|| format!("Invalid RPC url {}", url))?;
    let inner_client = Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build RPC http client")?;

    let transport = Http::with_client(inner_client, url);
    let client = RpcClient::new(transport, false);

    // Read-only calls need no gas, nonce or chain id filling.
    Ok(ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_client(client)
        .erased())
}
