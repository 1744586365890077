use std::time::Duration;

use shared::balance::DEFAULT_DECIMALS;
use shared::id::EvmAddress;
use shared::log_config::LogConfig;

#[derive(clap::Parser, Clone, Debug)]
pub struct AppConfig {
    #[clap(long, env, default_value = "5050")]
    pub port: u16,

    #[clap(long, env, default_value = "https://bsc-dataseed.binance.org/")]
    pub rpc_url: String,

    #[clap(
        long,
        env,
        default_value = "10",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "RPC timeout in seconds"
    )]
    pub rpc_timeout: u64,

    #[clap(
        long,
        env,
        default_value = "0xCAf76feee43a2A7DB0FBe23Ee4018757f352a1ff"
    )]
    pub token_address: EvmAddress,

    #[clap(
        long,
        env,
        value_delimiter = ',',
        default_value = "0x000000000000000000000000000000000000dEaD,0xCAf76feee43a2A7DB0FBe23Ee4018757f352a1ff",
        help = "Addresses whose balances are not circulating"
    )]
    pub excluded_addresses: Vec<EvmAddress>,

    #[clap(long, env, default_value_t = DEFAULT_DECIMALS)]
    pub token_decimals: u8,

    #[clap(
        long,
        env,
        default_value = "https://api.coingecko.com/api/v3/simple/price"
    )]
    pub price_api_url: String,

    #[clap(long, env, default_value = "opinion-finance")]
    pub price_asset_id: String,

    #[clap(
        long,
        env,
        default_value = "10",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Price timeout in seconds"
    )]
    pub price_timeout: u64,

    #[command(flatten)]
    pub log: LogConfig,
}

impl AppConfig {
    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_secs(self.rpc_timeout)
    }

    pub fn price_timeout(&self) -> Duration {
        Duration::from_secs(self.price_timeout)
    }
}
