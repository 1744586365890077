use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceError {
    #[error("Price request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Price API responded with status {0}")]
    Status(u16),
    #[error("Malformed price response: {0}")]
    Malformed(String),
    #[error("No {currency} price for {asset_id}")]
    Missing { asset_id: String, currency: String },
}
