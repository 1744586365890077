use std::fmt::Display;
use std::str::FromStr;

use alloy::primitives::Address;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid account address {address}: {reason}")]
pub struct AddressError {
    pub address: String,
    pub reason: String,
}

/// Account identifier in canonical form. Parsing accepts any hex casing and
/// does not validate an existing checksum; rendering is always EIP-55.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvmAddress(Address);

impl EvmAddress {
    pub fn as_address(&self) -> Address {
        self.0
    }

    pub fn to_checksum(&self) -> String {
        self.0.to_checksum(None)
    }
}

impl FromStr for EvmAddress {
    type Err = AddressError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Address::from_str(trimmed)
            .map(Self)
            .map_err(|e| AddressError {
                address: trimmed.to_owned(),
                reason: e.to_string(),
            })
    }
}

impl Display for EvmAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_checksum())
    }
}
