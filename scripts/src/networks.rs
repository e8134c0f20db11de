//! The networks the scripts can target, and how to reach each of them

use std::{env, time::Duration};

use clap::ValueEnum;

use crate::{
    constants::{
        DEFAULT_DEVNET_RPC_URL, DEVNET_PROVIDER_URL_ENV_VAR, KOVAN_GAS_PRICE,
        KOVAN_PROVIDER_URL_ENV_VAR, NETWORK_TIMEOUT, RINKEBY_GAS_PRICE,
        RINKEBY_PROVIDER_URL_ENV_VAR, ROPSTEN_GAS_PRICE, ROPSTEN_PROVIDER_URL_ENV_VAR,
    },
    errors::ScriptError,
};

/// A named network
#[derive(ValueEnum, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Network {
    /// A local Nitro devnet
    #[default]
    Devnet,
    /// The Rinkeby testnet
    Rinkeby,
    /// The Ropsten testnet
    Ropsten,
    /// The Kovan testnet
    Kovan,
}

/// Static connection parameters of a network
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    /// The network's name
    pub name: &'static str,
    /// The environment variable holding the network's RPC URL
    pub rpc_url_env_var: &'static str,
    /// The RPC URL used when none is configured
    pub default_rpc_url: Option<&'static str>,
    /// How long to wait on any single request
    pub timeout: Duration,
    /// The fixed gas price of transactions, in wei.
    /// If unset, the gas price is estimated.
    pub gas_price: Option<u128>,
}

impl Network {
    /// Returns the connection parameters of the network
    pub fn config(self) -> NetworkConfig {
        match self {
            Network::Devnet => NetworkConfig {
                name: "devnet",
                rpc_url_env_var: DEVNET_PROVIDER_URL_ENV_VAR,
                default_rpc_url: Some(DEFAULT_DEVNET_RPC_URL),
                timeout: NETWORK_TIMEOUT,
                gas_price: None,
            },
            Network::Rinkeby => NetworkConfig {
                name: "rinkeby",
                rpc_url_env_var: RINKEBY_PROVIDER_URL_ENV_VAR,
                default_rpc_url: None,
                timeout: NETWORK_TIMEOUT,
                gas_price: Some(RINKEBY_GAS_PRICE),
            },
            Network::Ropsten => NetworkConfig {
                name: "ropsten",
                rpc_url_env_var: ROPSTEN_PROVIDER_URL_ENV_VAR,
                default_rpc_url: None,
                timeout: NETWORK_TIMEOUT,
                gas_price: Some(ROPSTEN_GAS_PRICE),
            },
            Network::Kovan => NetworkConfig {
                name: "kovan",
                rpc_url_env_var: KOVAN_PROVIDER_URL_ENV_VAR,
                default_rpc_url: None,
                timeout: NETWORK_TIMEOUT,
                gas_price: Some(KOVAN_GAS_PRICE),
            },
        }
    }
}

impl NetworkConfig {
    /// Picks the RPC URL to use: an explicit override, else the network's
    /// environment variable, else the network's default
    pub fn resolve_rpc_url(&self, rpc_url: Option<String>) -> Result<String, ScriptError> {
        self.resolve_rpc_url_with(rpc_url, |var| env::var(var).ok())
    }

    /// Picks the RPC URL to use, reading the network's environment variable through `lookup`
    pub fn resolve_rpc_url_with(
        &self,
        rpc_url: Option<String>,
        lookup: impl FnOnce(&str) -> Option<String>,
    ) -> Result<String, ScriptError> {
        rpc_url
            .or_else(|| lookup(self.rpc_url_env_var))
            .filter(|url| !url.is_empty())
            .or_else(|| self.default_rpc_url.map(String::from))
            .ok_or_else(|| {
                ScriptError::MissingConfig(format!(
                    "no RPC URL for {}, set {} or pass --rpc-url",
                    self.name, self.rpc_url_env_var
                ))
            })
    }
}
