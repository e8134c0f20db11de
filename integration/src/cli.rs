//! Definition of the CLI arguments for integration tests

use crate::constants::{DEFAULT_DEVNET_HOSTPORT, DEFAULT_DEVNET_PKEY};
use clap::Parser;

/// CLI tool for running integration tests against a running devnet node.
///
/// Every test deploys the contracts it exercises, so nothing needs to be deployed beforehand.
#[derive(Parser)]
pub(crate) struct Cli {
    /// Only run the tests whose name contains this string
    #[arg(short, long)]
    pub(crate) test: Option<String>,

    /// Devnet private key, defaults to default Nitro devnet private key
    #[arg(short, long, default_value = DEFAULT_DEVNET_PKEY)]
    pub(crate) priv_key: String,

    /// Devnet RPC URL, defaults to default Nitro devnet hostport
    #[arg(short, long, default_value = DEFAULT_DEVNET_HOSTPORT)]
    pub(crate) rpc_url: String,
}
