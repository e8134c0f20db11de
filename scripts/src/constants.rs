//! Constants used in the deploy scripts

use std::time::Duration;

/// The number of confirmations to wait for each transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// How long to wait on any single network request before giving up
pub const NETWORK_TIMEOUT: Duration = Duration::from_millis(300_000);

/// The number of bytes stored in a single storage slot
pub const NUM_BYTES_STORAGE_SLOT: usize = 32;

/// The number of bytes in an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

// ------------
// | NETWORKS |
// ------------

/// The environment variable holding the deployer's private key
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// The environment variable holding the Rinkeby RPC URL
pub const RINKEBY_PROVIDER_URL_ENV_VAR: &str = "RINKEBY_PROVIDER_URL";

/// The environment variable holding the Ropsten RPC URL
pub const ROPSTEN_PROVIDER_URL_ENV_VAR: &str = "ROPSTEN_PROVIDER_URL";

/// The environment variable holding the Kovan RPC URL
pub const KOVAN_PROVIDER_URL_ENV_VAR: &str = "KOVAN_PROVIDER_URL";

/// The environment variable holding the devnet RPC URL
pub const DEVNET_PROVIDER_URL_ENV_VAR: &str = "DEVNET_PROVIDER_URL";

/// The RPC URL of a local Nitro devnet
pub const DEFAULT_DEVNET_RPC_URL: &str = "http://localhost:8547";

/// The gas price used on Rinkeby, in wei (1 gwei)
pub const RINKEBY_GAS_PRICE: u128 = 1_000_000_000;

/// The gas price used on Ropsten, in wei (3 gwei)
pub const ROPSTEN_GAS_PRICE: u128 = 3_000_000_000;

/// The gas price used on Kovan, in wei (1 gwei)
pub const KOVAN_GAS_PRICE: u128 = 1_000_000_000;

/// The environment variable holding the address of the deployed LITHplus contract
pub const LITHPLUS_ADDRESS_ENV_VAR: &str = "LITHPLUS_ADDRESS";

/// The environment variable holding the address of the proxy owner
pub const OWNER_ADDRESS_ENV_VAR: &str = "OWNER_ADDRESS";

// ---------
// | BUILD |
// ---------

/// The name of the crate in this workspace in which the Stylus contracts
/// are defined
pub const STYLUS_CONTRACTS_CRATE_NAME: &str = "contracts-stylus";

/// The name of the WASM file produced by building the Stylus contracts crate
pub const STYLUS_CONTRACTS_WASM_FILE: &str = "contracts_stylus.wasm";

/// The name of the Cargo command
pub const CARGO_COMMAND: &str = "cargo";

/// The name of the build command
pub const BUILD_COMMAND: &str = "build";

/// The target triple for the WASM build target
pub const WASM_TARGET_TRIPLE: &str = "wasm32-unknown-unknown";

/// The nightly toolchain selector
pub const NIGHTLY_TOOLCHAIN_SELECTOR: &str = "+nightly";

/// Nightly Z flags to add to build command
pub const Z_FLAGS: [&str; 3] = [
    "unstable-options",
    "build-std=std,panic_abort",
    "build-std-features=panic_immediate_abort",
];

/// The name of the target directory
pub const TARGET_PATH_SEGMENT: &str = "target";

/// The name of the release directory
pub const RELEASE_PATH_SEGMENT: &str = "release";

/// The extension given to optimized WASM files
pub const OPT_WASM_EXTENSION: &str = "opt.wasm";

/// The name of the `wasm-opt` command
pub const WASM_OPT_COMMAND: &str = "wasm-opt";

/// The size optimization flag for the `wasm-opt` command
pub const SIZE_OPTIMIZATION_FLAG: &str = "-Oz";

/// The maximum size of an uncompressed Stylus contract, in bytes
pub const MAX_CONTRACT_SIZE: u64 = 128 * 1024;

/// Whether an oversized contract fails the build rather than just warning
pub const STRICT_SIZE_CHECK: bool = true;

/// The name of the stylus command
pub const STYLUS_COMMAND: &str = "stylus";

/// The name of the deploy command
pub const DEPLOY_COMMAND: &str = "deploy";

// ---------------
// | DEPLOYMENTS |
// ---------------

/// The default path of the deployments file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The LITHplus contract key in the `deployments.json` file
pub const LITHPLUS_CONTRACT_KEY: &str = "lithplus_contract";

/// The LITHplus proxy contract key in the `deployments.json` file
pub const LITHPLUS_PROXY_CONTRACT_KEY: &str = "lithplus_proxy_contract";

/// The LITHplus proxy admin key in the `deployments.json` file
pub const LITHPLUS_PROXY_ADMIN_KEY: &str = "lithplus_proxy_admin";

/// The dummy upgrade target contract key in the `deployments.json` file
pub const DUMMY_UPGRADE_TARGET_CONTRACT_KEY: &str = "dummy_upgrade_target_contract";

// ---------------
// | URI PRESETS |
// ---------------

/// The base URI of the `lithtoken` preset
pub const LITHTOKEN_BASE_URI: &str = "https://www.lithtoken.io/";

/// The base URI of the `ipfs` preset
pub const IPFS_BASE_URI: &str = "https://ipfs.io/ipfs/";

/// The URI suffixes of the `ipfs` preset, i.e. the published metadata CIDs
pub const IPFS_URI_SUFFIXES: [&str; 2] = [
    "QmQntdqVXEf1coijvwNi3a5CiRrrg3dfAEc3fmFRUsgWyM",
    "QmeMVv4xmRHKu39GomAtt9HAYxQU7cmeJ5QL3fTNvEMD36",
];

/// The URI suffixes of the `sample` preset, served under [`LITHTOKEN_BASE_URI`]
pub const SAMPLE_URI_SUFFIXES: [&str; 2] = ["sample0.pdf", "sample1.pdf"];
