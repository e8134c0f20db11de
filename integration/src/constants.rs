//! Constants used in the integration tests

/// The default hostport that the Nitro devnet L2 node runs on
pub(crate) const DEFAULT_DEVNET_HOSTPORT: &str = "http://localhost:8547";

/// The default private key that the Nitro devnet is seeded with
pub(crate) const DEFAULT_DEVNET_PKEY: &str =
    "0xb6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";

/// The base URI deployed in the URI tests
pub(crate) const TEST_BASE_URI: &str = "https://www.lithtoken.io/";

/// The URI suffixes deployed in the URI tests
pub(crate) const TEST_URI_SUFFIXES: [&str; 2] = ["sample0.pdf", "sample1.pdf"];

/// The number of random out-of-range token IDs to query per test
pub(crate) const NUM_FUZZ_IDS: usize = 16;

/// The amount of tokens minted in the token tests
pub(crate) const MINT_AMOUNT: u64 = 100;

/// The amount of tokens transferred in the token tests
pub(crate) const TRANSFER_AMOUNT: u64 = 40;

/// The amount of ETH, in wei, sent to each fresh account the tests transact from
pub(crate) const FUNDING_AMOUNT: u128 = 1_000_000_000_000_000_000;

/// The gas limit of transactions that are expected to revert on-chain,
/// set explicitly to skip gas estimation
pub(crate) const REVERTING_TX_GAS_LIMIT: u64 = 10_000_000;
