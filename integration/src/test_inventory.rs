//! Defines types and utilities for managing the inventory of integration tests

use std::{future::Future, path::PathBuf, pin::Pin};

use eyre::Result;
use scripts::utils::ScriptClient;

/// The arguments provided to each integration test
#[derive(Clone)]
pub struct TestArgs {
    /// The RPC client, signing with the devnet key
    pub client: ScriptClient,
    /// An RPC client without a signer, whose calls are made from the zero address
    pub reader: ScriptClient,
    /// The optimized WASM of the LITHplus contract
    pub lithplus_wasm: PathBuf,
    /// The optimized WASM of the LITHplus proxy contract
    pub proxy_wasm: PathBuf,
    /// The optimized WASM of the dummy upgrade target contract
    pub dummy_upgrade_target_wasm: PathBuf,
}

/// The signature of an integration test
type TestFn = fn(TestArgs) -> Pin<Box<dyn Future<Output = Result<()>>>>;

/// A struct representing an integration test
pub struct IntegrationTest {
    /// The name of the test
    pub name: &'static str,
    /// The test function
    pub test_fn: TestFn,
}

// Collect the integration tests into an iterable
inventory::collect!(IntegrationTest);

/// Macro to register an integration test
#[macro_export]
macro_rules! integration_test {
    ($test_fn:ident) => {
        inventory::submit!($crate::test_inventory::IntegrationTest {
            name: stringify!($test_fn),
            test_fn: move |args| std::boxed::Box::pin($test_fn(args)),
        });
    };
}
