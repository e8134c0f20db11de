//! Utilities for the integration tests

use std::future::Future;

use alloy::{
    hex,
    network::TransactionBuilder,
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use contracts_common::{constants::NO_URI, uri::UriTable};
use eyre::{ensure, eyre, Result};
use scripts::{
    errors::ScriptError,
    utils::{
        deploy_proxy, deploy_stylus_contract, initialize_lithplus, lithplus_initialize_calldata,
        read_uri, setup_client, ScriptClient,
    },
};

use crate::{
    constants::{FUNDING_AMOUNT, TEST_BASE_URI, TEST_URI_SUFFIXES},
    test_inventory::TestArgs,
};

/// The URI table deployed in the URI tests
pub(crate) fn test_uri_table() -> UriTable {
    UriTable::new(
        TEST_BASE_URI,
        TEST_URI_SUFFIXES.iter().map(|s| s.to_string()).collect(),
    )
}

/// Deploys a fresh LITHplus contract, initializing it with the given URI table if any.
///
/// The test client becomes the owner of an initialized contract.
pub(crate) async fn deploy_lithplus(args: &TestArgs, table: Option<&UriTable>) -> Result<Address> {
    let lithplus_address = deploy_stylus_contract(&args.client, &args.lithplus_wasm).await?;
    if let Some(table) = table {
        initialize_lithplus(&args.client, lithplus_address, table).await?;
    }

    Ok(lithplus_address)
}

/// Deploys a fresh, uninitialized LITHplus contract behind a fresh proxy administered
/// by `admin`, initializing the contract's state through the proxy.
///
/// Returns the addresses of the proxy and of the implementation.
pub(crate) async fn deploy_lithplus_behind_proxy(
    args: &TestArgs,
    admin: Address,
    table: &UriTable,
) -> Result<(Address, Address)> {
    let implementation = deploy_lithplus(args, None).await?;
    let proxy_address = deploy_proxy(
        &args.client,
        &args.proxy_wasm,
        implementation,
        admin,
        lithplus_initialize_calldata(table),
    )
    .await?;

    Ok((proxy_address, implementation))
}

/// Asserts that the contract at the given address serves the test URI table
pub(crate) async fn assert_test_uris(client: &ScriptClient, lithplus_address: Address) -> Result<()> {
    let table = test_uri_table();
    for (id, suffix) in table.suffixes.iter().enumerate() {
        let uri = read_uri(client, lithplus_address, U256::from(id)).await?;
        ensure!(
            uri == format!("{}{suffix}", table.base_uri),
            "unexpected URI for ID {id}: {uri}"
        );
    }

    let first_unassigned = U256::from(table.suffixes.len());
    assert_no_uri(client, lithplus_address, first_unassigned).await
}

/// Asserts that the given token ID has no URI
pub(crate) async fn assert_no_uri(
    client: &ScriptClient,
    lithplus_address: Address,
    id: U256,
) -> Result<()> {
    let uri = read_uri(client, lithplus_address, id).await?;
    ensure!(uri == NO_URI, "expected no URI for ID {id}, got {uri}");
    Ok(())
}

/// Asserts that the given transaction or call reverts
pub(crate) async fn assert_reverts<T>(
    request: impl Future<Output = Result<T, ScriptError>>,
    description: &str,
) -> Result<()> {
    match request.await {
        Ok(_) => Err(eyre!("{description} did not revert")),
        Err(ScriptError::ContractInteraction(_)) => Ok(()),
        Err(e) => Err(eyre!("{description} failed unexpectedly: {e}")),
    }
}

/// Asserts that the given transaction was mined, and reverted on-chain
pub(crate) async fn assert_reverted_receipt<T>(
    request: impl Future<Output = Result<T, ScriptError>>,
    description: &str,
) -> Result<()> {
    match request.await {
        Ok(_) => Err(eyre!("{description} did not revert")),
        Err(ScriptError::ContractInteraction(msg))
            if msg.starts_with("transaction 0x") && msg.ends_with(" reverted") =>
        {
            Ok(())
        }
        Err(e) => Err(eyre!("{description} was not mined: {e}")),
    }
}

/// Sets up a client signing with a fresh key, funded by the test client
pub(crate) async fn funded_client(args: &TestArgs) -> Result<ScriptClient> {
    let signer = PrivateKeySigner::random();
    let funding_tx = TransactionRequest::default()
        .with_to(signer.address())
        .with_value(U256::from(FUNDING_AMOUNT));

    let receipt = args
        .client
        .provider
        .send_transaction(funding_tx)
        .await?
        .get_receipt()
        .await?;
    ensure!(receipt.status(), "funding {:#x} reverted", signer.address());

    let client = setup_client(
        args.client.network.clone(),
        args.client.rpc_url.clone(),
        Some(hex::encode_prefixed(signer.to_bytes())),
    )
    .await?;
    Ok(client)
}
