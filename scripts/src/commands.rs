//! Implementations of the various deploy scripts

use std::str::FromStr;

use alloy::primitives::{Address, U256};
use tracing::{info, warn};

use crate::{
    cli::{DeployLithPlusArgs, DeployProxyArgs, DeployStylusArgs, UpgradeArgs, UriArgs},
    constants::{LITHPLUS_PROXY_ADMIN_KEY, STRICT_SIZE_CHECK},
    errors::ScriptError,
    types::StylusContract,
    utils::{
        self, build_stylus_contract, check_contract_size, deploy_stylus_contract,
        initialize_lithplus, parse_address, parse_calldata, read_proxy_admin,
        write_deployed_address, ScriptClient,
    },
};

/// Prints the address of every configured account
pub fn accounts(client: &ScriptClient) -> Result<(), ScriptError> {
    match &client.signer {
        Some(signer) => println!("{:#x}", signer.address()),
        None => warn!("No accounts configured"),
    }

    Ok(())
}

/// Builds, size-checks, and deploys the given Stylus contract,
/// recording its address in the deployments file
pub async fn build_and_deploy_stylus_contract(
    contract: StylusContract,
    client: &ScriptClient,
    deployments_path: &str,
) -> Result<Address, ScriptError> {
    if contract.is_test_contract() {
        warn!("Deploying `{contract}` - THIS SHOULD ONLY BE DONE FOR TESTING");
    }

    let wasm_file_path = build_stylus_contract(contract)?;
    check_contract_size(&wasm_file_path, STRICT_SIZE_CHECK)?;

    let address = deploy_stylus_contract(client, &wasm_file_path).await?;
    write_deployed_address(deployments_path, contract.deployments_key(), address)?;
    info!("`{contract}` deployed to: {address:#x}");

    Ok(address)
}

/// Deploys the LITHplus contract and, unless told otherwise, initializes it
pub async fn deploy_lithplus(
    args: DeployLithPlusArgs,
    client: &ScriptClient,
    deployments_path: &str,
) -> Result<Address, ScriptError> {
    // Resolve the URI table first so that a bad manifest fails before deploying
    let table = args.uri.resolve()?;

    let address =
        build_and_deploy_stylus_contract(StylusContract::Lithplus, client, deployments_path)
            .await?;

    if args.uninitialized {
        warn!("LITHplus left uninitialized, anyone may initialize it");
    } else {
        initialize_lithplus(client, address, &table).await?;
        info!(
            "LITHplus initialized with base URI {} and {} URI suffixes",
            table.base_uri,
            table.suffixes.len()
        );
    }

    info!("LITHplus deployed to: {address:#x}");
    Ok(address)
}

/// Deploys the LITHplus proxy in front of an implementation contract
pub async fn deploy_proxy(
    args: DeployProxyArgs,
    client: &ScriptClient,
    deployments_path: &str,
) -> Result<Address, ScriptError> {
    let implementation = parse_address(&args.implementation)?;
    let admin = parse_address(&args.owner)?;
    let calldata = args.init_calldata()?;
    if calldata.is_empty() {
        warn!("Proxy left uninitialized, anyone may initialize LITHplus through it");
    }

    let contract = StylusContract::LithplusProxy;
    let wasm_file_path = build_stylus_contract(contract)?;
    check_contract_size(&wasm_file_path, STRICT_SIZE_CHECK)?;

    let proxy_address =
        utils::deploy_proxy(client, &wasm_file_path, implementation, admin, calldata).await?;
    write_deployed_address(deployments_path, contract.deployments_key(), proxy_address)?;

    let proxy_admin = read_proxy_admin(client, proxy_address).await?;
    write_deployed_address(deployments_path, LITHPLUS_PROXY_ADMIN_KEY, proxy_admin)?;

    info!("LITHplusProxy deployed to: {proxy_address:#x}");
    info!("Proxy admin: {proxy_admin:#x}");
    Ok(proxy_address)
}

/// Deploys any of the Stylus contracts, leaving it uninitialized
pub async fn deploy_stylus(
    args: DeployStylusArgs,
    client: &ScriptClient,
    deployments_path: &str,
) -> Result<Address, ScriptError> {
    build_and_deploy_stylus_contract(args.contract, client, deployments_path).await
}

/// Points a proxy at a new implementation
pub async fn upgrade(args: UpgradeArgs, client: &ScriptClient) -> Result<(), ScriptError> {
    let proxy_address = parse_address(&args.proxy)?;
    let implementation = parse_address(&args.implementation)?;
    let calldata = parse_calldata(args.calldata.as_deref())?;

    utils::upgrade(client, proxy_address, implementation, calldata).await?;

    info!("Proxy {proxy_address:#x} upgraded to implementation {implementation:#x}");
    Ok(())
}

/// Prints the URI of a token
pub async fn read_uri(args: UriArgs, client: &ScriptClient) -> Result<(), ScriptError> {
    let address = parse_address(&args.address)?;
    let id = U256::from_str(&args.id)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;

    let uri = utils::read_uri(client, address, id).await?;
    println!("{uri}");
    Ok(())
}
