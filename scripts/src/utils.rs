//! Utilities for the deploy scripts.

use std::{
    fs,
    future::Future,
    iter,
    path::{Path, PathBuf},
    process::{Command, Stdio},
    str::FromStr,
    time::Duration,
};

use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::{Address, Bytes, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_contract::{CallBuilder, CallDecoder};
use alloy_sol_types::SolCall;
use contracts_common::{
    constants::{PROXY_ADMIN_SLOT_LIMBS, PROXY_IMPLEMENTATION_SLOT_LIMBS},
    uri::UriTable,
};
use itertools::Itertools;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::{
    constants::{
        BUILD_COMMAND, CARGO_COMMAND, DEPLOYMENTS_KEY, DEPLOY_COMMAND, MAX_CONTRACT_SIZE,
        NIGHTLY_TOOLCHAIN_SELECTOR, NUM_BYTES_ADDRESS, NUM_BYTES_STORAGE_SLOT,
        NUM_DEPLOY_CONFIRMATIONS, OPT_WASM_EXTENSION, PRIVATE_KEY_ENV_VAR, RELEASE_PATH_SEGMENT,
        SIZE_OPTIMIZATION_FLAG, STYLUS_COMMAND, STYLUS_CONTRACTS_CRATE_NAME,
        STYLUS_CONTRACTS_WASM_FILE, TARGET_PATH_SEGMENT, WASM_OPT_COMMAND, WASM_TARGET_TRIPLE,
        Z_FLAGS,
    },
    errors::ScriptError,
    networks::NetworkConfig,
    solidity::{ILithPlus, ILithPlusProxy},
    types::StylusContract,
};

/// The call builder type used by the scripts
pub type ScriptCallBuilder<'a, C> = CallBuilder<(), &'a DynProvider, C, Ethereum>;

// ----------
// | CLIENT |
// ----------

/// An RPC client bound to a network, signing with the deployer's key if one is configured
#[derive(Clone)]
pub struct ScriptClient {
    /// The RPC provider
    pub provider: DynProvider,
    /// The deployer's signer
    pub signer: Option<PrivateKeySigner>,
    /// The deployer's private key, as given, for the `cargo stylus` CLI
    priv_key: Option<String>,
    /// The connection parameters of the network
    pub network: NetworkConfig,
    /// The RPC URL of the network
    pub rpc_url: String,
}

impl ScriptClient {
    /// Returns the deployer's signer
    pub fn signer(&self) -> Result<&PrivateKeySigner, ScriptError> {
        self.signer.as_ref().ok_or_else(missing_priv_key)
    }

    /// Returns the deployer's address
    pub fn address(&self) -> Result<Address, ScriptError> {
        self.signer().map(|signer| signer.address())
    }

    /// Returns the deployer's private key
    pub fn priv_key(&self) -> Result<&str, ScriptError> {
        self.priv_key.as_deref().ok_or_else(missing_priv_key)
    }

    /// Awaits a network request under the network's timeout,
    /// stringifying its error into the given `ScriptError` variant
    pub async fn timed<T, E: ToString>(
        &self,
        request: impl Future<Output = Result<T, E>>,
        map_err: fn(String) -> ScriptError,
    ) -> Result<T, ScriptError> {
        tokio::time::timeout(self.network.timeout, request)
            .await
            .map_err(|_| {
                ScriptError::Timeout(format!(
                    "no response from {} after {:?}",
                    self.network.name, self.network.timeout
                ))
            })?
            .map_err(|e| map_err(e.to_string()))
    }
}

/// The error for operations that need a private key when none was given
fn missing_priv_key() -> ScriptError {
    ScriptError::MissingConfig(format!(
        "no private key configured, set {PRIVATE_KEY_ENV_VAR} or pass --priv-key"
    ))
}

/// Sets up the client with which to interact with the given network,
/// signing with the given private key if any
pub async fn setup_client(
    network: NetworkConfig,
    rpc_url: String,
    priv_key: Option<String>,
) -> Result<ScriptClient, ScriptError> {
    let url =
        Url::parse(&rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let signer = priv_key
        .as_deref()
        .map(PrivateKeySigner::from_str)
        .transpose()
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let provider = match &signer {
        Some(signer) => DynProvider::new(
            ProviderBuilder::new()
                .wallet(EthereumWallet::from(signer.clone()))
                .on_http(url),
        ),
        None => DynProvider::new(ProviderBuilder::new().on_http(url)),
    };

    let client = ScriptClient {
        provider,
        signer,
        priv_key,
        network,
        rpc_url,
    };

    let chain_id = client
        .timed(
            async { client.provider.get_chain_id().await },
            ScriptError::ClientInitialization,
        )
        .await?;
    info!("Connected to {} (chain ID {chain_id})", client.network.name);

    Ok(client)
}

// ----------------
// | TRANSACTIONS |
// ----------------

/// Sends a transaction at the network's gas price, waits for its confirmation,
/// and ensures it was successful
pub async fn send_tx<C: CallDecoder>(
    client: &ScriptClient,
    tx: ScriptCallBuilder<'_, C>,
) -> Result<TransactionReceipt, ScriptError> {
    let tx = match client.network.gas_price {
        Some(gas_price) => tx.gas_price(gas_price),
        None => tx,
    };

    let receipt = client
        .timed(
            async {
                tx.send()
                    .await
                    .map_err(|e| e.to_string())?
                    .with_required_confirmations(NUM_DEPLOY_CONFIRMATIONS)
                    .get_receipt()
                    .await
                    .map_err(|e| e.to_string())
            },
            ScriptError::ContractInteraction,
        )
        .await?;

    if !receipt.status() {
        return Err(ScriptError::ContractInteraction(format!(
            "transaction {:#x} reverted",
            receipt.transaction_hash
        )));
    }

    Ok(receipt)
}

/// Sends a call and returns the result
pub async fn call_helper<C: CallDecoder + Unpin>(
    client: &ScriptClient,
    call: ScriptCallBuilder<'_, C>,
) -> Result<C::CallOutput, ScriptError> {
    client
        .timed(async { call.call().await }, ScriptError::ContractInteraction)
        .await
}

// ------------
// | CALLDATA |
// ------------

/// Prepare calldata for the LITHplus contract's `initialize` method
pub fn lithplus_initialize_calldata(table: &UriTable) -> Bytes {
    ILithPlus::initializeCall {
        baseUri: table.base_uri.clone(),
        uriSuffixes: table.suffixes.clone(),
    }
    .abi_encode()
    .into()
}

/// Parses optional hex calldata, defaulting to no calldata
pub fn parse_calldata(calldata: Option<&str>) -> Result<Bytes, ScriptError> {
    calldata
        .map(Bytes::from_str)
        .transpose()
        .map(Option::unwrap_or_default)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

/// Parses a hex address
pub fn parse_address(address: &str) -> Result<Address, ScriptError> {
    Address::from_str(address).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

// ---------------
// | DEPLOYMENTS |
// ---------------

/// Reads the deployments file as JSON
pub fn get_json_from_file(file_path: &str) -> Result<Value, ScriptError> {
    let file_contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    serde_json::from_str(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Reads the address stored under the given key of the deployments file
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let parsed_json = get_json_from_file(file_path)?;

    let address = parsed_json[DEPLOYMENTS_KEY][contract_key]
        .as_str()
        .ok_or_else(|| {
            ScriptError::ReadDeployments(format!(
                "could not parse {contract_key} address from deployments file"
            ))
        })?;

    Address::from_str(address).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Stores an address under the given key of the deployments file,
/// creating the file if it doesn't exist
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    if !Path::new(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    let deployments = parsed_json
        .as_object_mut()
        .ok_or_else(|| {
            ScriptError::WriteDeployments("deployments file is not a JSON object".to_string())
        })?
        .entry(DEPLOYMENTS_KEY)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| {
            ScriptError::WriteDeployments(format!("`{DEPLOYMENTS_KEY}` is not a JSON object"))
        })?;
    deployments.insert(
        contract_key.to_string(),
        Value::String(format!("{address:#x}")),
    );

    let file_contents = serde_json::to_string_pretty(&parsed_json)
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    fs::write(file_path, file_contents).map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}

// ---------
// | BUILD |
// ---------

/// Runs the command to completion, failing with the given error if it exits unsuccessfully
fn command_success_or(
    mut cmd: Command,
    map_err: fn(String) -> ScriptError,
    err_msg: &str,
) -> Result<(), ScriptError> {
    let status = cmd.status().map_err(|e| map_err(e.to_string()))?;
    if !status.success() {
        return Err(map_err(format!("{err_msg} ({status})")));
    }

    Ok(())
}

/// Runs the command to completion under the given timeout, killing it if the timeout
/// elapses, and failing with the given error if it exits unsuccessfully
async fn command_success_within(
    mut cmd: tokio::process::Command,
    timeout: Duration,
    map_err: fn(String) -> ScriptError,
    err_msg: &str,
) -> Result<(), ScriptError> {
    let status = tokio::time::timeout(timeout, cmd.kill_on_drop(true).status())
        .await
        .map_err(|_| ScriptError::Timeout(format!("{err_msg} (timed out after {timeout:?})")))?
        .map_err(|e| map_err(e.to_string()))?;
    if !status.success() {
        return Err(map_err(format!("{err_msg} ({status})")));
    }

    Ok(())
}

/// Compiles the given Stylus contract to WASM and optimizes the resulting binary,
/// returning the path to the optimized WASM file.
///
/// Assumes that `cargo`, the `nightly` toolchain, and `wasm-opt` are locally available.
pub fn build_stylus_contract(contract: StylusContract) -> Result<PathBuf, ScriptError> {
    let workspace_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .ok_or_else(|| {
            ScriptError::ContractCompilation(String::from("could not find workspace directory"))
        })?;

    let mut build_cmd = Command::new(CARGO_COMMAND);
    build_cmd
        .current_dir(workspace_path)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    // Use the nightly toolchain, this allows us to use the -Z flags below
    build_cmd.arg(NIGHTLY_TOOLCHAIN_SELECTOR);
    build_cmd.arg(BUILD_COMMAND);
    build_cmd.arg("-r");
    build_cmd.arg("-p");
    build_cmd.arg(STYLUS_CONTRACTS_CRATE_NAME);
    // The contract's feature selects which contract is the entrypoint
    build_cmd.arg("--features");
    build_cmd.arg(contract.to_string());
    build_cmd.arg("--target");
    build_cmd.arg(WASM_TARGET_TRIPLE);
    // Set the Z flags, used to optimize the resulting binary size.
    // See constants.rs for the list of flags.
    let z_flags = iter::repeat("-Z")
        .take(Z_FLAGS.len())
        .interleave_shortest(Z_FLAGS);
    build_cmd.args(z_flags);

    info!("Building `{contract}`");
    command_success_or(
        build_cmd,
        ScriptError::ContractCompilation,
        "failed to build contract WASM",
    )?;

    let target_dir = workspace_path
        .join(TARGET_PATH_SEGMENT)
        .join(WASM_TARGET_TRIPLE)
        .join(RELEASE_PATH_SEGMENT);

    let wasm_file_path = target_dir.join(STYLUS_CONTRACTS_WASM_FILE);
    if !wasm_file_path.exists() {
        return Err(ScriptError::ContractCompilation(format!(
            "could not find contract WASM file at {}",
            wasm_file_path.display()
        )));
    }

    // Every contract is built to the same file, so the optimized
    // output is named after the contract
    let opt_wasm_file_path = target_dir
        .join(contract.to_string())
        .with_extension(OPT_WASM_EXTENSION);

    let mut opt_cmd = Command::new(WASM_OPT_COMMAND);
    opt_cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    opt_cmd.arg(&wasm_file_path);
    opt_cmd.arg("-o");
    opt_cmd.arg(&opt_wasm_file_path);
    opt_cmd.arg(SIZE_OPTIMIZATION_FLAG);

    command_success_or(
        opt_cmd,
        ScriptError::ContractCompilation,
        "failed to optimize contract WASM",
    )?;

    Ok(opt_wasm_file_path)
}

/// Logs the size of the given WASM file, returning it.
///
/// Sizes over the Stylus limit are an error in strict mode, and a warning otherwise.
pub fn check_contract_size(wasm_file_path: &Path, strict: bool) -> Result<u64, ScriptError> {
    let size = fs::metadata(wasm_file_path)
        .map_err(|e| ScriptError::ContractCompilation(e.to_string()))?
        .len();
    info!(
        "{}: {:.2} KiB",
        wasm_file_path.display(),
        size as f64 / 1024.0
    );

    if size > MAX_CONTRACT_SIZE {
        let msg = format!(
            "{} is {size} bytes, over the {MAX_CONTRACT_SIZE} byte limit",
            wasm_file_path.display()
        );
        if strict {
            return Err(ScriptError::ContractCompilation(msg));
        }
        warn!("{msg}");
    }

    Ok(size)
}

// ----------
// | DEPLOY |
// ----------

/// Deploys the given WASM file with `cargo stylus`, returning the address of the contract.
///
/// The address is predicted from the deployer's nonce, and checked to hold code once
/// the deployment completes. The deployment is bounded by the network's timeout.
///
/// `cargo stylus` prices its own transactions, so the network's fixed gas price
/// only applies to the transactions sent through [`send_tx`].
pub async fn deploy_stylus_contract(
    client: &ScriptClient,
    wasm_file_path: &Path,
) -> Result<Address, ScriptError> {
    // Get expected deployment address
    let deployer_address = client.address()?;
    let deployer_nonce = client
        .timed(
            async {
                client
                    .provider
                    .get_transaction_count(deployer_address)
                    .await
            },
            ScriptError::NonceFetching,
        )
        .await?;
    let deployed_address = deployer_address.create(deployer_nonce);

    // Run deploy command
    let mut deploy_cmd = tokio::process::Command::new(CARGO_COMMAND);
    deploy_cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    deploy_cmd.arg(STYLUS_COMMAND);
    deploy_cmd.arg(DEPLOY_COMMAND);
    deploy_cmd.arg("--wasm-file-path");
    deploy_cmd.arg(wasm_file_path);
    deploy_cmd.arg("-e");
    deploy_cmd.arg(&client.rpc_url);
    deploy_cmd.arg("--private-key");
    deploy_cmd.arg(client.priv_key()?);

    command_success_within(
        deploy_cmd,
        client.network.timeout,
        ScriptError::ContractDeployment,
        "failed to deploy Stylus contract",
    )
    .await?;

    let code = client
        .timed(
            async { client.provider.get_code_at(deployed_address).await },
            ScriptError::ContractDeployment,
        )
        .await?;
    if code.is_empty() {
        return Err(ScriptError::ContractDeployment(format!(
            "no code at expected address {deployed_address:#x}"
        )));
    }

    Ok(deployed_address)
}

/// Initializes the LITHplus contract at the given address with the URI table,
/// making the deployer its owner
pub async fn initialize_lithplus(
    client: &ScriptClient,
    lithplus_address: Address,
    table: &UriTable,
) -> Result<TransactionReceipt, ScriptError> {
    let lithplus = ILithPlus::new(lithplus_address, client.provider.clone());
    send_tx(
        client,
        lithplus.initialize(table.base_uri.clone(), table.suffixes.clone()),
    )
    .await
}

/// Deploys the proxy contract from the given WASM file, pointing it at the implementation,
/// handing it to the admin, and calling the implementation with `calldata` if non-empty
pub async fn deploy_proxy(
    client: &ScriptClient,
    proxy_wasm_file_path: &Path,
    implementation: Address,
    admin: Address,
    calldata: Bytes,
) -> Result<Address, ScriptError> {
    let proxy_address = deploy_stylus_contract(client, proxy_wasm_file_path).await?;
    initialize_proxy(client, proxy_address, implementation, admin, calldata).await?;
    Ok(proxy_address)
}

/// Sends the one-shot `initializeProxy` call to a freshly-deployed proxy
pub async fn initialize_proxy(
    client: &ScriptClient,
    proxy_address: Address,
    implementation: Address,
    admin: Address,
    calldata: Bytes,
) -> Result<TransactionReceipt, ScriptError> {
    let proxy = ILithPlusProxy::new(proxy_address, client.provider.clone());
    send_tx(
        client,
        proxy.initializeProxy(implementation, admin, calldata),
    )
    .await
}

/// Points the proxy at a new implementation, calling it with `calldata` if non-empty.
///
/// Must be sent by the proxy admin.
pub async fn upgrade(
    client: &ScriptClient,
    proxy_address: Address,
    implementation: Address,
    calldata: Bytes,
) -> Result<TransactionReceipt, ScriptError> {
    let proxy = ILithPlusProxy::new(proxy_address, client.provider.clone());
    send_tx(client, proxy.upgradeToAndCall(implementation, calldata)).await
}

// ---------
// | READS |
// ---------

/// Reads the URI of the given token ID from a LITHplus contract, or a proxy to one
pub async fn read_uri(
    client: &ScriptClient,
    lithplus_address: Address,
    id: U256,
) -> Result<String, ScriptError> {
    let lithplus = ILithPlus::new(lithplus_address, client.provider.clone());
    call_helper(client, lithplus.uri(id))
        .await
        .map(|ret| ret._0)
}

/// Reads the proxy admin address from its EIP-1967 storage slot
pub async fn read_proxy_admin(
    client: &ScriptClient,
    proxy_address: Address,
) -> Result<Address, ScriptError> {
    read_address_slot(client, proxy_address, U256::from_limbs(PROXY_ADMIN_SLOT_LIMBS)).await
}

/// Reads the proxy implementation address from its EIP-1967 storage slot
pub async fn read_proxy_implementation(
    client: &ScriptClient,
    proxy_address: Address,
) -> Result<Address, ScriptError> {
    read_address_slot(
        client,
        proxy_address,
        U256::from_limbs(PROXY_IMPLEMENTATION_SLOT_LIMBS),
    )
    .await
}

/// Reads an address held in the low bytes of a storage slot
async fn read_address_slot(
    client: &ScriptClient,
    contract_address: Address,
    slot: U256,
) -> Result<Address, ScriptError> {
    let word = client
        .timed(
            async { client.provider.get_storage_at(contract_address, slot).await },
            ScriptError::ContractInteraction,
        )
        .await?;

    Ok(Address::from_slice(
        &word.to_be_bytes::<NUM_BYTES_STORAGE_SLOT>()[NUM_BYTES_STORAGE_SLOT - NUM_BYTES_ADDRESS..],
    ))
}
