//! Integration tests for the LITHplus contracts. These assume that a devnet is already running locally.

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use eyre::{eyre, Result};
use scripts::{
    constants::STRICT_SIZE_CHECK,
    networks::Network,
    types::StylusContract,
    utils::{build_stylus_contract, check_contract_size, setup_client},
};
use std::path::PathBuf;
use test_inventory::{IntegrationTest, TestArgs};

mod cli;
mod constants;
mod test_inventory;
mod tests;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        test,
        priv_key,
        rpc_url,
    } = Cli::parse();

    tracing_subscriber::fmt().init();

    let network = Network::Devnet.config();
    let client = setup_client(network.clone(), rpc_url.clone(), Some(priv_key)).await?;
    let reader = setup_client(network, rpc_url, None).await?;

    let args = TestArgs {
        client,
        reader,
        lithplus_wasm: build(StylusContract::Lithplus)?,
        proxy_wasm: build(StylusContract::LithplusProxy)?,
        dummy_upgrade_target_wasm: build(StylusContract::DummyUpgradeTarget)?,
    };

    let tests = inventory::iter::<IntegrationTest>
        .into_iter()
        .filter(|t| test.as_deref().map_or(true, |filter| t.name.contains(filter)));

    let mut num_run = 0;
    let mut num_failed = 0;
    for IntegrationTest { name, test_fn } in tests {
        num_run += 1;
        match test_fn(args.clone()).await {
            Ok(()) => println!("{} {name}", "PASSED".green().bold()),
            Err(e) => {
                num_failed += 1;
                println!("{} {name}: {e:?}", "FAILED".red().bold());
            }
        }
    }

    if num_failed > 0 {
        return Err(eyre!("{num_failed} of {num_run} tests failed"));
    }

    println!("{}", format!("All {num_run} tests passed").green().bold());
    Ok(())
}

/// Builds and size-checks a contract once, for all the tests to deploy
fn build(contract: StylusContract) -> Result<PathBuf> {
    let wasm_file_path = build_stylus_contract(contract)?;
    check_contract_size(&wasm_file_path, STRICT_SIZE_CHECK)?;
    Ok(wasm_file_path)
}
