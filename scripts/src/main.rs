use clap::Parser;
use scripts::{cli::Cli, errors::ScriptError, utils::setup_client};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        network,
        rpc_url,
        priv_key,
        deployments_path,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let network = network.config();
    let rpc_url = network.resolve_rpc_url(rpc_url)?;
    let client = setup_client(network, rpc_url, priv_key).await?;

    command
        .run(&client, &deployments_path)
        .await
        .inspect_err(|e| error!("{e}"))
}
