//! Definitions of CLI arguments and commands for deploy scripts

use std::{fs, path::PathBuf};

use alloy::primitives::Bytes;
use clap::{Args, Parser, Subcommand};
use contracts_common::uri::UriTable;

use crate::{
    commands::{accounts, deploy_lithplus, deploy_proxy, deploy_stylus, read_uri, upgrade},
    constants::{
        DEFAULT_DEPLOYMENTS_PATH, LITHPLUS_ADDRESS_ENV_VAR, OWNER_ADDRESS_ENV_VAR,
        PRIVATE_KEY_ENV_VAR,
    },
    errors::ScriptError,
    networks::Network,
    types::{StylusContract, UriPreset},
    utils::{lithplus_initialize_calldata, parse_calldata, ScriptClient},
};

/// Scripts for deploying and managing the LITHplus contracts
#[derive(Parser)]
pub struct Cli {
    /// The network to run against
    #[arg(short, long, value_enum, default_value_t = Network::Devnet)]
    pub network: Network,

    /// Network RPC URL, overriding the network's provider URL environment variable
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// Private key of the deployer
    #[arg(short, long, env = PRIVATE_KEY_ENV_VAR, hide_env_values = true)]
    pub priv_key: Option<String>,

    /// Path to a `deployments.json` file
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: String,

    /// The script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The available scripts
#[derive(Subcommand)]
pub enum Command {
    /// Print the addresses of the configured accounts
    Accounts,
    /// Deploy the LITHplus contract, initializing it with a URI table
    DeployLithplus(DeployLithPlusArgs),
    /// Deploy the LITHplus upgradeable proxy contract
    DeployProxy(DeployProxyArgs),
    /// Deploy a Stylus contract
    DeployStylus(DeployStylusArgs),
    /// Upgrade the LITHplus implementation behind a proxy
    Upgrade(UpgradeArgs),
    /// Read the URI of a token
    Uri(UriArgs),
}

impl Command {
    /// Runs the command against the given client
    pub async fn run(self, client: &ScriptClient, deployments_path: &str) -> Result<(), ScriptError> {
        match self {
            Command::Accounts => accounts(client),
            Command::DeployLithplus(args) => deploy_lithplus(args, client, deployments_path)
                .await
                .map(|_| ()),
            Command::DeployProxy(args) => deploy_proxy(args, client, deployments_path)
                .await
                .map(|_| ()),
            Command::DeployStylus(args) => deploy_stylus(args, client, deployments_path)
                .await
                .map(|_| ()),
            Command::Upgrade(args) => upgrade(args, client).await,
            Command::Uri(args) => read_uri(args, client).await,
        }
    }
}

/// The URI table to initialize the LITHplus contract with.
///
/// A manifest takes precedence over everything else. Otherwise, the preset's
/// base URI and suffixes are used, unless overridden individually.
/// The `lithtoken` preset is used when no preset is given.
#[derive(Args, Clone, Debug, Default)]
pub struct UriTableArgs {
    /// The preset URI table to start from [default: lithtoken]
    #[arg(long, value_enum)]
    pub preset: Option<UriPreset>,

    /// The base URI, overriding the preset's
    #[arg(long)]
    pub base_uri: Option<String>,

    /// A URI suffix, in token ID order. May be repeated.
    /// Replaces all of the preset's suffixes.
    #[arg(long = "suffix")]
    pub suffixes: Vec<String>,

    /// Path to a JSON manifest of the form
    /// `{"base_uri": "...", "suffixes": ["...", ...]}`
    #[arg(long, conflicts_with_all = ["preset", "base_uri", "suffixes"])]
    pub manifest: Option<PathBuf>,
}

impl UriTableArgs {
    /// Whether any URI table argument was given
    pub fn is_set(&self) -> bool {
        self.preset.is_some()
            || self.base_uri.is_some()
            || !self.suffixes.is_empty()
            || self.manifest.is_some()
    }

    /// Resolves the URI table described by the arguments
    pub fn resolve(&self) -> Result<UriTable, ScriptError> {
        if let Some(manifest) = &self.manifest {
            let contents =
                fs::read_to_string(manifest).map_err(|e| ScriptError::Serde(e.to_string()))?;
            return serde_json::from_str(&contents).map_err(|e| ScriptError::Serde(e.to_string()));
        }

        let mut table = self.preset.unwrap_or_default().uri_table();
        if let Some(base_uri) = &self.base_uri {
            table.base_uri = base_uri.clone();
        }
        if !self.suffixes.is_empty() {
            table.suffixes = self.suffixes.clone();
        }

        Ok(table)
    }
}

/// Deploy the LITHplus contract, initializing it with a URI table
#[derive(Args)]
pub struct DeployLithPlusArgs {
    /// The URI table to initialize the contract with
    #[command(flatten)]
    pub uri: UriTableArgs,

    /// Leave the contract uninitialized, e.g. to initialize it through a proxy
    #[arg(long)]
    pub uninitialized: bool,
}

/// Deploy the LITHplus upgradeable proxy contract.
///
/// Calls made to the proxy by anyone but its admin are forwarded to the implementation contract.
#[derive(Args)]
pub struct DeployProxyArgs {
    /// LITHplus implementation contract address in hex
    #[arg(short, long, env = LITHPLUS_ADDRESS_ENV_VAR)]
    pub implementation: String,

    /// Address of the proxy admin in hex
    #[arg(short, long, env = OWNER_ADDRESS_ENV_VAR)]
    pub owner: String,

    /// Optional calldata, in hex form, with which to
    /// call the implementation contract when initializing the proxy
    #[arg(
        short,
        long,
        conflicts_with_all = ["initialize", "preset", "base_uri", "suffixes", "manifest"]
    )]
    pub calldata: Option<String>,

    /// Initialize the implementation's state through the proxy
    /// with the given URI table, instead of passing raw calldata.
    /// Implied by any URI table argument.
    #[arg(long)]
    pub initialize: bool,

    /// The URI table to initialize the implementation's state with
    #[command(flatten)]
    pub uri: UriTableArgs,
}

impl DeployProxyArgs {
    /// The calldata with which the proxy calls the implementation when initialized:
    /// a LITHplus `initialize` call if a URI table was requested, else the raw calldata
    pub fn init_calldata(&self) -> Result<Bytes, ScriptError> {
        if self.initialize || self.uri.is_set() {
            return Ok(lithplus_initialize_calldata(&self.uri.resolve()?));
        }

        parse_calldata(self.calldata.as_deref())
    }
}

/// Deploy a Stylus contract
#[derive(Args)]
pub struct DeployStylusArgs {
    /// The Stylus contract to deploy
    #[arg(short, long, value_enum)]
    pub contract: StylusContract,
}

/// Upgrade the LITHplus implementation behind a proxy
#[derive(Args)]
pub struct UpgradeArgs {
    /// Address of the proxy contract
    #[arg(long)]
    pub proxy: String,

    /// Address of the new implementation contract
    #[arg(short, long)]
    pub implementation: String,

    /// Optional calldata, in hex form, with which to
    /// call the implementation contract when upgrading
    #[arg(short, long)]
    pub calldata: Option<String>,
}

/// Read the URI of a token
#[derive(Args)]
pub struct UriArgs {
    /// Address of the LITHplus contract, or of a proxy to it
    #[arg(short, long, env = LITHPLUS_ADDRESS_ENV_VAR)]
    pub address: String,

    /// The token ID, in decimal or 0x-prefixed hex
    #[arg(long)]
    pub id: String,
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use clap::Parser;
    use tempdir::TempDir;

    use super::{Cli, Command, UriTableArgs};
    use crate::{
        errors::ScriptError, networks::Network, types::UriPreset,
        utils::lithplus_initialize_calldata,
    };

    /// The common prefix of the `deploy-proxy` command lines
    const DEPLOY_PROXY: [&str; 6] = [
        "scripts",
        "deploy-proxy",
        "--implementation",
        "0x0000000000000000000000000000000000000001",
        "--owner",
        "0x0000000000000000000000000000000000000002",
    ];

    /// Parses a `deploy-proxy` command line with the given extra arguments
    fn parse_deploy_proxy(extra: &[&str]) -> Result<super::DeployProxyArgs, clap::Error> {
        let mut argv: Vec<&str> = DEPLOY_PROXY.to_vec();
        argv.extend_from_slice(extra);

        let cli = Cli::try_parse_from(argv)?;
        let Command::DeployProxy(args) = cli.command else {
            panic!("expected deploy-proxy");
        };
        Ok(args)
    }

    #[test]
    fn test_preset_table() {
        let table = UriTableArgs {
            preset: Some(UriPreset::Ipfs),
            ..Default::default()
        }
        .resolve()
        .unwrap();

        assert_eq!(table, UriPreset::Ipfs.uri_table());
    }

    #[test]
    fn test_overridden_table() {
        let table = UriTableArgs {
            preset: Some(UriPreset::Ipfs),
            base_uri: Some("https://www.lithtoken.io/".to_string()),
            suffixes: vec!["sample0.pdf".to_string()],
            manifest: None,
        }
        .resolve()
        .unwrap();

        assert_eq!(table.base_uri, "https://www.lithtoken.io/");
        assert_eq!(table.suffixes, vec!["sample0.pdf".to_string()]);
    }

    #[test]
    fn test_manifest_table() {
        let dir = TempDir::new("manifest").unwrap();
        let manifest = dir.path().join("manifest.json");
        fs::write(
            &manifest,
            r#"{"base_uri": "https://ipfs.io/ipfs/", "suffixes": ["QmA"]}"#,
        )
        .unwrap();

        let table = UriTableArgs {
            manifest: Some(manifest),
            ..Default::default()
        }
        .resolve()
        .unwrap();

        assert_eq!(table.base_uri, "https://ipfs.io/ipfs/");
        assert_eq!(table.suffixes, vec!["QmA".to_string()]);
    }

    #[test]
    fn test_missing_manifest() {
        let res = UriTableArgs {
            manifest: Some(PathBuf::from("does-not-exist.json")),
            ..Default::default()
        }
        .resolve();

        assert!(matches!(res, Err(ScriptError::Serde(_))));
    }

    #[test]
    fn test_parse_deploy_lithplus() {
        let cli = Cli::try_parse_from([
            "scripts",
            "--network",
            "kovan",
            "--rpc-url",
            "http://localhost:8545",
            "deploy-lithplus",
            "--base-uri",
            "https://www.lithtoken.io/",
            "--suffix",
            "sample0.pdf",
            "--suffix",
            "sample1.pdf",
        ])
        .unwrap();

        assert_eq!(cli.network, Network::Kovan);
        let Command::DeployLithplus(args) = cli.command else {
            panic!("expected deploy-lithplus");
        };
        assert!(!args.uninitialized);

        let table = args.uri.resolve().unwrap();
        assert_eq!(table.uri(&[1, 0, 0, 0]), "https://www.lithtoken.io/sample1.pdf");
    }

    #[test]
    fn test_parse_conflicting_proxy_args() {
        assert!(parse_deploy_proxy(&["--calldata", "0x", "--initialize"]).is_err());
        assert!(parse_deploy_proxy(&["--calldata", "0x", "--preset", "ipfs"]).is_err());
        assert!(parse_deploy_proxy(&["--calldata", "0x", "--manifest", "m.json"]).is_err());
    }

    #[test]
    fn test_proxy_uri_args_imply_initialize() {
        let args = parse_deploy_proxy(&["--preset", "ipfs"]).unwrap();
        assert_eq!(
            args.init_calldata().unwrap(),
            lithplus_initialize_calldata(&UriPreset::Ipfs.uri_table())
        );

        let args = parse_deploy_proxy(&["--suffix", "sample0.pdf"]).unwrap();
        let mut table = UriPreset::Lithtoken.uri_table();
        table.suffixes = vec!["sample0.pdf".to_string()];
        assert_eq!(
            args.init_calldata().unwrap(),
            lithplus_initialize_calldata(&table)
        );

        let args = parse_deploy_proxy(&["--initialize"]).unwrap();
        assert_eq!(
            args.init_calldata().unwrap(),
            lithplus_initialize_calldata(&UriPreset::Lithtoken.uri_table())
        );
    }

    #[test]
    fn test_proxy_raw_calldata() {
        let args = parse_deploy_proxy(&["--calldata", "0xdeadbeef"]).unwrap();
        assert_eq!(&args.init_calldata().unwrap()[..], &[0xde, 0xad, 0xbe, 0xef]);

        let args = parse_deploy_proxy(&[]).unwrap();
        assert!(args.init_calldata().unwrap().is_empty());
    }
}
