//! Type definitions used throughout the scripts

use std::fmt::{self, Display};

use clap::ValueEnum;
use contracts_common::uri::UriTable;

use crate::constants::{
    DUMMY_UPGRADE_TARGET_CONTRACT_KEY, IPFS_BASE_URI, IPFS_URI_SUFFIXES, LITHPLUS_CONTRACT_KEY,
    LITHPLUS_PROXY_CONTRACT_KEY, LITHTOKEN_BASE_URI, SAMPLE_URI_SUFFIXES,
};

/// The possible Stylus contracts to deploy
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum StylusContract {
    /// The LITHplus multi-token contract
    Lithplus,
    /// The LITHplus upgradeable proxy
    LithplusProxy,
    /// The dummy upgrade target contract
    DummyUpgradeTarget,
}

impl StylusContract {
    /// The key under which the contract's address is kept in the deployments file
    pub fn deployments_key(&self) -> &'static str {
        match self {
            StylusContract::Lithplus => LITHPLUS_CONTRACT_KEY,
            StylusContract::LithplusProxy => LITHPLUS_PROXY_CONTRACT_KEY,
            StylusContract::DummyUpgradeTarget => DUMMY_UPGRADE_TARGET_CONTRACT_KEY,
        }
    }

    /// Whether the contract should only ever be deployed for testing
    pub fn is_test_contract(&self) -> bool {
        matches!(self, StylusContract::DummyUpgradeTarget)
    }
}

/// The contract's name is also the crate feature that selects it
impl Display for StylusContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StylusContract::Lithplus => write!(f, "lithplus"),
            StylusContract::LithplusProxy => write!(f, "lithplus-proxy"),
            StylusContract::DummyUpgradeTarget => write!(f, "dummy-upgrade-target"),
        }
    }
}

/// Predefined URI tables to initialize the LITHplus contract with
#[derive(ValueEnum, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum UriPreset {
    /// The LITH token site, with no URI suffixes
    #[default]
    Lithtoken,
    /// The published IPFS metadata
    Ipfs,
    /// Two sample documents on the LITH token site
    Sample,
}

impl UriPreset {
    /// The URI table for the preset
    pub fn uri_table(&self) -> UriTable {
        let (base_uri, suffixes): (&str, &[&str]) = match self {
            UriPreset::Lithtoken => (LITHTOKEN_BASE_URI, &[]),
            UriPreset::Ipfs => (IPFS_BASE_URI, &IPFS_URI_SUFFIXES),
            UriPreset::Sample => (LITHTOKEN_BASE_URI, &SAMPLE_URI_SUFFIXES),
        };

        UriTable::new(
            base_uri,
            suffixes.iter().map(|suffix| suffix.to_string()).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use contracts_common::constants::NO_URI;

    use super::{StylusContract, UriPreset};
    use crate::constants::{DUMMY_UPGRADE_TARGET_CONTRACT_KEY, LITHPLUS_PROXY_CONTRACT_KEY};

    #[test]
    fn test_contract_features() {
        assert_eq!(StylusContract::Lithplus.to_string(), "lithplus");
        assert_eq!(StylusContract::LithplusProxy.to_string(), "lithplus-proxy");
        assert_eq!(
            StylusContract::DummyUpgradeTarget.to_string(),
            "dummy-upgrade-target"
        );
    }

    #[test]
    fn test_deployments_keys() {
        assert_eq!(
            StylusContract::LithplusProxy.deployments_key(),
            LITHPLUS_PROXY_CONTRACT_KEY
        );
        assert_eq!(
            StylusContract::DummyUpgradeTarget.deployments_key(),
            DUMMY_UPGRADE_TARGET_CONTRACT_KEY
        );
        assert!(StylusContract::DummyUpgradeTarget.is_test_contract());
        assert!(!StylusContract::Lithplus.is_test_contract());
    }

    #[test]
    fn test_presets() {
        let lithtoken = UriPreset::Lithtoken.uri_table();
        assert_eq!(lithtoken.base_uri, "https://www.lithtoken.io/");
        assert_eq!(lithtoken.uri(&[0; 4]), NO_URI);

        let ipfs = UriPreset::Ipfs.uri_table();
        assert_eq!(
            ipfs.uri(&[1, 0, 0, 0]),
            "https://ipfs.io/ipfs/QmeMVv4xmRHKu39GomAtt9HAYxQU7cmeJ5QL3fTNvEMD36"
        );

        let sample = UriPreset::Sample.uri_table();
        assert_eq!(sample.uri(&[0; 4]), "https://www.lithtoken.io/sample0.pdf");
        assert_eq!(sample.uri(&[2, 0, 0, 0]), NO_URI);
    }
}
