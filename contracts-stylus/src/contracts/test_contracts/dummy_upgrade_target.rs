//! A stand-in implementation for the LITHplus proxy, used to observe upgrades.
//!
//! It declares no storage, so pointing the proxy at it and back leaves the
//! LITHplus state held by the proxy untouched.

use alloc::vec::Vec;
use stylus_sdk::prelude::*;

#[solidity_storage]
#[entrypoint]
struct DummyUpgradeTargetContract;

#[external]
impl DummyUpgradeTargetContract {
    /// Always `true`. Only reachable through a proxy once the proxy has been upgraded to this contract.
    pub fn is_dummy_upgrade_target(&self) -> Result<bool, Vec<u8>> {
        Ok(true)
    }
}
