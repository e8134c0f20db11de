//! Mirrors OpenZeppelin's `Initializable` contract for protected initialization:
//! https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/utils/Initializable.sol
//!
//! Made simpler because the functions defined here are not modifiers, as in Solidity.
//! Since Stylus does not support constructors, this is also what makes the
//! LITHplus `initialize` method a one-shot stand-in for its constructor.

use alloc::vec::Vec;
use contracts_common::constants::INVALID_VERSION_ERROR_MESSAGE;
use stylus_sdk::{alloy_primitives::U64, prelude::*, storage::StorageU64};

#[solidity_storage]
pub struct Initializable {
    /// The version that this contract has been initialized to.
    /// This is used to prevent re-initialization, but allow for extra
    /// initialization steps to be added in future versions.
    ///
    /// This is particularly relevant for contracts that sit behind a proxy.
    initialized: StorageU64,
}

/// None of the `Initializable` methods are external because they are
/// meant to be called only by the contract that embeds `Initializable`.
impl Initializable {
    /// Initializes this contract with the given version,
    /// reverting if it has already been initialized to this version or later.
    pub fn _initialize(&mut self, version: u64) -> Result<(), Vec<u8>> {
        let version = U64::from_limbs([version]);
        if self.initialized.get() >= version {
            return Err(INVALID_VERSION_ERROR_MESSAGE.to_vec());
        }

        self.initialized.set(version);
        Ok(())
    }
}
