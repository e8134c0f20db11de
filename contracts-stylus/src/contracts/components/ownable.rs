//! Mirrors OpenZeppelin's `Ownable` contract for access controls:
//! https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/access/Ownable.sol
//!
//! Since Stylus does not support constructors, the initial owner is set
//! by the embedding contract's initializer via [`Ownable::_transfer_ownership`].

use alloc::vec::Vec;
use contracts_common::constants::{NOT_OWNER_ERROR_MESSAGE, ZERO_ADDRESS_ERROR_MESSAGE};
use stylus_sdk::{alloy_primitives::Address, evm, msg, prelude::*, storage::StorageAddress};

use crate::utils::solidity::OwnershipTransferred;

#[solidity_storage]
pub struct Ownable {
    /// The current owner of the contract
    owner: StorageAddress,
}

#[external]
impl Ownable {
    /// Returns the address of the current owner
    pub fn owner(&self) -> Result<Address, Vec<u8>> {
        Ok(self.owner.get())
    }

    /// Leaves the contract without an owner, disabling all owner-only methods
    pub fn renounce_ownership(&mut self) -> Result<(), Vec<u8>> {
        self._check_owner()?;
        self._transfer_ownership(Address::ZERO);
        Ok(())
    }

    /// Transfers ownership of the contract to a new, non-zero address
    pub fn transfer_ownership(&mut self, new_owner: Address) -> Result<(), Vec<u8>> {
        self._check_owner()?;
        if new_owner == Address::ZERO {
            return Err(ZERO_ADDRESS_ERROR_MESSAGE.to_vec());
        }

        self._transfer_ownership(new_owner);
        Ok(())
    }
}

/// Internal methods
impl Ownable {
    /// Reverts if the caller is not the owner
    pub fn _check_owner(&self) -> Result<(), Vec<u8>> {
        if self.owner.get() != msg::sender() {
            return Err(NOT_OWNER_ERROR_MESSAGE.to_vec());
        }
        Ok(())
    }

    /// Sets the owner without any access checks
    pub fn _transfer_ownership(&mut self, new_owner: Address) {
        let previous_owner = self.owner.get();
        self.owner.set(new_owner);

        evm::log(OwnershipTransferred {
            previous_owner,
            new_owner,
        })
    }
}
