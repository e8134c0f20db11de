//! A multi-token component, tracking balances of many token IDs per account.
//!
//! Follows the shape of OpenZeppelin's `ERC1155`:
//! https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/token/ERC1155/ERC1155.sol
//!
//! Receiver acceptance checks and ERC-165 introspection are not implemented,
//! so this is not a compliant ERC-1155 token.

use alloc::vec::Vec;
use contracts_common::constants::{
    INSUFFICIENT_BALANCE_ERROR_MESSAGE, LENGTH_MISMATCH_ERROR_MESSAGE,
    NOT_APPROVED_ERROR_MESSAGE, OVERFLOW_ERROR_MESSAGE, SELF_APPROVAL_ERROR_MESSAGE,
    ZERO_ADDRESS_ERROR_MESSAGE,
};
use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{Address, U256},
    evm, msg,
    prelude::*,
};

use crate::utils::solidity::{ApprovalForAll, TransferBatch, TransferSingle};

sol_storage! {
    /// Erc1155 implements the balance & approval bookkeeping of a multi-token contract
    pub struct Erc1155 {
        /// Maps token IDs to a mapping from accounts to balances
        mapping(uint256 => mapping(address => uint256)) balances;
        /// Maps accounts to a mapping from operators to approval status
        mapping(address => mapping(address => bool)) operator_approvals;
    }
}

// These methods aren't exposed to other contracts
impl Erc1155 {
    /// Moves `values` of the tokens `ids` from `from` to `to`.
    ///
    /// A zero `from` mints, a zero `to` burns.
    pub fn _update(
        &mut self,
        from: Address,
        to: Address,
        ids: &[U256],
        values: &[U256],
    ) -> Result<(), Vec<u8>> {
        if ids.len() != values.len() {
            return Err(LENGTH_MISMATCH_ERROR_MESSAGE.to_vec());
        }

        for (id, value) in ids.iter().zip(values) {
            if from != Address::ZERO {
                let from_balance = self.balances.getter(*id).get(from);
                if from_balance < *value {
                    return Err(INSUFFICIENT_BALANCE_ERROR_MESSAGE.to_vec());
                }
                self.balances
                    .setter(*id)
                    .insert(from, from_balance - *value);
            }

            if to != Address::ZERO {
                let to_balance = self.balances.getter(*id).get(to);
                let new_balance = to_balance
                    .checked_add(*value)
                    .ok_or(OVERFLOW_ERROR_MESSAGE.to_vec())?;
                self.balances.setter(*id).insert(to, new_balance);
            }
        }

        Ok(())
    }

    /// Creates `value` tokens of ID `id` and assigns them to `to`
    pub fn _mint(&mut self, to: Address, id: U256, value: U256) -> Result<(), Vec<u8>> {
        if to == Address::ZERO {
            return Err(ZERO_ADDRESS_ERROR_MESSAGE.to_vec());
        }

        self._update(Address::ZERO, to, &[id], &[value])?;
        evm::log(TransferSingle {
            operator: msg::sender(),
            from: Address::ZERO,
            to,
            id,
            value,
        });
        Ok(())
    }

    /// Batched version of [`Erc1155::_mint`]
    pub fn _mint_batch(
        &mut self,
        to: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
    ) -> Result<(), Vec<u8>> {
        if to == Address::ZERO {
            return Err(ZERO_ADDRESS_ERROR_MESSAGE.to_vec());
        }

        self._update(Address::ZERO, to, &ids, &values)?;
        evm::log(TransferBatch {
            operator: msg::sender(),
            from: Address::ZERO,
            to,
            ids,
            values,
        });
        Ok(())
    }

    /// Reverts unless the caller may move `from`'s tokens to `to`
    fn _check_transfer(&self, from: Address, to: Address) -> Result<(), Vec<u8>> {
        if to == Address::ZERO {
            return Err(ZERO_ADDRESS_ERROR_MESSAGE.to_vec());
        }

        let operator = msg::sender();
        if from != operator && !self.operator_approvals.getter(from).get(operator) {
            return Err(NOT_APPROVED_ERROR_MESSAGE.to_vec());
        }

        Ok(())
    }
}

// These methods are external to other contracts
#[external]
impl Erc1155 {
    /// Returns the amount of tokens of ID `id` owned by `account`
    pub fn balance_of(&self, account: Address, id: U256) -> Result<U256, Vec<u8>> {
        Ok(self.balances.getter(id).get(account))
    }

    /// Batched version of `balance_of`
    pub fn balance_of_batch(
        &self,
        accounts: Vec<Address>,
        ids: Vec<U256>,
    ) -> Result<Vec<U256>, Vec<u8>> {
        if accounts.len() != ids.len() {
            return Err(LENGTH_MISMATCH_ERROR_MESSAGE.to_vec());
        }

        Ok(accounts
            .into_iter()
            .zip(ids)
            .map(|(account, id)| self.balances.getter(id).get(account))
            .collect())
    }

    /// Grants or revokes permission for `operator` to transfer the caller's tokens
    pub fn set_approval_for_all(&mut self, operator: Address, approved: bool) -> Result<(), Vec<u8>> {
        let account = msg::sender();
        if operator == account {
            return Err(SELF_APPROVAL_ERROR_MESSAGE.to_vec());
        }

        self.operator_approvals
            .setter(account)
            .insert(operator, approved);
        evm::log(ApprovalForAll {
            account,
            operator,
            approved,
        });
        Ok(())
    }

    /// Returns whether `operator` is approved to transfer `account`'s tokens
    pub fn is_approved_for_all(&self, account: Address, operator: Address) -> Result<bool, Vec<u8>> {
        Ok(self.operator_approvals.getter(account).get(operator))
    }

    /// Transfers `value` tokens of ID `id` from `from` to `to`
    pub fn safe_transfer_from(
        &mut self,
        from: Address,
        to: Address,
        id: U256,
        value: U256,
        _data: Bytes,
    ) -> Result<(), Vec<u8>> {
        self._check_transfer(from, to)?;
        self._update(from, to, &[id], &[value])?;
        evm::log(TransferSingle {
            operator: msg::sender(),
            from,
            to,
            id,
            value,
        });
        Ok(())
    }

    /// Batched version of `safe_transfer_from`
    pub fn safe_batch_transfer_from(
        &mut self,
        from: Address,
        to: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
        _data: Bytes,
    ) -> Result<(), Vec<u8>> {
        self._check_transfer(from, to)?;
        self._update(from, to, &ids, &values)?;
        evm::log(TransferBatch {
            operator: msg::sender(),
            from,
            to,
            ids,
            values,
        });
        Ok(())
    }
}
