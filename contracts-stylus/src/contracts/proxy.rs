//! The LITHplus upgradeable proxy.
//!
//! Mirrors OpenZeppelin's `TransparentUpgradeableProxy`:
//! https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/transparent/TransparentUpgradeableProxy.sol
//!
//! The implementation & admin addresses are kept in the EIP-1967 storage slots so that
//! they never collide with the implementation's own storage. Calls from the admin are
//! handled by the proxy itself, all other calls are delegated to the implementation.
//!
//! Stylus does not support constructors, so the proxy's constructor arguments are
//! instead passed to a one-shot `initializeProxy` call made right after deployment.

use alloc::vec::Vec;
use contracts_common::constants::{
    ADMIN_FALLBACK_ERROR_MESSAGE, CALLDATA_DECODING_ERROR_MESSAGE, PROXY_ADMIN_SLOT_LIMBS,
    PROXY_IMPLEMENTATION_SLOT_LIMBS, PROXY_INITIALIZED_ERROR_MESSAGE,
    PROXY_UNINITIALIZED_ERROR_MESSAGE, ZERO_ADDRESS_ERROR_MESSAGE,
};
use stylus_sdk::{
    alloy_primitives::{Address, U256},
    alloy_sol_types::SolCall,
    call::RawCall,
    evm, msg,
    prelude::*,
    storage::{StorageAddress, StorageType},
    ArbResult,
};

use crate::utils::solidity::{
    adminCall, changeAdminCall, implementationCall, initializeProxyCall, upgradeToAndCallCall,
    AdminChanged, Upgraded,
};

/// The number of bytes in a function selector
const SELECTOR_LEN: usize = 4;

/// The proxy's state, held in the EIP-1967 storage slots
struct ProxyStorage {
    /// The address of the implementation contract
    implementation: StorageAddress,
    /// The address of the proxy admin
    admin: StorageAddress,
}

impl ProxyStorage {
    /// Binds the proxy state to its storage slots
    fn load() -> Self {
        // SAFETY: The EIP-1967 slots are derived from hashes and so
        // never alias the implementation's sequentially-allocated storage
        unsafe {
            Self {
                implementation: StorageAddress::new(
                    U256::from_limbs(PROXY_IMPLEMENTATION_SLOT_LIMBS),
                    0,
                ),
                admin: StorageAddress::new(U256::from_limbs(PROXY_ADMIN_SLOT_LIMBS), 0),
            }
        }
    }

    /// Points the proxy at a new implementation
    fn set_implementation(&mut self, implementation: Address) -> Result<(), Vec<u8>> {
        if implementation == Address::ZERO {
            return Err(ZERO_ADDRESS_ERROR_MESSAGE.to_vec());
        }

        self.implementation.set(implementation);
        evm::log(Upgraded { implementation });
        Ok(())
    }

    /// Hands the proxy over to a new admin
    fn set_admin(&mut self, new_admin: Address) -> Result<(), Vec<u8>> {
        if new_admin == Address::ZERO {
            return Err(ZERO_ADDRESS_ERROR_MESSAGE.to_vec());
        }

        let previous_admin = self.admin.get();
        self.admin.set(new_admin);
        evm::log(AdminChanged {
            previousAdmin: previous_admin,
            newAdmin: new_admin,
        });
        Ok(())
    }
}

#[entrypoint]
fn user_main(input: Vec<u8>) -> ArbResult {
    let mut proxy = ProxyStorage::load();
    let admin = proxy.admin.get();

    if input.starts_with(&initializeProxyCall::SELECTOR) {
        if admin != Address::ZERO {
            return Err(PROXY_INITIALIZED_ERROR_MESSAGE.to_vec());
        }
        return initialize_proxy(&mut proxy, &input);
    }

    if admin == Address::ZERO {
        return Err(PROXY_UNINITIALIZED_ERROR_MESSAGE.to_vec());
    }

    if msg::sender() == admin {
        return dispatch_admin(&mut proxy, &input);
    }

    delegate(proxy.implementation.get(), &input)
}

/// Sets the implementation & admin, then forwards the initialization calldata, if any
fn initialize_proxy(proxy: &mut ProxyStorage, input: &[u8]) -> ArbResult {
    let call = initializeProxyCall::decode(input, true /* validate */)
        .map_err(|_| CALLDATA_DECODING_ERROR_MESSAGE.to_vec())?;

    proxy.set_implementation(call.logic)?;
    proxy.set_admin(call.admin)?;

    if call.data.is_empty() {
        return Ok(Vec::new());
    }
    delegate(call.logic, &call.data[..])
}

/// Handles a call made by the admin, which is never forwarded to the implementation
fn dispatch_admin(proxy: &mut ProxyStorage, input: &[u8]) -> ArbResult {
    let selector: [u8; SELECTOR_LEN] = input
        .get(..SELECTOR_LEN)
        .and_then(|selector| selector.try_into().ok())
        .unwrap_or_default();

    match selector {
        upgradeToAndCallCall::SELECTOR => {
            let call = upgradeToAndCallCall::decode(input, true /* validate */)
                .map_err(|_| CALLDATA_DECODING_ERROR_MESSAGE.to_vec())?;

            proxy.set_implementation(call.newImplementation)?;
            if call.data.is_empty() {
                return Ok(Vec::new());
            }
            delegate(call.newImplementation, &call.data[..])
        }
        changeAdminCall::SELECTOR => {
            let call = changeAdminCall::decode(input, true /* validate */)
                .map_err(|_| CALLDATA_DECODING_ERROR_MESSAGE.to_vec())?;

            proxy.set_admin(call.newAdmin)?;
            Ok(Vec::new())
        }
        adminCall::SELECTOR => Ok(encode_address(proxy.admin.get())),
        implementationCall::SELECTOR => Ok(encode_address(proxy.implementation.get())),
        _ => Err(ADMIN_FALLBACK_ERROR_MESSAGE.to_vec()),
    }
}

/// Delegates the given calldata to the implementation, bubbling up its return or revert data
fn delegate(implementation: Address, calldata: &[u8]) -> ArbResult {
    // SAFETY: The storage cache is flushed before the call, and the proxy does not
    // read any storage it has cached after the implementation returns
    unsafe {
        RawCall::new_delegate()
            .flush_storage_cache()
            .call(implementation, calldata)
    }
}

/// ABI-encodes an address as a single left-padded word
fn encode_address(address: Address) -> Vec<u8> {
    let mut word = alloc::vec![0u8; 32];
    word[32 - address.len()..].copy_from_slice(address.as_slice());
    word
}
