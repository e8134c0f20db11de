//! The LITHplus multi-token contract, mapping each token ID to a metadata URI
//! built from a shared base URI and a per-ID suffix.
//!
//! The contract can be used directly or as the implementation behind the
//! LITHplus proxy; in both cases it is set up through its one-shot `initialize` method.

use alloc::{string::String, vec::Vec};
use contracts_common::{
    constants::LITHPLUS_VERSION,
    uri::{resolve_uri, UriSource},
};
use stylus_sdk::{
    alloy_primitives::{Address, U256},
    evm, msg,
    prelude::*,
    storage::{StorageString, StorageVec},
};

use crate::{
    contracts::components::{erc1155::Erc1155, initializable::Initializable, ownable::Ownable},
    utils::solidity::URI,
};

#[solidity_storage]
#[entrypoint]
pub struct LithPlusContract {
    /// Token balances & operator approvals
    #[borrow]
    erc1155: Erc1155,

    /// The owner, allowed to mint & manage URIs
    #[borrow]
    ownable: Ownable,

    /// The initialized version of the contract
    initializable: Initializable,

    /// The base URI which the per-ID suffixes are appended to
    base_uri: StorageString,

    /// The URI suffixes, indexed by token ID
    uri_suffixes: StorageVec<StorageString>,
}

/// A read-only view of the URI table held in contract storage
struct StoredUriTable<'a> {
    /// The stored base URI
    base_uri: &'a StorageString,
    /// The stored URI suffixes
    uri_suffixes: &'a StorageVec<StorageString>,
}

impl UriSource for StoredUriTable<'_> {
    fn base_uri(&self) -> String {
        self.base_uri.get_string()
    }

    fn num_suffixes(&self) -> u64 {
        self.uri_suffixes.len() as u64
    }

    fn suffix(&self, index: u64) -> Option<String> {
        self.uri_suffixes
            .get(index)
            .map(|suffix| suffix.get_string())
    }
}

#[external]
#[inherit(Erc1155, Ownable)]
impl LithPlusContract {
    // -----------------
    // | INITIALIZABLE |
    // -----------------

    /// Initializes the contract, making the caller its owner
    /// and storing the URI table
    pub fn initialize(&mut self, base_uri: String, uri_suffixes: Vec<String>) -> Result<(), Vec<u8>> {
        self.initializable._initialize(LITHPLUS_VERSION)?;
        self.ownable._transfer_ownership(msg::sender());

        self.base_uri.set_str(base_uri);
        for suffix in uri_suffixes {
            self.uri_suffixes.grow().set_str(suffix);
        }

        Ok(())
    }

    // -----------
    // | GETTERS |
    // -----------

    /// Returns the metadata URI of the given token ID,
    /// or `"NOURI"` if the ID has no URI suffix
    pub fn uri(&self, id: U256) -> Result<String, Vec<u8>> {
        Ok(resolve_uri(&self.uri_table(), id.as_limbs()))
    }

    /// Returns the base URI
    pub fn base_uri(&self) -> Result<String, Vec<u8>> {
        Ok(self.base_uri.get_string())
    }

    /// Returns the number of token IDs with a URI suffix
    pub fn uri_count(&self) -> Result<U256, Vec<u8>> {
        Ok(U256::from(self.uri_suffixes.len()))
    }

    // -----------
    // | SETTERS |
    // -----------

    /// Replaces the base URI of all tokens
    pub fn set_base_uri(&mut self, base_uri: String) -> Result<(), Vec<u8>> {
        self.ownable._check_owner()?;
        self.base_uri.set_str(base_uri);
        Ok(())
    }

    /// Appends a URI suffix, returning the token ID it was assigned to
    pub fn add_uri(&mut self, suffix: String) -> Result<U256, Vec<u8>> {
        self.ownable._check_owner()?;

        let id = U256::from(self.uri_suffixes.len());
        self.uri_suffixes.grow().set_str(suffix);

        let value = resolve_uri(&self.uri_table(), id.as_limbs());
        evm::log(URI { value, id });
        Ok(id)
    }

    /// Mints `amount` tokens of ID `id` to `to`
    pub fn mint(&mut self, to: Address, id: U256, amount: U256) -> Result<(), Vec<u8>> {
        self.ownable._check_owner()?;
        self.erc1155._mint(to, id, amount)
    }

    /// Mints `amounts` of the tokens `ids` to `to`
    pub fn mint_batch(
        &mut self,
        to: Address,
        ids: Vec<U256>,
        amounts: Vec<U256>,
    ) -> Result<(), Vec<u8>> {
        self.ownable._check_owner()?;
        self.erc1155._mint_batch(to, ids, amounts)
    }
}

/// Internal methods
impl LithPlusContract {
    /// Borrows the stored URI table
    fn uri_table(&self) -> StoredUriTable<'_> {
        StoredUriTable {
            base_uri: &self.base_uri,
            uri_suffixes: &self.uri_suffixes,
        }
    }
}
