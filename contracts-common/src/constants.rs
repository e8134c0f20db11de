//! Constants shared between the contracts, the deploy scripts and the tests

/// The URI returned for token IDs that have no URI suffix assigned
pub const NO_URI: &str = "NOURI";

/// The version to which the LITHplus contract is initialized
pub const LITHPLUS_VERSION: u64 = 1;

/// The EIP-1967 storage slot holding the proxy's implementation address,
/// i.e. `keccak256("eip1967.proxy.implementation") - 1`,
/// as little-endian 64-bit limbs.
///
/// See https://eips.ethereum.org/EIPS/eip-1967#logic-contract-address
pub const PROXY_IMPLEMENTATION_SLOT_LIMBS: [u64; 4] = [
    0x20a3ca505d382bbc,
    0xca3e2076cc3735a9,
    0x0667c828492db98d,
    0x360894a13ba1a321,
];

/// The EIP-1967 storage slot holding the proxy's admin address,
/// i.e. `keccak256("eip1967.proxy.admin") - 1`,
/// as little-endian 64-bit limbs.
///
/// See https://eips.ethereum.org/EIPS/eip-1967#admin-address
pub const PROXY_ADMIN_SLOT_LIMBS: [u64; 4] = [
    0xd6a717850b5d6103,
    0x243e63b6e8ee1178,
    0x73ae13b9f8a6016e,
    0xb53127684a568b31,
];

// -------------------
// | REVERT MESSAGES |
// -------------------

/// The revert message when attempting to initialize
/// a contract to a past version
pub const INVALID_VERSION_ERROR_MESSAGE: &[u8] = b"invalid version";

/// The revert message when calling an owner-only method
/// when the caller is not the owner
pub const NOT_OWNER_ERROR_MESSAGE: &[u8] = b"not owner";

/// The revert message when an owner, recipient, or
/// proxy address is attempted to be set to the zero address
pub const ZERO_ADDRESS_ERROR_MESSAGE: &[u8] = b"zero address";

/// The revert message when a transfer is attempted by a caller
/// that is neither the token holder nor an approved operator
pub const NOT_APPROVED_ERROR_MESSAGE: &[u8] = b"not approved";

/// The revert message when a holder's balance cannot cover a transfer
pub const INSUFFICIENT_BALANCE_ERROR_MESSAGE: &[u8] = b"insufficient balance";

/// The revert message when batched ID & amount (or account) arrays differ in length
pub const LENGTH_MISMATCH_ERROR_MESSAGE: &[u8] = b"length mismatch";

/// The revert message when a holder attempts to approve themselves as operator
pub const SELF_APPROVAL_ERROR_MESSAGE: &[u8] = b"self approval";

/// The revert message when a balance update overflows
pub const OVERFLOW_ERROR_MESSAGE: &[u8] = b"overflow";

/// The revert message when the proxy has already been initialized
pub const PROXY_INITIALIZED_ERROR_MESSAGE: &[u8] = b"proxy initialized";

/// The revert message when the proxy admin calls a method
/// that would be forwarded to the implementation
pub const ADMIN_FALLBACK_ERROR_MESSAGE: &[u8] = b"admin cannot fallback";

/// The revert message when the proxy receives calldata
/// that cannot be decoded for an admin method
pub const CALLDATA_DECODING_ERROR_MESSAGE: &[u8] = b"invalid calldata";

/// The revert message when the proxy is called before being initialized
pub const PROXY_UNINITIALIZED_ERROR_MESSAGE: &[u8] = b"proxy uninitialized";
