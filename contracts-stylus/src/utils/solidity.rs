//! Various Solidity definitions, including ABI-compatible function signatures and events

use stylus_sdk::alloy_sol_types::sol;

sol! {
    // -------------
    // | FUNCTIONS |
    // -------------

    // Proxy functions
    function initializeProxy(address logic, address admin, bytes data) external;
    function upgradeToAndCall(address newImplementation, bytes data) external;
    function changeAdmin(address newAdmin) external;
    function admin() external view returns (address);
    function implementation() external view returns (address);

    // ----------
    // | EVENTS |
    // ----------

    // Ownable events
    event OwnershipTransferred(address indexed previous_owner, address indexed new_owner);

    // Multi-token events
    event TransferSingle(address indexed operator, address indexed from, address indexed to, uint256 id, uint256 value);
    event TransferBatch(address indexed operator, address indexed from, address indexed to, uint256[] ids, uint256[] values);
    event ApprovalForAll(address indexed account, address indexed operator, bool approved);
    event URI(string value, uint256 indexed id);

    // Proxy events
    event Upgraded(address indexed implementation);
    event AdminChanged(address previousAdmin, address newAdmin);
}
