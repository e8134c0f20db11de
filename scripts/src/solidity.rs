//! Solidity ABI definitions of the contracts the scripts interact with

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface ILithPlus {
        function initialize(string baseUri, string[] uriSuffixes) external;

        function uri(uint256 id) external view returns (string);
        function baseUri() external view returns (string);
        function uriCount() external view returns (uint256);
        function setBaseUri(string baseUri) external;
        function addUri(string suffix) external returns (uint256);

        function mint(address to, uint256 id, uint256 amount) external;
        function mintBatch(address to, uint256[] ids, uint256[] amounts) external;

        function balanceOf(address account, uint256 id) external view returns (uint256);
        function balanceOfBatch(address[] accounts, uint256[] ids) external view returns (uint256[]);
        function setApprovalForAll(address operator, bool approved) external;
        function isApprovedForAll(address account, address operator) external view returns (bool);
        function safeTransferFrom(address from, address to, uint256 id, uint256 value, bytes data) external;
        function safeBatchTransferFrom(address from, address to, uint256[] ids, uint256[] values, bytes data) external;

        function owner() external view returns (address);
        function transferOwnership(address newOwner) external;
        function renounceOwnership() external;
    }

    #[sol(rpc)]
    interface ILithPlusProxy {
        function initializeProxy(address logic, address admin, bytes data) external;
        function upgradeToAndCall(address newImplementation, bytes data) external;
        function changeAdmin(address newAdmin) external;
        function admin() external view returns (address);
        function implementation() external view returns (address);

        event Upgraded(address indexed implementation);
        event AdminChanged(address previousAdmin, address newAdmin);
    }

    #[sol(rpc)]
    interface IDummyUpgradeTarget {
        function isDummyUpgradeTarget() external view returns (bool);
    }
}
