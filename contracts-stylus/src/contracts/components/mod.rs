//! Composable contract "components" that other smart contracts can inherit for common functionality

pub mod erc1155;
pub mod initializable;
pub mod ownable;
