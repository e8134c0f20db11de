//! Various utilities used throughout the contracts

pub mod solidity;
