//! Scripts for building, deploying, and interacting with the LITHplus contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod constants;
pub mod errors;
pub mod networks;
pub mod solidity;
pub mod types;
pub mod utils;
