//! The LITHplus Stylus smart contracts.
//!
//! Each contract is gated behind a feature of the same name, which makes it the
//! WASM entrypoint when the crate is built with that feature enabled.

#![cfg_attr(not(feature = "export-abi"), no_main)]
#![no_std]

extern crate alloc;

#[global_allocator]
static ALLOC: mini_alloc::MiniAlloc = mini_alloc::MiniAlloc::INIT;

mod contracts;

#[cfg(any(feature = "lithplus", feature = "lithplus-proxy"))]
mod utils;
