//! Common modules used throughout the project, including contracts, scripts & testing code

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![no_std]

extern crate alloc;

pub mod constants;
pub mod uri;
