//! LITHplus smart contracts

#[cfg(feature = "lithplus")]
mod components;

#[cfg(feature = "lithplus")]
mod lithplus;

#[cfg(feature = "lithplus-proxy")]
mod proxy;

#[cfg(feature = "dummy-upgrade-target")]
mod test_contracts;
