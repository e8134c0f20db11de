//! Testing contracts used to exercise the deployed contracts from the integration tests.

#[cfg(feature = "dummy-upgrade-target")]
mod dummy_upgrade_target;
