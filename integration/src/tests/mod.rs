//! The integration tests, registered in the test inventory

mod token;
mod uri;
