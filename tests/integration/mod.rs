//! Integration tests for the framesets knowledge representation engine

mod config_integration;
mod delegation;
mod framesets;
mod persistence;
mod registry;
mod test_utils;

pub use test_utils::{recorder, vehicles};
