//! This crate provides test-utilities for the staking witness crates.
//!
//! These utilities are mostly used to generate arbitrary keys, signatures and taproot fixtures
//! for testing purposes.

pub mod bitcoin;
pub mod prelude;
pub mod taproot;
