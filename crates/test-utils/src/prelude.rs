//! Re-exports of all test utilities.

pub use super::{bitcoin::*, taproot::*};
