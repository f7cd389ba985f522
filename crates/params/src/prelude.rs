//! Re-exports of the commonly used parameter types.

pub use super::{covenant::*, errors::*, ordering::*, staking::*};
