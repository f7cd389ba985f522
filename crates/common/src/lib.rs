//! Reusable utilities shared by the staking witness tooling, such as initializing the tracing
//! framework.

pub mod logging;

// Re-export tracing crate for convenience.
pub use tracing;
