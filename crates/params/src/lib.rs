//! This crate contains the staking parameters that the witness builders and the (external)
//! script compiler must agree on: the covenant committee and the canonical order in which signer
//! keys appear in the staking scripts.

pub mod covenant;
pub mod errors;
pub mod ordering;
pub mod prelude;
pub mod staking;
