//! This crate builds the witness stacks that spend a taproot staking output through one of its
//! script paths:
//!
//! - the **timelock** path, where the delegator exits alone after the timelock matures;
//! - the **unbonding** path, where the delegator exits with a covenant quorum co-signing;
//! - the **slashing** path, where the covenant quorum and one finality provider force the exit.
//!
//! Every witness has the same layout: the signature slots of the path, then the revealed leaf
//! script, then the serialized control block. Signers that did not sign still occupy their slot
//! with an empty element, so that each present signature stays aligned with the public key it is
//! checked against.
//!
//! The script tree itself, the signatures and the enclosing transaction are produced elsewhere;
//! this crate only turns them into a [`bitcoin::Witness`].

pub mod assembler;
pub mod errors;
pub mod ordering;
pub mod prelude;
pub mod slashing;
pub mod slot;
pub mod spend_info;
pub mod spend_path;
pub mod timelock;
pub mod unbonding;
