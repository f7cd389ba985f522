//! Errors returned while building a witness.

use bitcoin::{taproot::TaprootError, XOnlyPublicKey};
use thiserror::Error;

/// Error while turning a control block into its serialized form.
#[derive(Debug, Error)]
pub enum ControlBlockError {
    /// The control block bytes do not decode into a valid control block.
    #[error("malformed control block: {0}")]
    Malformed(#[from] TaprootError),
}

/// Error while building a witness stack.
#[derive(Debug, Error)]
pub enum WitnessError {
    /// The delegator signature, which every path requires, was not supplied.
    #[error("delegator signature should not be missing")]
    MissingDelegatorSignature,

    /// The list of covenant signature slots is empty.
    #[error("covenant signatures should not be empty")]
    EmptyCovenantSignatures,

    /// The list of finality provider signature slots is empty.
    #[error("finality provider signatures should not be empty")]
    EmptyFinalityProviderSignatures,

    /// The control block of the spend info could not be serialized.
    #[error("could not serialize control block: {0}")]
    ControlBlock(#[from] ControlBlockError),

    /// The leaf script is not committed to in the given taproot tree.
    #[error("leaf script is not part of the taproot tree")]
    LeafNotInTree,

    /// A signature was supplied by a key that is not part of the signer set.
    #[error("signature by unknown signer {0}")]
    UnknownSigner(XOnlyPublicKey),

    /// More than one signature was supplied for the same key.
    #[error("duplicate signature by signer {0}")]
    DuplicateSigner(XOnlyPublicKey),
}

/// Result type alias with [`WitnessError`] as the error type.
pub type WitnessResult<T> = Result<T, WitnessError>;
