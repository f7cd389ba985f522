//! Errors for the staking parameters.

use bitcoin::XOnlyPublicKey;
use thiserror::Error;

/// Error while loading or validating staking parameters.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The params file could not be read.
    #[error("failed to read params file: {0}")]
    Io(#[from] std::io::Error),

    /// The params file is not valid TOML or does not match the expected layout.
    #[error("failed to parse params: {0}")]
    Parse(#[from] toml::de::Error),

    /// A signer key set has no keys.
    #[error("key set must not be empty")]
    EmptyKeySet,

    /// The same key appears more than once in a signer key set.
    #[error("duplicate key in key set: {0}")]
    DuplicateKey(XOnlyPublicKey),

    /// The covenant quorum is zero or exceeds the committee size.
    #[error("covenant quorum {quorum} must be between 1 and the committee size {committee_size}")]
    InvalidQuorum {
        /// The configured quorum.
        quorum: u32,

        /// The number of keys in the committee.
        committee_size: usize,
    },
}

/// Result type alias with [`ParamsError`] as the error type.
pub type ParamsResult<T> = Result<T, ParamsError>;
