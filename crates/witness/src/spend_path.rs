//! The script paths of a staking output together with the signatures each of them needs.

use bitcoin::Witness;
use secp256k1::schnorr;

use crate::{
    errors::WitnessResult,
    slot::SignatureSlot,
    spend_info::{ControlBlockEncoding, SpendInfo},
};

/// Ways that a staking output can be spent, with the witness data of each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StakingSpendPath {
    /// The delegator withdraws after the staking timelock.
    Timelock {
        /// The delegator's signature.
        delegator_signature: Option<schnorr::Signature>,
    },

    /// The delegator unbonds early with the covenant's approval.
    Unbonding {
        /// One slot per covenant member, in witness order.
        covenant_signatures: Vec<SignatureSlot>,

        /// The delegator's signature.
        delegator_signature: Option<schnorr::Signature>,
    },

    /// The stake is slashed by the covenant and a finality provider.
    Slashing {
        /// One slot per covenant member, in witness order.
        covenant_signatures: Vec<SignatureSlot>,

        /// One slot per finality provider of the delegation, in witness order.
        finality_provider_signatures: Vec<SignatureSlot>,

        /// The delegator's (pre-signed) signature.
        delegator_signature: Option<schnorr::Signature>,
    },
}

impl StakingSpendPath {
    /// Returns the name of the path.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Timelock { .. } => "timelock",
            Self::Unbonding { .. } => "unbonding",
            Self::Slashing { .. } => "slashing",
        }
    }

    /// Returns the number of signature slots in the witness of this path.
    pub fn num_slots(&self) -> usize {
        match self {
            Self::Timelock { .. } => 1,
            Self::Unbonding {
                covenant_signatures,
                ..
            } => covenant_signatures.len() + 1,
            Self::Slashing {
                covenant_signatures,
                finality_provider_signatures,
                ..
            } => covenant_signatures.len() + finality_provider_signatures.len() + 1,
        }
    }

    /// Returns the number of covenant signatures that are present.
    ///
    /// This is zero for the timelock path.
    pub fn num_covenant_signatures(&self) -> usize {
        match self {
            Self::Timelock { .. } => 0,
            Self::Unbonding {
                covenant_signatures,
                ..
            }
            | Self::Slashing {
                covenant_signatures,
                ..
            } => covenant_signatures
                .iter()
                .filter(|slot| slot.is_present())
                .count(),
        }
    }
}

impl<C: ControlBlockEncoding> SpendInfo<C> {
    /// Builds the witness for the given spend path.
    ///
    /// The spend info must belong to the leaf of that path.
    pub fn build_witness(&self, spend_path: &StakingSpendPath) -> WitnessResult<Witness> {
        match spend_path {
            StakingSpendPath::Timelock {
                delegator_signature,
            } => self.build_timelock_witness(*delegator_signature),
            StakingSpendPath::Unbonding {
                covenant_signatures,
                delegator_signature,
            } => self.build_unbonding_witness(covenant_signatures, *delegator_signature),
            StakingSpendPath::Slashing {
                covenant_signatures,
                finality_provider_signatures,
                delegator_signature,
            } => self.build_slashing_witness(
                covenant_signatures,
                finality_provider_signatures,
                *delegator_signature,
            ),
        }
    }
}
