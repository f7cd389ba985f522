//! Signature slots and the placeholder encoding of missing signatures.

use secp256k1::schnorr;

use crate::errors::{WitnessError, WitnessResult};

/// A single signature position in a witness stack.
///
/// Covenant and finality-provider slots may be [`SignatureSlot::Missing`]: only a quorum of the
/// covenant committee and one of the finality providers need to sign. The delegator slot is never
/// represented by this type since it is always required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureSlot {
    /// The signer produced this signature.
    Present(schnorr::Signature),

    /// The signer did not sign.
    Missing,
}

impl SignatureSlot {
    /// Returns `true` if the slot holds a signature.
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns the signature in the slot, if any.
    pub const fn signature(&self) -> Option<&schnorr::Signature> {
        match self {
            Self::Present(signature) => Some(signature),
            Self::Missing => None,
        }
    }

    /// Encodes the slot as a witness element.
    ///
    /// A present signature is its 64-byte raw encoding; a missing one is the empty element, which
    /// makes the corresponding `OP_CHECKSIG(ADD)` fail without aborting script execution.
    pub fn to_witness_bytes(&self) -> Vec<u8> {
        match self {
            Self::Present(signature) => signature.serialize().to_vec(),
            Self::Missing => Vec::new(),
        }
    }
}

impl From<schnorr::Signature> for SignatureSlot {
    fn from(signature: schnorr::Signature) -> Self {
        Self::Present(signature)
    }
}

impl From<Option<schnorr::Signature>> for SignatureSlot {
    fn from(signature: Option<schnorr::Signature>) -> Self {
        signature.map_or(Self::Missing, Self::Present)
    }
}

/// Encodes a group of optional signers, failing with `if_empty` when the group has no slots.
///
/// Missing signatures are kept as placeholders; dropping them would shift every later signature
/// onto the wrong public key.
pub(crate) fn encode_signer_group(
    slots: &[SignatureSlot],
    if_empty: WitnessError,
) -> WitnessResult<impl Iterator<Item = Vec<u8>> + '_> {
    if slots.is_empty() {
        return Err(if_empty);
    }

    Ok(slots.iter().map(SignatureSlot::to_witness_bytes))
}

/// Encodes the mandatory delegator signature.
pub(crate) fn encode_delegator(
    delegator_signature: Option<schnorr::Signature>,
) -> WitnessResult<Vec<u8>> {
    delegator_signature
        .map(|signature| signature.serialize().to_vec())
        .ok_or(WitnessError::MissingDelegatorSignature)
}
