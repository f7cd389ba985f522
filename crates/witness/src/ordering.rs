//! Placement of signatures into witness slots by signer key.
//!
//! The slot of every signer is taken from [`KeyOrder`], the same ordering the script compiler
//! uses, so that the witness can never drift from the key order baked into the leaf script.

use bitcoin::XOnlyPublicKey;
use secp256k1::schnorr;
use staking_params::ordering::KeyOrder;

use crate::{
    errors::{WitnessError, WitnessResult},
    slot::SignatureSlot,
};

/// Collects signatures keyed by their signer into one slot per key of `order`, in witness order.
///
/// Keys without a signature get a [`SignatureSlot::Missing`] slot. The result always has
/// `order.len()` slots.
///
/// # Errors
///
/// If a signature was made by a key outside `order`, or a key appears more than once.
pub fn collect_slots(
    order: &KeyOrder,
    signatures: impl IntoIterator<Item = (XOnlyPublicKey, schnorr::Signature)>,
) -> WitnessResult<Vec<SignatureSlot>> {
    let mut slots = vec![SignatureSlot::Missing; order.len()];

    for (key, signature) in signatures {
        let position = order
            .witness_position(&key)
            .ok_or(WitnessError::UnknownSigner(key))?;

        if slots[position].is_present() {
            return Err(WitnessError::DuplicateSigner(key));
        }

        slots[position] = SignatureSlot::Present(signature);
    }

    Ok(slots)
}
