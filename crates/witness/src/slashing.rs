//! Witness for the slashing path, where the covenant quorum and any one of the delegation's
//! finality providers force the stake out.

use bitcoin::{Witness, XOnlyPublicKey};
use secp256k1::schnorr;
use staking_params::ordering::KeyOrder;

use crate::{
    assembler::assemble_witness,
    errors::{WitnessError, WitnessResult},
    ordering::collect_slots,
    slot::{encode_delegator, encode_signer_group, SignatureSlot},
    spend_info::{ControlBlockEncoding, SpendInfo},
};

impl<C: ControlBlockEncoding> SpendInfo<C> {
    /// Builds the witness that spends the slashing leaf.
    ///
    /// The slots are laid out as
    ///
    /// ```text
    /// covenant slots | finality provider slots | delegator signature | leaf script | control block
    /// ```
    ///
    /// which is the reverse of the order in which the leaf checks the three signer groups. Each
    /// group must have one slot per key in the script, in witness order. Only one finality
    /// provider needs to have signed; missing ones are left as empty slots.
    ///
    /// # Errors
    ///
    /// If either signer group is empty, the delegator signature is missing, or the control block
    /// cannot be serialized. The groups are checked in the order covenant, finality providers,
    /// delegator.
    pub fn build_slashing_witness(
        &self,
        covenant_signatures: &[SignatureSlot],
        finality_provider_signatures: &[SignatureSlot],
        delegator_signature: Option<schnorr::Signature>,
    ) -> WitnessResult<Witness> {
        let covenant =
            encode_signer_group(covenant_signatures, WitnessError::EmptyCovenantSignatures)?;
        let finality_providers = encode_signer_group(
            finality_provider_signatures,
            WitnessError::EmptyFinalityProviderSignatures,
        )?;
        let delegator = encode_delegator(delegator_signature)?;

        assemble_witness(self, covenant.chain(finality_providers).chain([delegator]))
    }

    /// Same as [`Self::build_slashing_witness`], but places each covenant and finality provider
    /// signature according to the key that produced it.
    ///
    /// # Errors
    ///
    /// Additionally fails if a signature belongs to a key outside its signer set or a key signed
    /// more than once.
    pub fn build_slashing_witness_ordered(
        &self,
        covenant: &KeyOrder,
        covenant_signatures: impl IntoIterator<Item = (XOnlyPublicKey, schnorr::Signature)>,
        finality_providers: &KeyOrder,
        finality_provider_signatures: impl IntoIterator<Item = (XOnlyPublicKey, schnorr::Signature)>,
        delegator_signature: Option<schnorr::Signature>,
    ) -> WitnessResult<Witness> {
        let covenant_slots = collect_slots(covenant, covenant_signatures)?;
        let finality_provider_slots =
            collect_slots(finality_providers, finality_provider_signatures)?;

        self.build_slashing_witness(
            &covenant_slots,
            &finality_provider_slots,
            delegator_signature,
        )
    }
}
