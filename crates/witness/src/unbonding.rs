//! Witness for the unbonding path, where the delegator exits early with the approval of a
//! covenant quorum.

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
    /// Builds the witness that spends the unbonding leaf.
    ///
    /// `covenant_signatures` must have one slot per committee member, in witness order (see
    /// [`KeyOrder::witness_order`]). Only a quorum of them needs to be present; this is not
    /// checked here. The delegator signature goes last since the leaf checks it first.
    ///
    /// # Errors
    ///
    /// If `covenant_signatures` is empty, the delegator signature is missing, or the control block
    /// cannot be serialized.
    pub fn build_unbonding_witness(
        &self,
        covenant_signatures: &[SignatureSlot],
        delegator_signature: Option<schnorr::Signature>,
    ) -> WitnessResult<Witness> {
        let covenant =
            encode_signer_group(covenant_signatures, WitnessError::EmptyCovenantSignatures)?;
        let delegator = encode_delegator(delegator_signature)?;

        assemble_witness(self, covenant.chain([delegator]))
    }

    /// Same as [`Self::build_unbonding_witness`], but places each covenant signature according to
    /// the key that produced it.
    ///
    /// # Errors
    ///
    /// Additionally fails if a signature belongs to a key outside `covenant` or a key signed more
    /// than once.
    pub fn build_unbonding_witness_ordered(
        &self,
        covenant: &KeyOrder,
        covenant_signatures: impl IntoIterator<Item = (XOnlyPublicKey, schnorr::Signature)>,
        delegator_signature: Option<schnorr::Signature>,
    ) -> WitnessResult<Witness> {
        let covenant_slots = collect_slots(covenant, covenant_signatures)?;

        self.build_unbonding_witness(&covenant_slots, delegator_signature)
    }
}

#[cfg(test)]
mod tests {
    use bitcoin::taproot::ControlBlock;
    use staking_test_utils::prelude::{
        generate_keypairs, generate_signature, generate_taproot_fixture, sign_random_message,
    };

    use super::*;

    fn spend_info() -> SpendInfo<ControlBlock> {
        let (leaf_script, control_block) = generate_taproot_fixture(3).leaf(1);

        SpendInfo::new(leaf_script, control_block)
    }

    #[test]
    fn missing_covenant_slots_keep_their_position() {
        let spend_info = spend_info();
        let sig_a = generate_signature();
        let sig_c = generate_signature();
        let sig_d = generate_signature();

        let witness = spend_info
            .build_unbonding_witness(
                &[sig_a.into(), SignatureSlot::Missing, sig_c.into()],
                Some(sig_d),
            )
            .expect("inputs are complete");

        let expected: Vec<Vec<u8>> = vec![
            sig_a.serialize().to_vec(),
            Vec::new(),
            sig_c.serialize().to_vec(),
            sig_d.serialize().to_vec(),
            spend_info.leaf_script().to_bytes(),
            spend_info.control_block().serialize(),
        ];
        assert_eq!(witness.len(), 6);
        assert_eq!(witness.to_vec(), expected);
    }

    #[test]
    fn witness_length_tracks_committee_size() {
        let spend_info = spend_info();

        for committee_size in 1..=9 {
            let slots: Vec<SignatureSlot> = (0..committee_size)
                .map(|i| {
                    if i % 2 == 0 {
                        SignatureSlot::Present(generate_signature())
                    } else {
                        SignatureSlot::Missing
                    }
                })
                .collect();

            let witness = spend_info
                .build_unbonding_witness(&slots, Some(generate_signature()))
                .unwrap();
            assert_eq!(witness.len(), committee_size + 1 + 2);
        }
    }

    #[test]
    fn required_inputs_are_checked() {
        let spend_info = spend_info();

        assert!(matches!(
            spend_info.build_unbonding_witness(&[], Some(generate_signature())),
            Err(WitnessError::EmptyCovenantSignatures)
        ));
        assert!(matches!(
            spend_info.build_unbonding_witness(&[generate_signature().into()], None),
            Err(WitnessError::MissingDelegatorSignature)
        ));
        // An all-missing committee is positionally valid; the quorum is checked by the script.
        assert!(spend_info
            .build_unbonding_witness(&[SignatureSlot::Missing], Some(generate_signature()))
            .is_ok());
    }

    #[test]
    fn ordered_builder_places_signatures_by_key() {
        let spend_info = spend_info();
        let committee = generate_keypairs(3);
        let order = KeyOrder::new(committee.iter().map(|kp| kp.x_only_public_key().0)).unwrap();

        // Sign with the committee members at witness positions 0 and 2.
        let witness_keys: Vec<_> = order.witness_order().copied().collect();
        let signer = |key: XOnlyPublicKey| {
            committee
                .iter()
                .find(|kp| kp.x_only_public_key().0 == key)
                .expect("key is in the committee")
        };
        let sig_first = sign_random_message(signer(witness_keys[0]));
        let sig_last = sign_random_message(signer(witness_keys[2]));
        let delegator = generate_signature();

        let witness = spend_info
            .build_unbonding_witness_ordered(
                &order,
                [(witness_keys[2], sig_last), (witness_keys[0], sig_first)],
                Some(delegator),
            )
            .unwrap();

        assert_eq!(witness.len(), 6);
        assert_eq!(&witness[0], sig_first.serialize().as_slice());
        assert!(witness[1].is_empty());
        assert_eq!(&witness[2], sig_last.serialize().as_slice());
        assert_eq!(&witness[3], delegator.serialize().as_slice());
    }
}
