//! Assembly of a script-path witness from its signature slots and spend info.

use bitcoin::Witness;
use tracing::trace;

use crate::{
    errors::WitnessResult,
    spend_info::{ControlBlockEncoding, SpendInfo},
};

/// Assembles the witness stack that spends `spend_info` with the given script inputs.
///
/// The returned witness has the layout required by
/// [BIP 341](https://github.com/bitcoin/bips/blob/master/bip-0341.mediawiki#script-validation-rules):
///
/// ```text
/// slots[0] .. slots[n-1] | leaf script | control block
/// ```
///
/// The slots are copied as is and in order, including empty ones. The order must match the order
/// in which the leaf script consumes its inputs.
///
/// # Errors
///
/// If the control block cannot be serialized.
pub fn assemble_witness<C, S>(
    spend_info: &SpendInfo<C>,
    slots: impl IntoIterator<Item = S>,
) -> WitnessResult<Witness>
where
    C: ControlBlockEncoding,
    S: AsRef<[u8]>,
{
    let control_block = spend_info.control_block().to_bytes()?;

    let mut witness = Witness::new();
    slots.into_iter().for_each(|slot| witness.push(slot));
    let num_slots = witness.len();

    witness.push(spend_info.leaf_script().as_bytes());
    witness.push(control_block);

    trace!(num_slots, witness_len = witness.len(), "assembled script-path witness");

    Ok(witness)
}

#[cfg(test)]
mod tests {
    use bitcoin::taproot::ControlBlock;
    use proptest::prelude::*;
    use staking_test_utils::prelude::{generate_signature, generate_taproot_fixture};

    use super::*;
    use crate::{
        errors::{ControlBlockError, WitnessError},
        slot::SignatureSlot,
        spend_info::RawControlBlock,
    };

    fn spend_info() -> SpendInfo<ControlBlock> {
        let (leaf_script, control_block) = generate_taproot_fixture(5).leaf(3);

        SpendInfo::new(leaf_script, control_block)
    }

    #[test]
    fn script_and_control_block_trail_the_slots() {
        let spend_info = spend_info();
        let sig = generate_signature().serialize();

        let witness = assemble_witness(&spend_info, [sig.to_vec(), Vec::new(), sig.to_vec()])
            .expect("control block must serialize");

        assert_eq!(witness.len(), 5);
        assert_eq!(&witness[0], &sig[..]);
        assert!(witness[1].is_empty());
        assert_eq!(&witness[2], &sig[..]);
        assert_eq!(&witness[3], spend_info.leaf_script().as_bytes());
        assert_eq!(witness[4].to_vec(), spend_info.control_block().serialize());
    }

    #[test]
    fn no_slots_still_reveals_script() {
        let spend_info = spend_info();

        let witness = assemble_witness(&spend_info, Vec::<Vec<u8>>::new()).unwrap();

        assert_eq!(witness.len(), 2);
        assert_eq!(&witness[0], spend_info.leaf_script().as_bytes());
    }

    #[test]
    fn control_block_failure_is_propagated() {
        let spend_info = SpendInfo::new(
            spend_info().leaf_script().to_owned(),
            RawControlBlock::new(vec![0xc0; 34]),
        );

        assert!(matches!(
            assemble_witness(&spend_info, [generate_signature().serialize()]),
            Err(WitnessError::ControlBlock(ControlBlockError::Malformed(_)))
        ));
    }

    #[test]
    fn raw_and_decoded_control_blocks_agree() {
        let decoded = spend_info();
        let raw = SpendInfo::new(
            decoded.leaf_script().to_owned(),
            RawControlBlock::new(decoded.control_block().serialize()),
        );
        let sig = generate_signature().serialize();

        assert_eq!(
            assemble_witness(&decoded, [sig]).unwrap(),
            assemble_witness(&raw, [sig]).unwrap()
        );
    }

    proptest! {
        #[test]
        fn witness_layout_holds_for_any_slots(
            slots in prop::collection::vec(
                prop::option::of(prop::collection::vec(any::<u8>(), 64)),
                0..16,
            )
        ) {
            let spend_info = spend_info();
            let slots: Vec<SignatureSlot> = slots
                .into_iter()
                .map(|bytes| {
                    SignatureSlot::from(bytes.map(|bytes| {
                        secp256k1::schnorr::Signature::from_slice(&bytes)
                            .expect("64 bytes are a valid encoding")
                    }))
                })
                .collect();

            let witness = assemble_witness(
                &spend_info,
                slots.iter().map(SignatureSlot::to_witness_bytes),
            )
            .unwrap();

            prop_assert_eq!(witness.len(), slots.len() + 2);
            for (element, slot) in witness.iter().zip(&slots) {
                prop_assert_eq!(element.len(), if slot.is_present() { 64 } else { 0 });
            }
            prop_assert_eq!(&witness[slots.len()], spend_info.leaf_script().as_bytes());
            prop_assert_eq!(
                witness[slots.len() + 1].to_vec(),
                spend_info.control_block().serialize()
            );

            let again = assemble_witness(
                &spend_info,
                slots.iter().map(SignatureSlot::to_witness_bytes),
            )
            .unwrap();
            prop_assert_eq!(witness, again);
        }
    }
}
