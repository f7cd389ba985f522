//! Taproot trees to source leaf scripts and control blocks from in tests.

use bitcoin::{
    opcodes::all::{OP_CHECKSIG, OP_CHECKSIGADD, OP_NUMEQUAL},
    taproot::{ControlBlock, LeafVersion, TaprootBuilder, TaprootSpendInfo},
    ScriptBuf, XOnlyPublicKey,
};
use secp256k1::SECP256K1;

use crate::bitcoin::{generate_xonly_pubkey, generate_xonly_pubkeys};

/// Creates a `threshold`-of-`keys` multisig leaf script that pushes `keys` in the given order.
pub fn multisig_leaf_script(keys: &[XOnlyPublicKey], threshold: i64) -> ScriptBuf {
    let mut builder = ScriptBuf::builder();

    for (index, key) in keys.iter().enumerate() {
        builder = builder.push_x_only_key(key);
        builder = if index == 0 {
            builder.push_opcode(OP_CHECKSIG)
        } else {
            builder.push_opcode(OP_CHECKSIGADD)
        };
    }

    builder
        .push_int(threshold)
        .push_opcode(OP_NUMEQUAL)
        .into_script()
}

/// A taproot tree with random multisig leaves.
#[derive(Debug, Clone)]
pub struct TaprootFixture {
    /// The spend info of the finalized tree.
    pub spend_info: TaprootSpendInfo,

    /// The leaf scripts in the order they were added to the tree.
    pub leaf_scripts: Vec<ScriptBuf>,
}

impl TaprootFixture {
    /// Returns the leaf script at `index` together with its control block.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub fn leaf(&self, index: usize) -> (ScriptBuf, ControlBlock) {
        let leaf_script = self.leaf_scripts[index].clone();
        let control_block = self
            .spend_info
            .control_block(&(leaf_script.clone(), LeafVersion::TapScript))
            .expect("leaf must be part of the tree");

        (leaf_script, control_block)
    }
}

/// Generates a taproot tree with `num_leaves` distinct leaves and an unrelated internal key.
///
/// # Panics
///
/// If `num_leaves` is zero.
pub fn generate_taproot_fixture(num_leaves: usize) -> TaprootFixture {
    assert!(num_leaves > 0, "a script tree needs at least one leaf");

    let leaf_scripts: Vec<ScriptBuf> = (0..num_leaves)
        .map(|_| multisig_leaf_script(&generate_xonly_pubkeys(3), 2))
        .collect();

    // Leaves are spread over the two deepest levels so that the tree stays as shallow as possible.
    let max_depth = if num_leaves > 1 {
        (num_leaves - 1).ilog2() + 1
    } else {
        0
    };
    let num_shallow = 2usize.pow(max_depth).saturating_sub(num_leaves);
    let num_deepest = num_leaves.saturating_sub(num_shallow);

    let mut builder = TaprootBuilder::new();
    for (index, script) in leaf_scripts.iter().enumerate() {
        let depth = if index < num_deepest {
            max_depth as u8
        } else {
            (max_depth - 1) as u8
        };

        builder = builder
            .add_leaf(depth, script.clone())
            .expect("depth must be valid");
    }

    let spend_info = builder
        .finalize(SECP256K1, generate_xonly_pubkey())
        .expect("tree must be complete");

    TaprootFixture {
        spend_info,
        leaf_scripts,
    }
}

#[cfg(test)]
mod tests {
    use bitcoin::TapLeafHash;

    use super::*;

    #[test]
    fn every_leaf_has_a_valid_control_block() {
        for num_leaves in [1, 2, 3, 5, 8] {
            let fixture = generate_taproot_fixture(num_leaves);
            let output_key = fixture.spend_info.output_key().to_inner();

            for index in 0..num_leaves {
                let (leaf_script, control_block) = fixture.leaf(index);
                assert!(
                    control_block.verify_taproot_commitment(SECP256K1, output_key, &leaf_script),
                    "leaf {index} of {num_leaves} must be committed"
                );
            }
        }
    }

    #[test]
    fn multisig_leaf_pushes_keys_in_order() {
        let keys = generate_xonly_pubkeys(2);
        let script = multisig_leaf_script(&keys, 1);

        let pushed: Vec<_> = script
            .instructions()
            .filter_map(|ins| ins.ok()?.push_bytes().map(|b| b.as_bytes().to_vec()))
            .filter(|bytes| bytes.len() == 32)
            .collect();

        assert_eq!(
            pushed,
            vec![keys[0].serialize().to_vec(), keys[1].serialize().to_vec()]
        );
        assert_ne!(
            TapLeafHash::from_script(&script, LeafVersion::TapScript),
            TapLeafHash::from_script(&multisig_leaf_script(&keys, 2), LeafVersion::TapScript)
        );
    }
}
