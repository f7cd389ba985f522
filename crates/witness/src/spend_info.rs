//! The spend info of a single script path: the revealed leaf script and its control block.

use bitcoin::{
    taproot::{ControlBlock, LeafVersion, TaprootSpendInfo},
    Script, ScriptBuf,
};

use crate::errors::{ControlBlockError, WitnessError, WitnessResult};

/// A control block that can be serialized into its witness element.
pub trait ControlBlockEncoding {
    /// Returns the canonical serialization of the control block.
    fn to_bytes(&self) -> Result<Vec<u8>, ControlBlockError>;
}

impl ControlBlockEncoding for ControlBlock {
    fn to_bytes(&self) -> Result<Vec<u8>, ControlBlockError> {
        Ok(self.serialize())
    }
}

/// A control block in serialized form, as received from outside the process.
///
/// The bytes are only checked when the control block is encoded into a witness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawControlBlock(Vec<u8>);

impl RawControlBlock {
    /// Wraps the given serialized control block.
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Returns the wrapped bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for RawControlBlock {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl ControlBlockEncoding for RawControlBlock {
    fn to_bytes(&self) -> Result<Vec<u8>, ControlBlockError> {
        Ok(ControlBlock::decode(&self.0)?.serialize())
    }
}

/// Everything besides the signatures that a script-path witness needs.
///
/// The leaf script and the control block must belong to the same leaf of the same tree. This is
/// not checked: both come from the script compiler, which is trusted to pair them correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendInfo<C = ControlBlock> {
    leaf_script: ScriptBuf,
    control_block: C,
}

impl<C> SpendInfo<C> {
    /// Creates spend info from a leaf script and its control block.
    pub const fn new(leaf_script: ScriptBuf, control_block: C) -> Self {
        Self {
            leaf_script,
            control_block,
        }
    }

    /// Returns the leaf script that is revealed in the witness.
    pub fn leaf_script(&self) -> &Script {
        &self.leaf_script
    }

    /// Returns the control block of the leaf.
    pub const fn control_block(&self) -> &C {
        &self.control_block
    }
}

impl SpendInfo<ControlBlock> {
    /// Looks up the control block of `leaf_script` in an already built taproot tree.
    ///
    /// # Errors
    ///
    /// If the leaf is not part of the tree.
    pub fn from_taproot(
        taproot_spend_info: &TaprootSpendInfo,
        leaf_script: ScriptBuf,
    ) -> WitnessResult<Self> {
        let script_ver = (leaf_script, LeafVersion::TapScript);
        let control_block = taproot_spend_info
            .control_block(&script_ver)
            .ok_or(WitnessError::LeafNotInTree)?;

        Ok(Self::new(script_ver.0, control_block))
    }
}
