//! Witness for the timelock path, where the delegator exits alone once the staking timelock has
//! matured.

use bitcoin::Witness;
use secp256k1::schnorr;

use crate::{
    assembler::assemble_witness,
    errors::WitnessResult,
    slot::encode_delegator,
    spend_info::{ControlBlockEncoding, SpendInfo},
};

impl<C: ControlBlockEncoding> SpendInfo<C> {
    /// Builds the witness that spends the timelock leaf.
    ///
    /// The witness is `[delegator signature, leaf script, control block]`. The input spending the
    /// output must also carry the relative timelock in its sequence number; that is up to the
    /// transaction builder.
    ///
    /// # Errors
    ///
    /// If the delegator signature is missing or the control block cannot be serialized.
    pub fn build_timelock_witness(
        &self,
        delegator_signature: Option<schnorr::Signature>,
    ) -> WitnessResult<Witness> {
        let delegator = encode_delegator(delegator_signature)?;

        assemble_witness(self, [delegator])
    }
}
