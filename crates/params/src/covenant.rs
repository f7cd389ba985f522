//! Parameters of the covenant committee that co-signs the unbonding and slashing paths.

use bitcoin::XOnlyPublicKey;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ParamsError, ParamsResult},
    ordering::KeyOrder,
};

/// The covenant committee: its members' keys and how many of them must sign.
///
/// The witness builders do not enforce the quorum; it is carried here so that callers can check
/// it before asking for a witness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CovenantParams {
    /// The x-only public keys of the committee members, in any order.
    pub keys: Vec<XOnlyPublicKey>,

    /// The minimum number of committee signatures required to spend.
    pub quorum: u32,
}

impl CovenantParams {
    /// Returns the committee keys in canonical script order.
    ///
    /// # Errors
    ///
    /// If the committee is empty or contains duplicate keys.
    pub fn key_order(&self) -> ParamsResult<KeyOrder> {
        KeyOrder::new(self.keys.iter().copied())
    }

    /// Checks that the committee is non-empty, duplicate-free and that the quorum can be met.
    pub fn validate(&self) -> ParamsResult<()> {
        let order = self.key_order()?;

        if self.quorum == 0 || self.quorum as usize > order.len() {
            return Err(ParamsError::InvalidQuorum {
                quorum: self.quorum,
                committee_size: order.len(),
            });
        }

        Ok(())
    }
}
