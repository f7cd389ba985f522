//! The JSON spend request accepted by `witness-cli build`.

use anyhow::{bail, Context, Result};
use bitcoin::{secp256k1::schnorr, ScriptBuf, XOnlyPublicKey};
use serde::{Deserialize, Serialize};
use staking_params::{ordering::KeyOrder, staking::StakingParams};
use staking_witness::prelude::{
    collect_slots, RawControlBlock, SignatureSlot, SpendInfo, StakingSpendPath,
};

/// The script path to spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PathKind {
    Timelock,
    Unbonding,
    Slashing,
}

/// A signature together with the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct KeyedSignature {
    pub(crate) key: XOnlyPublicKey,
    pub(crate) signature: schnorr::Signature,
}

impl KeyedSignature {
    const fn into_pair(self) -> (XOnlyPublicKey, schnorr::Signature) {
        (self.key, self.signature)
    }
}

/// Everything needed to build the witness of one staking spend.
///
/// The covenant committee comes from the params file; the finality providers are specific to the
/// delegation and therefore part of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct WitnessRequest {
    pub(crate) path: PathKind,

    #[serde(with = "hex")]
    pub(crate) leaf_script: Vec<u8>,

    #[serde(with = "hex")]
    pub(crate) control_block: Vec<u8>,

    #[serde(default)]
    pub(crate) covenant_signatures: Vec<KeyedSignature>,

    #[serde(default)]
    pub(crate) finality_provider_keys: Vec<XOnlyPublicKey>,

    #[serde(default)]
    pub(crate) finality_provider_signatures: Vec<KeyedSignature>,

    #[serde(default)]
    pub(crate) delegator_signature: Option<schnorr::Signature>,
}

impl WitnessRequest {
    /// Parses a request from its JSON form.
    pub(crate) fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("failed to parse spend request")
    }

    /// Splits the request into the spend info of the leaf and the signatures of the path.
    ///
    /// Signatures are placed into their slots by key, using the canonical key order.
    pub(crate) fn into_spend(
        self,
        params: &StakingParams,
    ) -> Result<(SpendInfo<RawControlBlock>, StakingSpendPath)> {
        let spend_info = SpendInfo::new(
            ScriptBuf::from_bytes(self.leaf_script),
            RawControlBlock::new(self.control_block),
        );

        let spend_path = match self.path {
            PathKind::Timelock => {
                if !self.covenant_signatures.is_empty()
                    || !self.finality_provider_signatures.is_empty()
                {
                    bail!("the timelock path only takes the delegator signature");
                }

                StakingSpendPath::Timelock {
                    delegator_signature: self.delegator_signature,
                }
            }
            PathKind::Unbonding => {
                if !self.finality_provider_signatures.is_empty() {
                    bail!("the unbonding path takes no finality provider signatures");
                }

                StakingSpendPath::Unbonding {
                    covenant_signatures: covenant_slots(params, self.covenant_signatures)?,
                    delegator_signature: self.delegator_signature,
                }
            }
            PathKind::Slashing => {
                let finality_providers = KeyOrder::new(self.finality_provider_keys)
                    .context("invalid finality provider keys")?;
                let finality_provider_signatures = collect_slots(
                    &finality_providers,
                    self.finality_provider_signatures
                        .into_iter()
                        .map(KeyedSignature::into_pair),
                )
                .context("invalid finality provider signatures")?;

                StakingSpendPath::Slashing {
                    covenant_signatures: covenant_slots(params, self.covenant_signatures)?,
                    finality_provider_signatures,
                    delegator_signature: self.delegator_signature,
                }
            }
        };

        Ok((spend_info, spend_path))
    }
}

fn covenant_slots(
    params: &StakingParams,
    signatures: Vec<KeyedSignature>,
) -> Result<Vec<SignatureSlot>> {
    let committee = params.covenant.key_order()?;

    collect_slots(&committee, signatures.into_iter().map(KeyedSignature::into_pair))
        .context("invalid covenant signatures")
}
