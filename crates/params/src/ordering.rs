//! Canonical ordering of signer keys in the staking scripts.
//!
//! The covenant and finality-provider branches of the staking scripts check signatures with a
//! chain of `OP_CHECKSIG`/`OP_CHECKSIGADD` operations, one per key:
//!
//! ```text
//! <pk_0> OP_CHECKSIG <pk_1> OP_CHECKSIGADD ... <pk_n-1> OP_CHECKSIGADD <k> OP_NUMEQUAL
//! ```
//!
//! Every check pops the top of the stack, so the signature for `pk_0` has to be the *last* of the
//! group in the witness. A witness that orders its slots differently from the script fails
//! verification even when every signature is valid, which is why both sides must derive their
//! order from the same [`KeyOrder`] instead of sorting independently.

use bitcoin::XOnlyPublicKey;

use crate::errors::{ParamsError, ParamsResult};

/// A non-empty, duplicate-free set of signer keys in canonical script order.
///
/// The canonical order is the descending lexicographic order of the 32-byte x-only
/// serialization of the keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyOrder {
    keys: Vec<XOnlyPublicKey>,
}

impl KeyOrder {
    /// Sorts the given keys into canonical order.
    ///
    /// # Errors
    ///
    /// If `keys` is empty or contains the same key more than once.
    pub fn new(keys: impl IntoIterator<Item = XOnlyPublicKey>) -> ParamsResult<Self> {
        let mut keys: Vec<XOnlyPublicKey> = keys.into_iter().collect();
        if keys.is_empty() {
            return Err(ParamsError::EmptyKeySet);
        }

        // NOTE: `XOnlyPublicKey`'s own `Ord` compares the internal representation, not the
        // serialized bytes, so it cannot be used here.
        keys.sort_by(|a, b| b.serialize().cmp(&a.serialize()));

        if let Some(pair) = keys.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ParamsError::DuplicateKey(pair[0]));
        }

        Ok(Self { keys })
    }

    /// Returns the keys in the order they are pushed into the script.
    pub fn script_order(&self) -> &[XOnlyPublicKey] {
        &self.keys
    }

    /// Returns an iterator over the keys in the order their signature slots appear in the
    /// witness stack.
    ///
    /// This is the reverse of [`Self::script_order`].
    pub fn witness_order(&self) -> impl ExactSizeIterator<Item = &XOnlyPublicKey> + '_ {
        self.keys.iter().rev()
    }

    /// Returns the index of the signature slot of `key` in the witness, if the key is part of
    /// this set.
    pub fn witness_position(&self, key: &XOnlyPublicKey) -> Option<usize> {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|script_position| self.keys.len() - 1 - script_position)
    }

    /// Returns `true` if `key` is part of this set.
    pub fn contains(&self, key: &XOnlyPublicKey) -> bool {
        self.keys.contains(key)
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false`; a [`KeyOrder`] cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
