//! Module to generate arbitrary keys and signatures for testing.
use std::collections::HashSet;

use bitcoin::XOnlyPublicKey;
use secp256k1::{
    rand::{rngs::OsRng, Rng},
    schnorr::Signature,
    Keypair, Message, SECP256K1,
};

/// Generates a random keypair.
pub fn generate_keypair() -> Keypair {
    Keypair::new(SECP256K1, &mut OsRng)
}

/// Generates `count` keypairs with pairwise distinct public keys.
pub fn generate_keypairs(count: usize) -> Vec<Keypair> {
    let mut seen = HashSet::with_capacity(count);
    let mut keypairs = Vec::with_capacity(count);

    while keypairs.len() != count {
        let keypair = generate_keypair();
        if seen.insert(keypair.x_only_public_key().0) {
            keypairs.push(keypair);
        }
    }

    keypairs
}

/// Generates a random x-only public key.
pub fn generate_xonly_pubkey() -> XOnlyPublicKey {
    generate_keypair().x_only_public_key().0
}

/// Generates `count` pairwise distinct x-only public keys.
pub fn generate_xonly_pubkeys(count: usize) -> Vec<XOnlyPublicKey> {
    generate_keypairs(count)
        .into_iter()
        .map(|keypair| keypair.x_only_public_key().0)
        .collect()
}

/// Generates a random signature.
///
/// The signature is well-formed but does not verify against any key.
pub fn generate_signature() -> Signature {
    let mut sig = [0u8; 64];
    OsRng.fill(&mut sig);

    Signature::from_slice(&sig).expect("should be able to generate arbitrary signature")
}

/// Generates `count` random signatures.
pub fn generate_signatures(count: usize) -> Vec<Signature> {
    (0..count).map(|_| generate_signature()).collect()
}

/// Signs a random message with the given keypair.
pub fn sign_random_message(keypair: &Keypair) -> Signature {
    let mut digest = [0u8; 32];
    OsRng.fill(&mut digest);

    SECP256K1.sign_schnorr(&Message::from_digest(digest), keypair)
}
