//! Ed25519 signing helpers mirroring the platform's request signatures.

use ed25519_dalek::{Signer, SigningKey};

/// Fixed test keypair seed; never used outside tests.
pub const TEST_SEED: [u8; 32] = [7u8; 32];

pub fn test_signing_key() -> SigningKey {
    SigningKey::from_bytes(&TEST_SEED)
}

/// Hex-encoded public key matching [`test_signing_key`].
pub fn test_public_key_hex() -> String {
    hex::encode(test_signing_key().verifying_key().to_bytes())
}

/// Sign `timestamp || body` and return the hex signature header value.
pub fn sign(timestamp: &str, body: &[u8]) -> String {
    let mut message = timestamp.as_bytes().to_vec();
    message.extend_from_slice(body);
    hex::encode(test_signing_key().sign(&message).to_bytes())
}
