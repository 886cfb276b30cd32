//! Reference engine. **NOT SECURE.**
//!
//! Keys are a ChaCha8 seed; a ciphertext is its plaintext masked with a
//! keystream byte derived from `(seed, nonce)`. The server and public keys
//! carry the secret seed, so "homomorphic" operations decrypt, compute and
//! re-encrypt under a fresh nonce. The engine exists to exercise the core
//! quickly and deterministically against the same contracts as a real
//! engine: opaque keys, fallible primitives, structural checks on decode,
//! and a thread-local ambient server key for the Uint8 family.

mod ambient;
mod boolean;
mod integer;
mod keys;
mod wire;

#[cfg(test)]
mod tests;

pub use keys::{RefClientKey, RefPublicKey, RefServerKey};
pub use wire::RefCiphertext;

use crate::layouts::Backend;

pub struct RefEngine;

impl Backend for RefEngine {
    const NAME: &'static str = "cpu-ref";
}

impl RefEngine {
    /// Returns true if a Uint8 server key is registered on the calling thread.
    pub fn ambient_key_installed() -> bool {
        ambient::installed()
    }
}
