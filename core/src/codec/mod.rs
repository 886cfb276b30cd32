//! Ciphertext handles to bytes and back.

pub mod armor;

use std::marker::PhantomData;

use fhegate_backend::{Backend, CiphertextFamily};

use crate::{
    config::CodecConfig,
    error::{GatewayError, Result},
    keys::{Handle, HandleLedger},
};

/// Serializes and deserializes ciphertexts of family `F` on engine `B`.
///
/// Every handle the codec hands out is registered with its ledger until it is
/// released or dropped.
pub struct CiphertextCodec<B: Backend, F: CiphertextFamily<B>> {
    max_bytes: usize,
    ledger: HandleLedger,
    _phantom: PhantomData<fn() -> (B, F)>,
}

impl<B: Backend, F: CiphertextFamily<B>> CiphertextCodec<B, F> {
    pub fn new(config: &CodecConfig, ledger: HandleLedger) -> Self {
        Self {
            max_bytes: config.max_ciphertext_bytes,
            ledger,
            _phantom: PhantomData,
        }
    }

    pub fn ledger(&self) -> &HandleLedger {
        &self.ledger
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub fn serialize(&self, ct: &Handle<F::Ciphertext>) -> Result<Vec<u8>> {
        let ct: &F::Ciphertext = ct.get()?;
        F::serialize(ct).map_err(|status| GatewayError::engine("serialize", status))
    }

    /// Fails with [`GatewayError::Codec`] on empty or oversized input, and on
    /// any input the engine refuses to decode.
    pub fn deserialize(&self, bytes: &[u8]) -> Result<Handle<F::Ciphertext>> {
        if bytes.is_empty() {
            return Err(GatewayError::codec(format!("empty {} ciphertext", F::NAME)));
        }
        if bytes.len() > self.max_bytes {
            return Err(GatewayError::codec(format!(
                "{} ciphertext of {} bytes exceeds limit of {}",
                F::NAME,
                bytes.len(),
                self.max_bytes
            )));
        }
        let ct: F::Ciphertext = F::deserialize(bytes)
            .map_err(|status| GatewayError::codec(format!("invalid {} ciphertext (status {status})", F::NAME)))?;
        Ok(self.adopt(ct))
    }

    /// Takes ownership of a ciphertext produced by the engine.
    pub fn adopt(&self, ct: F::Ciphertext) -> Handle<F::Ciphertext> {
        Handle::tracked(ct, &self.ledger)
    }
}
