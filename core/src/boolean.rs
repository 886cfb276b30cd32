use fhegate_backend::{Boolean, BooleanEngine, EngineResult};
use tracing::debug;

use crate::{
    codec::CiphertextCodec,
    config::GatewayConfig,
    error::{GatewayError, Result},
    keys::{BooleanKeys, Handle, HandleLedger, KeyPair, generate_boolean_keys},
};

type Gate<B> = fn(
    &<B as BooleanEngine>::BooleanServerKey,
    &<B as BooleanEngine>::BooleanCiphertext,
    &<B as BooleanEngine>::BooleanCiphertext,
) -> EngineResult<<B as BooleanEngine>::BooleanCiphertext>;

/// Boolean family service. Owns one client key and one server key; the server
/// key is passed explicitly to every gate, so all operations may run in
/// parallel on a shared instance.
pub struct BooleanCryptoService<B: BooleanEngine> {
    client: Handle<B::BooleanClientKey>,
    server: Handle<B::BooleanServerKey>,
    codec: CiphertextCodec<B, Boolean>,
}

impl<B: BooleanEngine> BooleanCryptoService<B> {
    /// Generates a fresh key pair. A failure here is fatal for the instance.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let keys: BooleanKeys<B> = generate_boolean_keys::<B>()?;
        Ok(Self::from_keys(config, keys))
    }

    pub fn from_keys(config: &GatewayConfig, keys: BooleanKeys<B>) -> Self {
        let KeyPair { client, server } = keys;
        debug!(backend = B::NAME, "boolean service ready");
        Self {
            client,
            server,
            codec: CiphertextCodec::new(&config.codec, HandleLedger::new()),
        }
    }

    pub fn backend(&self) -> &'static str {
        B::NAME
    }

    /// Ciphertext handles currently alive in this service. Zero whenever no
    /// operation is in flight.
    pub fn live_ciphertexts(&self) -> usize {
        self.codec.ledger().live()
    }

    pub fn encrypt(&self, value: bool) -> Result<Vec<u8>> {
        let ck: &B::BooleanClientKey = self.client.get()?;
        let ct: B::BooleanCiphertext =
            B::boolean_encrypt(ck, value).map_err(|status| GatewayError::engine("boolean encrypt", status))?;
        self.codec.serialize(&self.codec.adopt(ct))
    }

    pub fn decrypt(&self, bytes: &[u8]) -> Result<bool> {
        let ct: Handle<B::BooleanCiphertext> = self.codec.deserialize(bytes)?;
        let ck: &B::BooleanClientKey = self.client.get()?;
        B::boolean_decrypt(ck, ct.get()?).map_err(|status| GatewayError::engine("boolean decrypt", status))
    }

    pub fn and(&self, lhs: &[u8], rhs: &[u8]) -> Result<Vec<u8>> {
        self.gate("boolean and", lhs, rhs, B::boolean_and)
    }

    pub fn or(&self, lhs: &[u8], rhs: &[u8]) -> Result<Vec<u8>> {
        self.gate("boolean or", lhs, rhs, B::boolean_or)
    }

    pub fn xor(&self, lhs: &[u8], rhs: &[u8]) -> Result<Vec<u8>> {
        self.gate("boolean xor", lhs, rhs, B::boolean_xor)
    }

    pub fn not(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let ct: Handle<B::BooleanCiphertext> = self.codec.deserialize(bytes)?;
        let sk: &B::BooleanServerKey = self.server.get()?;
        let out: B::BooleanCiphertext =
            B::boolean_not(sk, ct.get()?).map_err(|status| GatewayError::engine("boolean not", status))?;
        self.codec.serialize(&self.codec.adopt(out))
    }

    fn gate(&self, op: &'static str, lhs: &[u8], rhs: &[u8], gate: Gate<B>) -> Result<Vec<u8>> {
        let lhs: Handle<B::BooleanCiphertext> = self.codec.deserialize(lhs)?;
        let rhs: Handle<B::BooleanCiphertext> = self.codec.deserialize(rhs)?;
        let sk: &B::BooleanServerKey = self.server.get()?;
        let out: B::BooleanCiphertext = gate(sk, lhs.get()?, rhs.get()?).map_err(|status| GatewayError::engine(op, status))?;
        self.codec.serialize(&self.codec.adopt(out))
    }

    /// Releases the client then the server key. Idempotent; later operations
    /// fail with [`GatewayError::Key`].
    pub fn close(&mut self) {
        if self.client.is_nil() && self.server.is_nil() {
            return;
        }
        self.client.release();
        self.server.release();
        debug!(backend = B::NAME, "boolean service closed");
    }
}
