use fhegate_backend::{EngineResult, IntegerEngine, Uint8};
use tracing::debug;

use crate::{
    codec::CiphertextCodec,
    config::GatewayConfig,
    context::ContextBinder,
    error::{GatewayError, Result},
    keys::{Handle, HandleLedger, IntegerKeys, KeyPair, derive_public_key, generate_integer_keys},
};

type AmbientOp<B> = fn(
    &<B as IntegerEngine>::IntegerCiphertext,
    &<B as IntegerEngine>::IntegerCiphertext,
) -> EngineResult<<B as IntegerEngine>::IntegerCiphertext>;

/// Uint8 family service. Owns a client, server and public key.
///
/// Arithmetic binds this service's server key on the calling thread for the
/// duration of the engine call only (see [`ContextBinder`]), so any number of
/// threads, and any number of services, can operate concurrently. Callers on
/// an async runtime should go through [`crate::lane::on_lane`].
pub struct IntegerCryptoService<B: IntegerEngine> {
    client: Handle<B::IntegerClientKey>,
    server: Handle<B::IntegerServerKey>,
    public: Handle<B::IntegerPublicKey>,
    codec: CiphertextCodec<B, Uint8>,
}

impl<B: IntegerEngine> IntegerCryptoService<B> {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let mut keys: IntegerKeys<B> = generate_integer_keys::<B>()?;
        let public: Handle<B::IntegerPublicKey> = match derive_public_key::<B>(&keys.client) {
            Ok(public) => public,
            Err(err) => {
                keys.release();
                return Err(err);
            }
        };
        let KeyPair { client, server } = keys;
        debug!(backend = B::NAME, "uint8 service ready");
        Ok(Self {
            client,
            server,
            public,
            codec: CiphertextCodec::new(&config.codec, HandleLedger::new()),
        })
    }

    pub fn backend(&self) -> &'static str {
        B::NAME
    }

    pub fn live_ciphertexts(&self) -> usize {
        self.codec.ledger().live()
    }

    /// The key bound by this service's arithmetic.
    pub fn server_key(&self) -> &Handle<B::IntegerServerKey> {
        &self.server
    }

    pub fn encrypt_with_client(&self, value: u8) -> Result<Vec<u8>> {
        let ck: &B::IntegerClientKey = self.client.get()?;
        let ct: B::IntegerCiphertext =
            B::uint8_encrypt(ck, value).map_err(|status| GatewayError::engine("uint8 encrypt", status))?;
        self.codec.serialize(&self.codec.adopt(ct))
    }

    pub fn encrypt_with_public(&self, value: u8) -> Result<Vec<u8>> {
        let pk: &B::IntegerPublicKey = self.public.get()?;
        let ct: B::IntegerCiphertext =
            B::uint8_encrypt_public(pk, value).map_err(|status| GatewayError::engine("uint8 public encrypt", status))?;
        self.codec.serialize(&self.codec.adopt(ct))
    }

    pub fn decrypt(&self, bytes: &[u8]) -> Result<u8> {
        let ct: Handle<B::IntegerCiphertext> = self.codec.deserialize(bytes)?;
        let ck: &B::IntegerClientKey = self.client.get()?;
        B::uint8_decrypt(ck, ct.get()?).map_err(|status| GatewayError::engine("uint8 decrypt", status))
    }

    /// Wrapping addition.
    pub fn add(&self, lhs: &[u8], rhs: &[u8]) -> Result<Vec<u8>> {
        self.ambient("uint8 add", lhs, rhs, B::uint8_add)
    }

    pub fn bit_and(&self, lhs: &[u8], rhs: &[u8]) -> Result<Vec<u8>> {
        self.ambient("uint8 bitand", lhs, rhs, B::uint8_bitand)
    }

    pub fn bit_xor(&self, lhs: &[u8], rhs: &[u8]) -> Result<Vec<u8>> {
        self.ambient("uint8 bitxor", lhs, rhs, B::uint8_bitxor)
    }

    fn ambient(&self, op: &'static str, lhs: &[u8], rhs: &[u8], f: AmbientOp<B>) -> Result<Vec<u8>> {
        let lhs: Handle<B::IntegerCiphertext> = self.codec.deserialize(lhs)?;
        let rhs: Handle<B::IntegerCiphertext> = self.codec.deserialize(rhs)?;
        let (a, b) = (lhs.get()?, rhs.get()?);
        let out: B::IntegerCiphertext = ContextBinder::<B>::run(&self.server, op, || f(a, b))?;
        self.codec.serialize(&self.codec.adopt(out))
    }

    /// Releases the public, client, then server key. Idempotent.
    pub fn close(&mut self) {
        if self.public.is_nil() && self.client.is_nil() && self.server.is_nil() {
            return;
        }
        self.public.release();
        self.client.release();
        self.server.release();
        debug!(backend = B::NAME, "uint8 service closed");
    }
}
