use crate::layouts::{Backend, EngineResult};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT
/// Uint8 family primitives.
///
/// Encryption and decryption take their key explicitly. Arithmetic does not:
/// it reads the server key registered on the *calling thread* by
/// [`IntegerEngine::set_server_key`]. Implementations must:
/// * keep the registration strictly thread-local;
/// * fail arithmetic with [`crate::Status::NO_SERVER_KEY`] rather than panic
///   when no key is registered on the calling thread;
/// * make [`IntegerEngine::unset_server_key`] a no-op on a thread with no
///   registration.
pub trait IntegerEngine: Backend {
    type IntegerClientKey: Send + Sync + 'static;
    type IntegerServerKey: Send + Sync + 'static;
    type IntegerPublicKey: Send + Sync + 'static;
    type IntegerCiphertext: Send + Sync + 'static;

    /// Generates a fresh key pair with the engine's default parameters.
    /// Does not register the server key.
    fn uint8_gen_keys() -> EngineResult<(Self::IntegerClientKey, Self::IntegerServerKey)>;

    fn uint8_public_key(ck: &Self::IntegerClientKey) -> EngineResult<Self::IntegerPublicKey>;

    fn uint8_encrypt(ck: &Self::IntegerClientKey, value: u8) -> EngineResult<Self::IntegerCiphertext>;

    fn uint8_encrypt_public(pk: &Self::IntegerPublicKey, value: u8) -> EngineResult<Self::IntegerCiphertext>;

    fn uint8_decrypt(ck: &Self::IntegerClientKey, ct: &Self::IntegerCiphertext) -> EngineResult<u8>;

    /// Registers `sk` as the ambient server key of the calling thread,
    /// replacing any previous registration.
    fn set_server_key(sk: &Self::IntegerServerKey) -> EngineResult<()>;

    /// Drops the ambient registration of the calling thread.
    fn unset_server_key() -> EngineResult<()>;

    /// Wrapping addition under the ambient server key.
    fn uint8_add(lhs: &Self::IntegerCiphertext, rhs: &Self::IntegerCiphertext) -> EngineResult<Self::IntegerCiphertext>;

    /// Bitwise AND under the ambient server key.
    fn uint8_bitand(lhs: &Self::IntegerCiphertext, rhs: &Self::IntegerCiphertext) -> EngineResult<Self::IntegerCiphertext>;

    /// Bitwise XOR under the ambient server key.
    fn uint8_bitxor(lhs: &Self::IntegerCiphertext, rhs: &Self::IntegerCiphertext) -> EngineResult<Self::IntegerCiphertext>;

    fn uint8_serialize(ct: &Self::IntegerCiphertext) -> EngineResult<Vec<u8>>;

    fn uint8_deserialize(bytes: &[u8]) -> EngineResult<Self::IntegerCiphertext>;
}
