use crate::layouts::{Backend, EngineResult};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT
/// Boolean family primitives. The server key is an explicit argument of every
/// gate, so implementations must be reentrant with respect to it: gates may be
/// called concurrently from any number of threads with the same key.
pub trait BooleanEngine: Backend {
    type BooleanClientKey: Send + Sync + 'static;
    type BooleanServerKey: Send + Sync + 'static;
    type BooleanCiphertext: Send + Sync + 'static;

    /// Generates a fresh key pair with the engine's default parameters.
    fn boolean_gen_keys() -> EngineResult<(Self::BooleanClientKey, Self::BooleanServerKey)>;

    fn boolean_encrypt(ck: &Self::BooleanClientKey, value: bool) -> EngineResult<Self::BooleanCiphertext>;

    fn boolean_decrypt(ck: &Self::BooleanClientKey, ct: &Self::BooleanCiphertext) -> EngineResult<bool>;

    fn boolean_and(
        sk: &Self::BooleanServerKey,
        lhs: &Self::BooleanCiphertext,
        rhs: &Self::BooleanCiphertext,
    ) -> EngineResult<Self::BooleanCiphertext>;

    fn boolean_or(
        sk: &Self::BooleanServerKey,
        lhs: &Self::BooleanCiphertext,
        rhs: &Self::BooleanCiphertext,
    ) -> EngineResult<Self::BooleanCiphertext>;

    fn boolean_xor(
        sk: &Self::BooleanServerKey,
        lhs: &Self::BooleanCiphertext,
        rhs: &Self::BooleanCiphertext,
    ) -> EngineResult<Self::BooleanCiphertext>;

    fn boolean_not(sk: &Self::BooleanServerKey, ct: &Self::BooleanCiphertext) -> EngineResult<Self::BooleanCiphertext>;

    fn boolean_serialize(ct: &Self::BooleanCiphertext) -> EngineResult<Vec<u8>>;

    fn boolean_deserialize(bytes: &[u8]) -> EngineResult<Self::BooleanCiphertext>;
}
