use crate::layouts::{Backend, EngineResult};

/// Serialization view of one ciphertext family on backend `B`.
///
/// Codecs are written once against this trait. Implementations are the
/// blanket delegates in [`crate::delegates`].
pub trait CiphertextFamily<B: Backend>: Send + Sync + 'static {
    /// Family name used in diagnostics, e.g. `"boolean"`.
    const NAME: &'static str;

    /// Engine ciphertext type of this family.
    type Ciphertext: Send + Sync + 'static;

    /// Serializes `ct`. Any engine-side transient buffer is freed before
    /// returning.
    fn serialize(ct: &Self::Ciphertext) -> EngineResult<Vec<u8>>;

    /// Reconstructs a ciphertext from bytes produced by [`Self::serialize`].
    /// Fails on empty, truncated or structurally invalid input.
    fn deserialize(bytes: &[u8]) -> EngineResult<Self::Ciphertext>;
}

/// Encrypted single bit.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub struct Boolean;

/// Encrypted 8-bit unsigned integer.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub struct Uint8;
