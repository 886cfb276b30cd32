use bincode::Options;
use serde::{Deserialize, Serialize};

use crate::{
    MAX_SERIALIZED_BYTES,
    layouts::{EngineResult, Status},
};

pub(crate) const MAGIC: [u8; 4] = *b"FGRC";
pub(crate) const NONCE_BYTES: usize = 16;

/// Reference-engine ciphertext.
///
/// Wire format (bincode, fixed-width little-endian integers, 30 bytes):
/// `magic[4] | family u8 | key_id u64 | nonce[16] | body u8`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct RefCiphertext {
    pub(crate) magic: [u8; 4],
    pub(crate) family: u8,
    pub(crate) key_id: u64,
    pub(crate) nonce: [u8; NONCE_BYTES],
    pub(crate) body: u8,
}

impl RefCiphertext {
    pub(crate) const FAMILY_BOOLEAN: u8 = 1;
    pub(crate) const FAMILY_UINT8: u8 = 8;

    /// Identifier of the key this ciphertext was produced under.
    pub fn key_id(&self) -> u64 {
        self.key_id
    }
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_limit(MAX_SERIALIZED_BYTES)
}

pub(crate) fn encode(ct: &RefCiphertext) -> EngineResult<Vec<u8>> {
    options().serialize(ct).map_err(|_| Status::MALFORMED)
}

/// Decodes `bytes` as a ciphertext of `family`. Trailing bytes are rejected.
pub(crate) fn decode(bytes: &[u8], family: u8) -> EngineResult<RefCiphertext> {
    if bytes.is_empty() {
        return Err(Status::INVALID_INPUT);
    }
    let ct: RefCiphertext = options().deserialize(bytes).map_err(|_| Status::MALFORMED)?;
    if ct.magic != MAGIC {
        return Err(Status::MALFORMED);
    }
    if ct.family != family {
        return Err(Status::WRONG_FAMILY);
    }
    if family == RefCiphertext::FAMILY_BOOLEAN && ct.body > 1 {
        return Err(Status::MALFORMED);
    }
    Ok(ct)
}
