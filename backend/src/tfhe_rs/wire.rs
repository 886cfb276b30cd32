use bincode::{ErrorKind, Options};
use serde::{Serialize, de::DeserializeOwned};
use tfhe::{
    Unversionize, Versionize,
    conformance::ParameterSetConformant,
    named::Named,
    safe_serialization::{safe_deserialize_conformant, safe_serialize},
};

use crate::{
    MAX_SERIALIZED_BYTES,
    layouts::{EngineResult, Status},
};

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_limit(MAX_SERIALIZED_BYTES)
}

fn status(err: bincode::Error) -> Status {
    match *err {
        ErrorKind::SizeLimit => Status::SIZE_LIMIT,
        _ => Status::MALFORMED,
    }
}

pub(super) fn encode<T: Serialize>(value: &T) -> EngineResult<Vec<u8>> {
    options().serialize(value).map_err(status)
}

pub(super) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> EngineResult<T> {
    if bytes.is_empty() {
        return Err(Status::INVALID_INPUT);
    }
    options().deserialize(bytes).map_err(status)
}

/// Versioned encoding with a type header, for types tfhe-rs can check for
/// conformance on the way back in.
pub(super) fn encode_versioned<T: Serialize + Versionize + Named>(value: &T) -> EngineResult<Vec<u8>> {
    let mut bytes: Vec<u8> = Vec::new();
    safe_serialize(value, &mut bytes, MAX_SERIALIZED_BYTES).map_err(status)?;
    Ok(bytes)
}

/// Rejects anything that is not a `T` shaped by `params`, e.g. a wider
/// integer whose bytes would otherwise decode cleanly.
pub(super) fn decode_conformant<T>(bytes: &[u8], params: &T::ParameterSet) -> EngineResult<T>
where
    T: DeserializeOwned + Unversionize + Named + ParameterSetConformant,
{
    if bytes.is_empty() {
        return Err(Status::INVALID_INPUT);
    }
    safe_deserialize_conformant(bytes, MAX_SERIALIZED_BYTES, params).map_err(|_| Status::MALFORMED)
}
