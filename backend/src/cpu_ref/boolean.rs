use std::sync::Arc;

use crate::{
    cpu_ref::{RefCiphertext, RefClientKey, RefEngine, RefServerKey, keys::Secret, wire},
    layouts::EngineResult,
    oep::BooleanEngine,
};

const FAMILY: u8 = RefCiphertext::FAMILY_BOOLEAN;

fn gate(sk: &RefServerKey, lhs: &RefCiphertext, rhs: &RefCiphertext, f: fn(u8, u8) -> u8) -> EngineResult<RefCiphertext> {
    let a: u8 = sk.0.decrypt(FAMILY, lhs)?;
    let b: u8 = sk.0.decrypt(FAMILY, rhs)?;
    Ok(sk.0.encrypt(FAMILY, f(a, b)))
}

impl BooleanEngine for RefEngine {
    type BooleanClientKey = RefClientKey;
    type BooleanServerKey = RefServerKey;
    type BooleanCiphertext = RefCiphertext;

    fn boolean_gen_keys() -> EngineResult<(RefClientKey, RefServerKey)> {
        let secret: Arc<Secret> = Arc::new(Secret::generate());
        Ok((RefClientKey(secret.clone()), RefServerKey(secret)))
    }

    fn boolean_encrypt(ck: &RefClientKey, value: bool) -> EngineResult<RefCiphertext> {
        Ok(ck.0.encrypt(FAMILY, value as u8))
    }

    fn boolean_decrypt(ck: &RefClientKey, ct: &RefCiphertext) -> EngineResult<bool> {
        ck.0.decrypt(FAMILY, ct).map(|bit| bit == 1)
    }

    fn boolean_and(sk: &RefServerKey, lhs: &RefCiphertext, rhs: &RefCiphertext) -> EngineResult<RefCiphertext> {
        gate(sk, lhs, rhs, |a, b| a & b)
    }

    fn boolean_or(sk: &RefServerKey, lhs: &RefCiphertext, rhs: &RefCiphertext) -> EngineResult<RefCiphertext> {
        gate(sk, lhs, rhs, |a, b| a | b)
    }

    fn boolean_xor(sk: &RefServerKey, lhs: &RefCiphertext, rhs: &RefCiphertext) -> EngineResult<RefCiphertext> {
        gate(sk, lhs, rhs, |a, b| a ^ b)
    }

    fn boolean_not(sk: &RefServerKey, ct: &RefCiphertext) -> EngineResult<RefCiphertext> {
        let a: u8 = sk.0.decrypt(FAMILY, ct)?;
        Ok(sk.0.encrypt(FAMILY, a ^ 1))
    }

    fn boolean_serialize(ct: &RefCiphertext) -> EngineResult<Vec<u8>> {
        wire::encode(ct)
    }

    fn boolean_deserialize(bytes: &[u8]) -> EngineResult<RefCiphertext> {
        wire::decode(bytes, FAMILY)
    }
}
