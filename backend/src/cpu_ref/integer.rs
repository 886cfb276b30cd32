use std::sync::Arc;

use crate::{
    cpu_ref::{RefCiphertext, RefClientKey, RefEngine, RefPublicKey, RefServerKey, ambient, keys::Secret, wire},
    layouts::EngineResult,
    oep::IntegerEngine,
};

const FAMILY: u8 = RefCiphertext::FAMILY_UINT8;

fn ambient_op(lhs: &RefCiphertext, rhs: &RefCiphertext, f: fn(u8, u8) -> u8) -> EngineResult<RefCiphertext> {
    ambient::with_server_key(|sk| {
        let a: u8 = sk.0.decrypt(FAMILY, lhs)?;
        let b: u8 = sk.0.decrypt(FAMILY, rhs)?;
        Ok(sk.0.encrypt(FAMILY, f(a, b)))
    })
}

impl IntegerEngine for RefEngine {
    type IntegerClientKey = RefClientKey;
    type IntegerServerKey = RefServerKey;
    type IntegerPublicKey = RefPublicKey;
    type IntegerCiphertext = RefCiphertext;

    fn uint8_gen_keys() -> EngineResult<(RefClientKey, RefServerKey)> {
        let secret: Arc<Secret> = Arc::new(Secret::generate());
        Ok((RefClientKey(secret.clone()), RefServerKey(secret)))
    }

    fn uint8_public_key(ck: &RefClientKey) -> EngineResult<RefPublicKey> {
        Ok(RefPublicKey(ck.0.clone()))
    }

    fn uint8_encrypt(ck: &RefClientKey, value: u8) -> EngineResult<RefCiphertext> {
        Ok(ck.0.encrypt(FAMILY, value))
    }

    fn uint8_encrypt_public(pk: &RefPublicKey, value: u8) -> EngineResult<RefCiphertext> {
        Ok(pk.0.encrypt(FAMILY, value))
    }

    fn uint8_decrypt(ck: &RefClientKey, ct: &RefCiphertext) -> EngineResult<u8> {
        ck.0.decrypt(FAMILY, ct)
    }

    fn set_server_key(sk: &RefServerKey) -> EngineResult<()> {
        ambient::install(sk);
        Ok(())
    }

    fn unset_server_key() -> EngineResult<()> {
        ambient::clear();
        Ok(())
    }

    fn uint8_add(lhs: &RefCiphertext, rhs: &RefCiphertext) -> EngineResult<RefCiphertext> {
        ambient_op(lhs, rhs, u8::wrapping_add)
    }

    fn uint8_bitand(lhs: &RefCiphertext, rhs: &RefCiphertext) -> EngineResult<RefCiphertext> {
        ambient_op(lhs, rhs, |a, b| a & b)
    }

    fn uint8_bitxor(lhs: &RefCiphertext, rhs: &RefCiphertext) -> EngineResult<RefCiphertext> {
        ambient_op(lhs, rhs, |a, b| a ^ b)
    }

    fn uint8_serialize(ct: &RefCiphertext) -> EngineResult<Vec<u8>> {
        wire::encode(ct)
    }

    fn uint8_deserialize(bytes: &[u8]) -> EngineResult<RefCiphertext> {
        wire::decode(bytes, FAMILY)
    }
}
