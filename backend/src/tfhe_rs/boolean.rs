use tfhe::{
    boolean::{
        parameters::DEFAULT_PARAMETERS,
        prelude::{BinaryBooleanGates, Ciphertext, ClientKey, ServerKey},
    },
    conformance::ParameterSetConformant,
    core_crypto::prelude::{CiphertextModulus, LweCiphertextConformanceParams},
};

use crate::{
    layouts::{EngineResult, Status},
    oep::BooleanEngine,
    tfhe_rs::TfheEngine,
};

use super::wire;

/// Encrypted boolean ciphertexts live under the small LWE key of
/// `DEFAULT_PARAMETERS`, the set `tfhe::boolean::gen_keys` uses.
fn conformant(ct: &Ciphertext) -> bool {
    match ct {
        Ciphertext::Encrypted(lwe) => lwe.is_conformant(&LweCiphertextConformanceParams {
            lwe_dim: DEFAULT_PARAMETERS.lwe_dimension,
            ct_modulus: CiphertextModulus::new_native(),
        }),
        Ciphertext::Trivial(_) => true,
    }
}

impl BooleanEngine for TfheEngine {
    type BooleanClientKey = ClientKey;
    type BooleanServerKey = ServerKey;
    type BooleanCiphertext = Ciphertext;

    fn boolean_gen_keys() -> EngineResult<(ClientKey, ServerKey)> {
        Ok(tfhe::boolean::gen_keys())
    }

    fn boolean_encrypt(ck: &ClientKey, value: bool) -> EngineResult<Ciphertext> {
        Ok(ck.encrypt(value))
    }

    fn boolean_decrypt(ck: &ClientKey, ct: &Ciphertext) -> EngineResult<bool> {
        Ok(ck.decrypt(ct))
    }

    fn boolean_and(sk: &ServerKey, lhs: &Ciphertext, rhs: &Ciphertext) -> EngineResult<Ciphertext> {
        Ok(sk.and(lhs, rhs))
    }

    fn boolean_or(sk: &ServerKey, lhs: &Ciphertext, rhs: &Ciphertext) -> EngineResult<Ciphertext> {
        Ok(sk.or(lhs, rhs))
    }

    fn boolean_xor(sk: &ServerKey, lhs: &Ciphertext, rhs: &Ciphertext) -> EngineResult<Ciphertext> {
        Ok(sk.xor(lhs, rhs))
    }

    fn boolean_not(sk: &ServerKey, ct: &Ciphertext) -> EngineResult<Ciphertext> {
        Ok(sk.not(ct))
    }

    fn boolean_serialize(ct: &Ciphertext) -> EngineResult<Vec<u8>> {
        wire::encode(ct)
    }

    fn boolean_deserialize(bytes: &[u8]) -> EngineResult<Ciphertext> {
        let ct: Ciphertext = wire::decode(bytes)?;
        if !conformant(&ct) {
            return Err(Status::MALFORMED);
        }
        Ok(ct)
    }
}
