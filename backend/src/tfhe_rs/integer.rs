use std::cell::Cell;

use tfhe::{
    ClientKey, Config, ConfigBuilder, FheUint8, FheUint8ConformanceParams, PublicKey, ServerKey, prelude::*,
    shortint::{ClassicPBSParameters, parameters::PARAM_MESSAGE_2_CARRY_2_KS_PBS_TUNIFORM_2M128},
};

use crate::{
    layouts::{EngineResult, Status},
    oep::IntegerEngine,
    tfhe_rs::TfheEngine,
};

use super::wire;

thread_local! {
    // tfhe-rs panics when an operator runs without an installed key.
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Block parameters of every Uint8 key this engine generates.
pub(super) const BLOCK_PARAMS: ClassicPBSParameters = PARAM_MESSAGE_2_CARRY_2_KS_PBS_TUNIFORM_2M128;

pub(super) fn config() -> Config {
    ConfigBuilder::with_custom_parameters(BLOCK_PARAMS).build()
}

fn conformance() -> FheUint8ConformanceParams {
    FheUint8ConformanceParams::from(BLOCK_PARAMS)
}

fn ambient(f: impl FnOnce() -> FheUint8) -> EngineResult<FheUint8> {
    if !INSTALLED.get() {
        return Err(Status::NO_SERVER_KEY);
    }
    Ok(f())
}

impl IntegerEngine for TfheEngine {
    type IntegerClientKey = ClientKey;
    type IntegerServerKey = ServerKey;
    type IntegerPublicKey = PublicKey;
    type IntegerCiphertext = FheUint8;

    fn uint8_gen_keys() -> EngineResult<(ClientKey, ServerKey)> {
        Ok(tfhe::generate_keys(config()))
    }

    fn uint8_public_key(ck: &ClientKey) -> EngineResult<PublicKey> {
        Ok(PublicKey::new(ck))
    }

    fn uint8_encrypt(ck: &ClientKey, value: u8) -> EngineResult<FheUint8> {
        FheUint8::try_encrypt(value, ck).map_err(|_| Status::ENCRYPTION)
    }

    fn uint8_encrypt_public(pk: &PublicKey, value: u8) -> EngineResult<FheUint8> {
        FheUint8::try_encrypt(value, pk).map_err(|_| Status::ENCRYPTION)
    }

    fn uint8_decrypt(ck: &ClientKey, ct: &FheUint8) -> EngineResult<u8> {
        let value: u8 = ct.decrypt(ck);
        Ok(value)
    }

    fn set_server_key(sk: &ServerKey) -> EngineResult<()> {
        tfhe::set_server_key(sk.clone());
        INSTALLED.set(true);
        Ok(())
    }

    fn unset_server_key() -> EngineResult<()> {
        tfhe::unset_server_key();
        INSTALLED.set(false);
        Ok(())
    }

    fn uint8_add(lhs: &FheUint8, rhs: &FheUint8) -> EngineResult<FheUint8> {
        ambient(|| lhs + rhs)
    }

    fn uint8_bitand(lhs: &FheUint8, rhs: &FheUint8) -> EngineResult<FheUint8> {
        ambient(|| lhs & rhs)
    }

    fn uint8_bitxor(lhs: &FheUint8, rhs: &FheUint8) -> EngineResult<FheUint8> {
        ambient(|| lhs ^ rhs)
    }

    fn uint8_serialize(ct: &FheUint8) -> EngineResult<Vec<u8>> {
        wire::encode_versioned(ct)
    }

    fn uint8_deserialize(bytes: &[u8]) -> EngineResult<FheUint8> {
        wire::decode_conformant(bytes, &conformance())
    }
}
