use tfhe::{
    ClientKey, FheUint8, FheUint16,
    boolean::prelude::Ciphertext,
    core_crypto::prelude::{CiphertextModulus, LweCiphertextOwned, LweSize},
    prelude::*,
};

use crate::{
    layouts::Status,
    oep::{BooleanEngine, IntegerEngine},
    tfhe_rs::{TfheEngine, integer, wire},
};

#[test]
fn uint8_rejects_wider_integer() {
    let ck: ClientKey = ClientKey::generate(integer::config());
    let wide: FheUint16 = FheUint16::encrypt(7u16, &ck);
    let bytes: Vec<u8> = wire::encode_versioned(&wide).unwrap();

    assert_eq!(TfheEngine::uint8_deserialize(&bytes).err(), Some(Status::MALFORMED));
}

#[test]
fn uint8_rejects_unversioned_bytes() {
    let ck: ClientKey = ClientKey::generate(integer::config());
    let ct: FheUint8 = FheUint8::encrypt(7u8, &ck);
    let bytes: Vec<u8> = wire::encode(&ct).unwrap();

    assert_eq!(TfheEngine::uint8_deserialize(&bytes).err(), Some(Status::MALFORMED));
}

/// Fresh, public-key and computed ciphertexts all pass the conformance check.
#[test]
fn uint8_engine_outputs_are_conformant() {
    let (ck, sk) = TfheEngine::uint8_gen_keys().unwrap();
    let pk = TfheEngine::uint8_public_key(&ck).unwrap();

    let a: FheUint8 = TfheEngine::uint8_encrypt(&ck, 200).unwrap();
    let b: FheUint8 = TfheEngine::uint8_encrypt_public(&pk, 100).unwrap();

    TfheEngine::set_server_key(&sk).unwrap();
    let sum: FheUint8 = TfheEngine::uint8_add(&a, &b).unwrap();
    let and: FheUint8 = TfheEngine::uint8_bitand(&a, &b).unwrap();
    TfheEngine::unset_server_key().unwrap();

    for (ct, want) in [(&a, 200u8), (&b, 100), (&sum, 44), (&and, 64)] {
        let bytes: Vec<u8> = TfheEngine::uint8_serialize(ct).unwrap();
        let back: FheUint8 = match TfheEngine::uint8_deserialize(&bytes) {
            Ok(back) => back,
            Err(status) => panic!("expected {want} to decode, got {status}"),
        };
        assert_eq!(TfheEngine::uint8_decrypt(&ck, &back).unwrap(), want);
    }
}

#[test]
fn boolean_rejects_wrong_lwe_dimension() {
    let foreign: Ciphertext = Ciphertext::Encrypted(LweCiphertextOwned::new(0u32, LweSize(11), CiphertextModulus::new_native()));
    let bytes: Vec<u8> = wire::encode(&foreign).unwrap();

    assert_eq!(TfheEngine::boolean_deserialize(&bytes).unwrap_err(), Status::MALFORMED);
}

#[test]
fn boolean_engine_outputs_are_conformant() {
    let (ck, sk) = TfheEngine::boolean_gen_keys().unwrap();
    let t: Ciphertext = TfheEngine::boolean_encrypt(&ck, true).unwrap();
    let f: Ciphertext = TfheEngine::boolean_encrypt(&ck, false).unwrap();
    let or: Ciphertext = TfheEngine::boolean_or(&sk, &t, &f).unwrap();

    let bytes: Vec<u8> = TfheEngine::boolean_serialize(&or).unwrap();
    let back: Ciphertext = TfheEngine::boolean_deserialize(&bytes).unwrap();
    assert!(TfheEngine::boolean_decrypt(&ck, &back).unwrap());
}
