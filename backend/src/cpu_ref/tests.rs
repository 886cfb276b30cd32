use itertools::iproduct;

use crate::{
    cpu_ref::{RefCiphertext, RefEngine},
    layouts::Status,
    oep::{BooleanEngine, IntegerEngine},
};

#[test]
fn boolean_gates_truth_table() {
    let (ck, sk) = RefEngine::boolean_gen_keys().unwrap();
    iproduct!([false, true], [false, true]).for_each(|(a, b)| {
        let ct_a: RefCiphertext = RefEngine::boolean_encrypt(&ck, a).unwrap();
        let ct_b: RefCiphertext = RefEngine::boolean_encrypt(&ck, b).unwrap();
        let and: RefCiphertext = RefEngine::boolean_and(&sk, &ct_a, &ct_b).unwrap();
        let or: RefCiphertext = RefEngine::boolean_or(&sk, &ct_a, &ct_b).unwrap();
        let xor: RefCiphertext = RefEngine::boolean_xor(&sk, &ct_a, &ct_b).unwrap();
        let not: RefCiphertext = RefEngine::boolean_not(&sk, &ct_a).unwrap();
        assert_eq!(RefEngine::boolean_decrypt(&ck, &and).unwrap(), a && b);
        assert_eq!(RefEngine::boolean_decrypt(&ck, &or).unwrap(), a || b);
        assert_eq!(RefEngine::boolean_decrypt(&ck, &xor).unwrap(), a ^ b);
        assert_eq!(RefEngine::boolean_decrypt(&ck, &not).unwrap(), !a);
    });
}

#[test]
fn encryption_uses_fresh_nonces() {
    let (ck, _) = RefEngine::uint8_gen_keys().unwrap();
    let a: Vec<u8> = RefEngine::uint8_serialize(&RefEngine::uint8_encrypt(&ck, 42).unwrap()).unwrap();
    let b: Vec<u8> = RefEngine::uint8_serialize(&RefEngine::uint8_encrypt(&ck, 42).unwrap()).unwrap();
    assert_ne!(a, b);
}

#[test]
fn decode_rejects_malformed_bytes() {
    let (ck, _) = RefEngine::boolean_gen_keys().unwrap();
    let bytes: Vec<u8> = RefEngine::boolean_serialize(&RefEngine::boolean_encrypt(&ck, true).unwrap()).unwrap();

    assert_eq!(RefEngine::boolean_deserialize(&[]).unwrap_err(), Status::INVALID_INPUT);
    assert_eq!(RefEngine::boolean_deserialize(&bytes[..bytes.len() - 1]).unwrap_err(), Status::MALFORMED);
    assert_eq!(RefEngine::boolean_deserialize(b"not-base64-or-empty-bytes").unwrap_err(), Status::MALFORMED);

    let mut trailing: Vec<u8> = bytes.clone();
    trailing.push(0);
    assert_eq!(RefEngine::boolean_deserialize(&trailing).unwrap_err(), Status::MALFORMED);

    let mut bad_magic: Vec<u8> = bytes.clone();
    bad_magic[0] ^= 0xFF;
    assert_eq!(RefEngine::boolean_deserialize(&bad_magic).unwrap_err(), Status::MALFORMED);

    assert_eq!(RefEngine::uint8_deserialize(&bytes).unwrap_err(), Status::WRONG_FAMILY);
}

#[test]
fn ambient_ops_require_registered_key() {
    let (ck, sk) = RefEngine::uint8_gen_keys().unwrap();
    let a: RefCiphertext = RefEngine::uint8_encrypt(&ck, 200).unwrap();
    let b: RefCiphertext = RefEngine::uint8_encrypt(&ck, 100).unwrap();

    assert_eq!(RefEngine::uint8_add(&a, &b).unwrap_err(), Status::NO_SERVER_KEY);

    RefEngine::set_server_key(&sk).unwrap();
    assert!(RefEngine::ambient_key_installed());
    let sum: RefCiphertext = RefEngine::uint8_add(&a, &b).unwrap();
    RefEngine::unset_server_key().unwrap();
    assert!(!RefEngine::ambient_key_installed());

    assert_eq!(RefEngine::uint8_decrypt(&ck, &sum).unwrap(), 44);
    RefEngine::unset_server_key().unwrap();
}

#[test]
fn ambient_key_is_thread_local() {
    let (_, sk) = RefEngine::uint8_gen_keys().unwrap();
    RefEngine::set_server_key(&sk).unwrap();
    let seen_elsewhere: bool = std::thread::spawn(RefEngine::ambient_key_installed).join().unwrap();
    RefEngine::unset_server_key().unwrap();
    assert!(!seen_elsewhere);
}

#[test]
fn cross_key_operands_are_rejected() {
    let (ck_a, sk_a) = RefEngine::uint8_gen_keys().unwrap();
    let (ck_b, _) = RefEngine::uint8_gen_keys().unwrap();
    let a: RefCiphertext = RefEngine::uint8_encrypt(&ck_a, 1).unwrap();
    let b: RefCiphertext = RefEngine::uint8_encrypt(&ck_b, 2).unwrap();

    RefEngine::set_server_key(&sk_a).unwrap();
    let res = RefEngine::uint8_bitxor(&a, &b);
    RefEngine::unset_server_key().unwrap();

    assert_eq!(res.unwrap_err(), Status::KEY_MISMATCH);
    assert_eq!(RefEngine::uint8_decrypt(&ck_b, &a).unwrap_err(), Status::KEY_MISMATCH);
}

#[test]
fn public_key_encrypts_for_client_key() {
    let (ck, _) = RefEngine::uint8_gen_keys().unwrap();
    let pk = RefEngine::uint8_public_key(&ck).unwrap();
    (0..=255u8).step_by(17).for_each(|v| {
        let ct: RefCiphertext = RefEngine::uint8_encrypt_public(&pk, v).unwrap();
        assert_eq!(RefEngine::uint8_decrypt(&ck, &ct).unwrap(), v);
    });
}
