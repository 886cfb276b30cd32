//! Property tests over the reference engine.
//!
//! Ciphertexts carry fresh nonces, so properties are stated on decrypted
//! values, never on bytes.

use fhegate_backend::{RefEngine, Status};
use fhegate_core::{BooleanCryptoService, GatewayConfig, GatewayError, IntegerCryptoService, codec::armor};
use once_cell::sync::Lazy;
use proptest::prelude::*;

static UINT8: Lazy<IntegerCryptoService<RefEngine>> =
    Lazy::new(|| IntegerCryptoService::new(&GatewayConfig::default()).unwrap());

static BOOLEAN: Lazy<BooleanCryptoService<RefEngine>> =
    Lazy::new(|| BooleanCryptoService::new(&GatewayConfig::default()).unwrap());

proptest! {
    /// Property: decrypt(add(a, b)) == a + b mod 256
    #[test]
    fn prop_add_wraps(a in any::<u8>(), b in any::<u8>()) {
        let s = &*UINT8;
        let sum = s.add(&s.encrypt_with_client(a).unwrap(), &s.encrypt_with_client(b).unwrap()).unwrap();
        prop_assert_eq!(s.decrypt(&sum).unwrap(), a.wrapping_add(b));
    }

    #[test]
    fn prop_bitwise_matches_native(a in any::<u8>(), b in any::<u8>()) {
        let s = &*UINT8;
        let (ct_a, ct_b) = (s.encrypt_with_client(a).unwrap(), s.encrypt_with_public(b).unwrap());
        prop_assert_eq!(s.decrypt(&s.bit_and(&ct_a, &ct_b).unwrap()).unwrap(), a & b);
        prop_assert_eq!(s.decrypt(&s.bit_xor(&ct_a, &ct_b).unwrap()).unwrap(), a ^ b);
    }

    /// Property: decrypt(encrypt_with_public(v)) == v
    #[test]
    fn prop_public_key_parity(v in any::<u8>()) {
        let s = &*UINT8;
        prop_assert_eq!(s.decrypt(&s.encrypt_with_public(v).unwrap()).unwrap(), v);
    }

    /// Property: armored transport is lossless
    #[test]
    fn prop_armor_round_trip(v in any::<u8>()) {
        let s = &*UINT8;
        let text = armor::encode(&s.encrypt_with_client(v).unwrap());
        prop_assert_eq!(s.decrypt(&armor::decode(&text).unwrap()).unwrap(), v);
    }

    #[test]
    fn prop_boolean_gates(a in any::<bool>(), b in any::<bool>()) {
        let s = &*BOOLEAN;
        let (ct_a, ct_b) = (s.encrypt(a).unwrap(), s.encrypt(b).unwrap());
        prop_assert_eq!(s.decrypt(&s.and(&ct_a, &ct_b).unwrap()).unwrap(), a && b);
        prop_assert_eq!(s.decrypt(&s.or(&ct_a, &ct_b).unwrap()).unwrap(), a || b);
        prop_assert_eq!(s.decrypt(&s.xor(&ct_a, &ct_b).unwrap()).unwrap(), a ^ b);
        prop_assert_eq!(s.decrypt(&s.not(&ct_a).unwrap()).unwrap(), !a);
    }

    /// Property: arbitrary bytes never panic and never decode
    #[test]
    fn prop_garbage_is_a_codec_error(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let s = &*UINT8;
        let res = s.decrypt(&bytes);
        prop_assert!(matches!(res, Err(GatewayError::Codec(_))), "unexpected {:?}", res);
    }
}

/// Well-formed bytes under another service's key decode, then fail in the engine.
#[test]
fn foreign_key_ciphertext_is_an_engine_error() {
    let other: IntegerCryptoService<RefEngine> = IntegerCryptoService::new(&GatewayConfig::default()).unwrap();
    let foreign: Vec<u8> = other.encrypt_with_client(9).unwrap();

    match UINT8.decrypt(&foreign) {
        Err(GatewayError::Engine { op, status }) => {
            assert_eq!(op, "uint8 decrypt");
            assert_eq!(status, Status::KEY_MISMATCH);
        }
        res => panic!("unexpected {res:?}"),
    }
}
