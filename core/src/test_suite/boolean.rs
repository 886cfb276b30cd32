use fhegate_backend::BooleanEngine;
use itertools::iproduct;

use crate::{BooleanCryptoService, GatewayConfig, GatewayError};

pub fn test_boolean_truth_tables<B: BooleanEngine>(service: &BooleanCryptoService<B>) {
    for (a, b) in iproduct!([false, true], [false, true]) {
        let ct_a: Vec<u8> = service.encrypt(a).unwrap();
        let ct_b: Vec<u8> = service.encrypt(b).unwrap();

        assert_eq!(service.decrypt(&service.and(&ct_a, &ct_b).unwrap()).unwrap(), a && b, "{a} AND {b}");
        assert_eq!(service.decrypt(&service.or(&ct_a, &ct_b).unwrap()).unwrap(), a || b, "{a} OR {b}");
        assert_eq!(service.decrypt(&service.xor(&ct_a, &ct_b).unwrap()).unwrap(), a ^ b, "{a} XOR {b}");
    }
    for a in [false, true] {
        let ct: Vec<u8> = service.encrypt(a).unwrap();
        assert_eq!(service.decrypt(&service.not(&ct).unwrap()).unwrap(), !a, "NOT {a}");
    }
}

pub fn test_boolean_scenario<B: BooleanEngine>(service: &BooleanCryptoService<B>) {
    let t: Vec<u8> = service.encrypt(true).unwrap();
    let f: Vec<u8> = service.encrypt(false).unwrap();

    assert!(!service.decrypt(&service.and(&t, &f).unwrap()).unwrap());
    assert!(service.decrypt(&service.or(&t, &f).unwrap()).unwrap());
    assert!(!service.decrypt(&service.not(&t).unwrap()).unwrap());
}

/// Gate outputs are valid inputs of further gates.
pub fn test_boolean_chained_gates<B: BooleanEngine>(service: &BooleanCryptoService<B>) {
    let t: Vec<u8> = service.encrypt(true).unwrap();
    let f: Vec<u8> = service.encrypt(false).unwrap();

    // (t XOR f) AND NOT f
    let x: Vec<u8> = service.xor(&t, &f).unwrap();
    let nf: Vec<u8> = service.not(&f).unwrap();
    assert!(service.decrypt(&service.and(&x, &nf).unwrap()).unwrap());
}

pub fn test_boolean_invalid_input<B: BooleanEngine>(service: &BooleanCryptoService<B>) {
    assert!(matches!(service.decrypt(b""), Err(GatewayError::Codec(_))));
    assert!(matches!(service.decrypt(b"not-base64-or-empty-bytes"), Err(GatewayError::Codec(_))));

    let ct: Vec<u8> = service.encrypt(true).unwrap();
    assert!(matches!(service.decrypt(&ct[..ct.len() / 2]), Err(GatewayError::Codec(_))));
    assert!(matches!(service.and(&ct, b""), Err(GatewayError::Codec(_))));
    assert!(matches!(service.not(b"\x00"), Err(GatewayError::Codec(_))));
}

pub fn test_boolean_ledger_drains<B: BooleanEngine>(_: &BooleanCryptoService<B>) {
    let service: BooleanCryptoService<B> = BooleanCryptoService::new(&GatewayConfig::default()).unwrap();

    let t: Vec<u8> = service.encrypt(true).unwrap();
    assert_eq!(service.live_ciphertexts(), 0);
    let out: Vec<u8> = service.xor(&t, &t).unwrap();
    assert_eq!(service.live_ciphertexts(), 0);
    assert!(!service.decrypt(&out).unwrap());
    assert_eq!(service.live_ciphertexts(), 0);

    // Second operand invalid: the first one is already live when decoding fails.
    assert!(service.or(&t, b"garbage").is_err());
    assert_eq!(service.live_ciphertexts(), 0);
}

pub fn test_boolean_close<B: BooleanEngine>(_: &BooleanCryptoService<B>) {
    let mut service: BooleanCryptoService<B> = BooleanCryptoService::new(&GatewayConfig::default()).unwrap();
    let t: Vec<u8> = service.encrypt(true).unwrap();

    service.close();
    service.close();

    assert!(matches!(service.encrypt(false), Err(GatewayError::Key(_))));
    assert!(matches!(service.decrypt(&t), Err(GatewayError::Key(_))));
    assert!(matches!(service.not(&t), Err(GatewayError::Key(_))));
    assert_eq!(service.live_ciphertexts(), 0);
}
