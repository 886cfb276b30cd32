use fhegate_backend::{BooleanEngine, IntegerEngine};
use fhegate_sampling::Source;

use crate::{
    BooleanCryptoService, ContextBinder, GatewayConfig, GatewayError, IntegerCryptoService,
    keys::{Handle, HandleKind, derive_public_key, generate_integer_keys},
};

pub fn test_uint8_scenario<B: IntegerEngine>(service: &IntegerCryptoService<B>) {
    let a: Vec<u8> = service.encrypt_with_client(200).unwrap();
    let b: Vec<u8> = service.encrypt_with_client(100).unwrap();

    assert_eq!(service.decrypt(&service.add(&a, &b).unwrap()).unwrap(), 44);
    assert_eq!(service.decrypt(&service.bit_and(&a, &b).unwrap()).unwrap(), 64);
    assert_eq!(service.decrypt(&service.bit_xor(&a, &b).unwrap()).unwrap(), 172);
}

pub fn test_uint8_arithmetic<B: IntegerEngine>(service: &IntegerCryptoService<B>) {
    let mut source: Source = Source::new([7u8; 32]);
    for _ in 0..8 {
        let (a, b) = (source.next_u8(), source.next_u8());
        let ct_a: Vec<u8> = service.encrypt_with_client(a).unwrap();
        let ct_b: Vec<u8> = service.encrypt_with_public(b).unwrap();

        assert_eq!(service.decrypt(&service.add(&ct_a, &ct_b).unwrap()).unwrap(), a.wrapping_add(b), "{a} + {b}");
        assert_eq!(service.decrypt(&service.bit_and(&ct_a, &ct_b).unwrap()).unwrap(), a & b, "{a} & {b}");
        assert_eq!(service.decrypt(&service.bit_xor(&ct_a, &ct_b).unwrap()).unwrap(), a ^ b, "{a} ^ {b}");
    }
}

pub fn test_uint8_public_parity<B: IntegerEngine>(service: &IntegerCryptoService<B>) {
    for v in [0u8, 1, 127, 128, 200, 255] {
        assert_eq!(service.decrypt(&service.encrypt_with_public(v).unwrap()).unwrap(), v);
    }
}

pub fn test_uint8_invalid_input<B: IntegerEngine>(service: &IntegerCryptoService<B>) {
    assert!(matches!(service.decrypt(b""), Err(GatewayError::Codec(_))));
    assert!(matches!(service.decrypt(b"not-base64-or-empty-bytes"), Err(GatewayError::Codec(_))));

    let ct: Vec<u8> = service.encrypt_with_client(9).unwrap();
    assert!(matches!(service.add(&ct, &ct[..ct.len() - 1]), Err(GatewayError::Codec(_))));
    assert!(!ContextBinder::<B>::is_bound());
}

/// Well-formed ciphertexts of another family are rejected as codec errors
/// before any arithmetic runs.
pub fn test_uint8_foreign_shape<B: IntegerEngine + BooleanEngine>(service: &IntegerCryptoService<B>) {
    let boolean: BooleanCryptoService<B> = BooleanCryptoService::new(&GatewayConfig::default()).unwrap();
    let foreign: Vec<u8> = boolean.encrypt(true).unwrap();
    let own: Vec<u8> = service.encrypt_with_client(5).unwrap();

    assert!(matches!(service.decrypt(&foreign), Err(GatewayError::Codec(_))));
    assert!(matches!(service.add(&own, &foreign), Err(GatewayError::Codec(_))));
    assert!(matches!(service.bit_xor(&foreign, &own), Err(GatewayError::Codec(_))));
    assert!(!ContextBinder::<B>::is_bound());
}

/// Bindings never outlive an operation, whether it succeeds or not.
pub fn test_uint8_leaves_thread_unbound<B: IntegerEngine>(service: &IntegerCryptoService<B>) {
    let ct: Vec<u8> = service.encrypt_with_client(3).unwrap();
    service.add(&ct, &ct).unwrap();
    assert!(!ContextBinder::<B>::is_bound());

    assert!(service.bit_xor(&ct, b"").is_err());
    assert!(!ContextBinder::<B>::is_bound());

    // A nested operation from inside a bound section is refused.
    let guard = ContextBinder::<B>::bind(service.server_key()).unwrap();
    assert!(matches!(
        service.add(&ct, &ct),
        Err(GatewayError::Context(crate::ContextError::AlreadyBound))
    ));
    assert!(ContextBinder::<B>::is_bound());
    guard.unbind().unwrap();
    assert!(!ContextBinder::<B>::is_bound());
}

pub fn test_uint8_ledger_drains<B: IntegerEngine>(_: &IntegerCryptoService<B>) {
    let service: IntegerCryptoService<B> = IntegerCryptoService::new(&GatewayConfig::default()).unwrap();

    let a: Vec<u8> = service.encrypt_with_client(5).unwrap();
    let b: Vec<u8> = service.encrypt_with_public(6).unwrap();
    assert_eq!(service.live_ciphertexts(), 0);

    let sum: Vec<u8> = service.add(&a, &b).unwrap();
    assert_eq!(service.live_ciphertexts(), 0);
    assert_eq!(service.decrypt(&sum).unwrap(), 11);
    assert_eq!(service.live_ciphertexts(), 0);

    assert!(service.bit_and(&a, b"junk").is_err());
    assert_eq!(service.live_ciphertexts(), 0);
}

pub fn test_uint8_close<B: IntegerEngine>(_: &IntegerCryptoService<B>) {
    let mut service: IntegerCryptoService<B> = IntegerCryptoService::new(&GatewayConfig::default()).unwrap();
    let ct: Vec<u8> = service.encrypt_with_client(1).unwrap();

    service.close();
    service.close();

    assert!(matches!(service.encrypt_with_client(1), Err(GatewayError::Key(_))));
    assert!(matches!(service.encrypt_with_public(1), Err(GatewayError::Key(_))));
    assert!(matches!(service.decrypt(&ct), Err(GatewayError::Key(_))));
    assert!(matches!(service.add(&ct, &ct), Err(GatewayError::Key(_))));
    assert!(!ContextBinder::<B>::is_bound());
}

/// Two services on one engine each bind only their own key.
pub fn test_uint8_independent_services<B: IntegerEngine>(service: &IntegerCryptoService<B>) {
    let other: IntegerCryptoService<B> = IntegerCryptoService::new(&GatewayConfig::default()).unwrap();

    let a: Vec<u8> = service.encrypt_with_client(40).unwrap();
    let b: Vec<u8> = other.encrypt_with_client(50).unwrap();

    assert_eq!(service.decrypt(&service.add(&a, &a).unwrap()).unwrap(), 80);
    assert_eq!(other.decrypt(&other.add(&b, &b).unwrap()).unwrap(), 100);
}

pub fn test_uint8_key_generation<B: IntegerEngine>(_: &IntegerCryptoService<B>) {
    let mut keys = generate_integer_keys::<B>().unwrap();
    assert!(!ContextBinder::<B>::is_bound());
    assert!(!keys.client.is_nil() && !keys.server.is_nil());

    let mut public = derive_public_key::<B>(&keys.client).unwrap();
    public.release();
    public.release();
    assert!(public.is_nil());

    keys.release();
    assert!(matches!(derive_public_key::<B>(&keys.client), Err(GatewayError::Key(_))));

    let nil: Handle<B::IntegerClientKey> = Handle::nil(HandleKind::ClientKey);
    assert!(matches!(derive_public_key::<B>(&nil), Err(GatewayError::Key(_))));
}
