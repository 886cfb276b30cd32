use fhegate_backend::{IntegerEngine, Uint8};

use crate::{
    GatewayError, IntegerCryptoService,
    codec::CiphertextCodec,
    config::CodecConfig,
    keys::{Handle, HandleKind, HandleLedger},
};

pub fn test_codec_round_trip<B: IntegerEngine>(service: &IntegerCryptoService<B>) {
    let codec: CiphertextCodec<B, Uint8> = CiphertextCodec::new(&CodecConfig::default(), HandleLedger::new());
    let bytes: Vec<u8> = service.encrypt_with_client(77).unwrap();

    let ct: Handle<B::IntegerCiphertext> = codec.deserialize(&bytes).unwrap();
    assert_eq!(codec.ledger().live(), 1);
    let again: Vec<u8> = codec.serialize(&ct).unwrap();
    drop(ct);
    assert_eq!(codec.ledger().live(), 0);

    assert_eq!(service.decrypt(&again).unwrap(), 77);
}

pub fn test_codec_size_limit<B: IntegerEngine>(service: &IntegerCryptoService<B>) {
    let bytes: Vec<u8> = service.encrypt_with_client(1).unwrap();

    let exact: CiphertextCodec<B, Uint8> = CiphertextCodec::new(
        &CodecConfig {
            max_ciphertext_bytes: bytes.len(),
        },
        HandleLedger::new(),
    );
    assert!(exact.deserialize(&bytes).is_ok());

    let short: CiphertextCodec<B, Uint8> = CiphertextCodec::new(
        &CodecConfig {
            max_ciphertext_bytes: bytes.len() - 1,
        },
        HandleLedger::new(),
    );
    assert!(matches!(short.deserialize(&bytes), Err(GatewayError::Codec(_))));
    assert_eq!(short.ledger().live(), 0);
}

pub fn test_codec_nil_and_released<B: IntegerEngine>(service: &IntegerCryptoService<B>) {
    let codec: CiphertextCodec<B, Uint8> = CiphertextCodec::new(&CodecConfig::default(), HandleLedger::new());

    let nil: Handle<B::IntegerCiphertext> = Handle::nil(HandleKind::Ciphertext);
    assert!(matches!(codec.serialize(&nil), Err(GatewayError::Codec(_))));
    assert!(matches!(codec.deserialize(b""), Err(GatewayError::Codec(_))));

    let bytes: Vec<u8> = service.encrypt_with_client(4).unwrap();
    let mut ct: Handle<B::IntegerCiphertext> = codec.deserialize(&bytes).unwrap();
    ct.release();
    ct.release();
    assert_eq!(codec.ledger().live(), 0);
    assert!(matches!(codec.serialize(&ct), Err(GatewayError::Codec(_))));
}
