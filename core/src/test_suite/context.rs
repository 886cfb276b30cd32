use fhegate_backend::{IntegerEngine, Status};

use crate::{
    ContextBinder, ContextError, GatewayError, IntegerCryptoService,
    keys::{Handle, HandleKind},
};

pub fn test_bind_nil_key<B: IntegerEngine>(_: &IntegerCryptoService<B>) {
    let nil: Handle<B::IntegerServerKey> = Handle::nil(HandleKind::ServerKey);
    assert!(matches!(ContextBinder::<B>::bind(&nil), Err(GatewayError::Key(_))));
    assert!(!ContextBinder::<B>::is_bound());
}

pub fn test_bind_twice_keeps_first_binding<B: IntegerEngine>(service: &IntegerCryptoService<B>) {
    let guard = ContextBinder::<B>::bind(service.server_key()).unwrap();
    assert!(matches!(
        ContextBinder::<B>::bind(service.server_key()),
        Err(GatewayError::Context(ContextError::AlreadyBound))
    ));
    assert!(ContextBinder::<B>::is_bound());

    // The surviving binding is still usable by the engine.
    let ct: B::IntegerCiphertext = B::uint8_deserialize(&service.encrypt_with_client(2).unwrap()).unwrap();
    let sum: Vec<u8> = B::uint8_serialize(&B::uint8_add(&ct, &ct).unwrap()).unwrap();

    guard.unbind().unwrap();
    assert!(!ContextBinder::<B>::is_bound());
    assert_eq!(service.decrypt(&sum).unwrap(), 4);
}

pub fn test_run_unbinds_on_failure<B: IntegerEngine>(service: &IntegerCryptoService<B>) {
    let res: Result<(), GatewayError> = ContextBinder::<B>::run(service.server_key(), "sample op", || Err(Status::INVALID_INPUT));
    match res {
        Err(GatewayError::Engine { op, status }) => {
            assert_eq!(op, "sample op");
            assert_eq!(status, Status::INVALID_INPUT);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(!ContextBinder::<B>::is_bound());

    assert_eq!(ContextBinder::<B>::run(service.server_key(), "sample op", || Ok(3)).unwrap(), 3);
    assert!(!ContextBinder::<B>::is_bound());
}

pub fn test_guard_unbinds_on_unwind<B: IntegerEngine>(service: &IntegerCryptoService<B>) {
    let unwound = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _guard = ContextBinder::<B>::bind(service.server_key()).unwrap();
        panic!("inside bound section");
    }));
    assert!(unwound.is_err());
    assert!(!ContextBinder::<B>::is_bound());
}

/// Ambient arithmetic is refused by the engine on a thread with no binding.
pub fn test_ambient_op_requires_binding<B: IntegerEngine>(service: &IntegerCryptoService<B>) {
    let ct: B::IntegerCiphertext = {
        let bytes: Vec<u8> = service.encrypt_with_client(1).unwrap();
        B::uint8_deserialize(&bytes).unwrap()
    };
    assert_eq!(B::uint8_add(&ct, &ct).err(), Some(Status::NO_SERVER_KEY));
}

/// A binding is visible only on the thread that made it.
pub fn test_binding_is_thread_local<B: IntegerEngine>(service: &IntegerCryptoService<B>) {
    let guard = ContextBinder::<B>::bind(service.server_key()).unwrap();
    std::thread::scope(|s| {
        s.spawn(|| assert!(!ContextBinder::<B>::is_bound()));
    });
    drop(guard);
    assert!(!ContextBinder::<B>::is_bound());
}
