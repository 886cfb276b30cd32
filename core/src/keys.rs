use std::{
    fmt::Debug,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use fhegate_backend::{BooleanEngine, IntegerEngine};
use tracing::debug;

use crate::{
    context::ContextBinder,
    error::{GatewayError, Result},
};

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum HandleKind {
    ClientKey,
    ServerKey,
    PublicKey,
    Ciphertext,
}

impl HandleKind {
    pub fn is_key(&self) -> bool {
        !matches!(self, HandleKind::Ciphertext)
    }

    pub fn name(&self) -> &'static str {
        match self {
            HandleKind::ClientKey => "client key",
            HandleKind::ServerKey => "server key",
            HandleKind::PublicKey => "public key",
            HandleKind::Ciphertext => "ciphertext",
        }
    }
}

/// Count of live ciphertext handles created through one service.
///
/// Clones share the same counter.
#[derive(Clone, Default, Debug)]
pub struct HandleLedger(Arc<AtomicUsize>);

impl HandleLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live(&self) -> usize {
        self.0.load(Ordering::Acquire)
    }

    fn register(&self) {
        self.0.fetch_add(1, Ordering::AcqRel);
    }

    fn deregister(&self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Exclusively owned engine object.
///
/// A handle is either Live or Nil. Every accessor on a Nil handle fails with
/// [`GatewayError::Key`] (key kinds) or [`GatewayError::Codec`] (ciphertexts).
/// [`Handle::release`] is idempotent and leaves the handle Nil. Dropping a
/// live handle releases it; for key handles this is logged, since keys are
/// expected to be released explicitly.
pub struct Handle<T> {
    inner: Option<T>,
    kind: HandleKind,
    ledger: Option<HandleLedger>,
}

impl<T> Handle<T> {
    pub fn new(kind: HandleKind, value: T) -> Self {
        Self {
            inner: Some(value),
            kind,
            ledger: None,
        }
    }

    /// Wraps a ciphertext and registers it with `ledger` until release.
    pub fn tracked(value: T, ledger: &HandleLedger) -> Self {
        ledger.register();
        Self {
            inner: Some(value),
            kind: HandleKind::Ciphertext,
            ledger: Some(ledger.clone()),
        }
    }

    pub fn nil(kind: HandleKind) -> Self {
        Self {
            inner: None,
            kind,
            ledger: None,
        }
    }

    pub fn kind(&self) -> HandleKind {
        self.kind
    }

    pub fn is_nil(&self) -> bool {
        self.inner.is_none()
    }

    pub fn get(&self) -> Result<&T> {
        match &self.inner {
            Some(value) => Ok(value),
            None if self.kind.is_key() => Err(GatewayError::key(format!("{} is nil", self.kind.name()))),
            None => Err(GatewayError::codec("ciphertext is nil")),
        }
    }

    pub fn release(&mut self) {
        if self.inner.take().is_none() {
            return;
        }
        if let Some(ledger) = self.ledger.take() {
            ledger.deregister();
        }
    }
}

impl<T> Drop for Handle<T> {
    fn drop(&mut self) {
        if self.inner.is_some() && self.kind.is_key() {
            debug!(kind = self.kind.name(), "releasing key handle on drop");
        }
        self.release();
    }
}

impl<T> Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state: &str = if self.is_nil() { "nil" } else { "live" };
        write!(f, "Handle({}, {})", self.kind.name(), state)
    }
}

/// Freshly generated client and server keys.
pub struct KeyPair<C, S> {
    pub client: Handle<C>,
    pub server: Handle<S>,
}

impl<C, S> KeyPair<C, S> {
    pub fn release(&mut self) {
        self.client.release();
        self.server.release();
    }
}

pub type BooleanKeys<B> = KeyPair<<B as BooleanEngine>::BooleanClientKey, <B as BooleanEngine>::BooleanServerKey>;
pub type IntegerKeys<B> = KeyPair<<B as IntegerEngine>::IntegerClientKey, <B as IntegerEngine>::IntegerServerKey>;

pub fn generate_boolean_keys<B: BooleanEngine>() -> Result<BooleanKeys<B>> {
    let (client, server) = B::boolean_gen_keys().map_err(|status| GatewayError::engine("generate boolean keys", status))?;
    debug!(backend = B::NAME, family = "boolean", "generated key pair");
    Ok(KeyPair {
        client: Handle::new(HandleKind::ClientKey, client),
        server: Handle::new(HandleKind::ServerKey, server),
    })
}

/// Generates a Uint8 key pair and checks, with a bind/unbind on the calling
/// thread, that the engine accepts the server key as its ambient key.
pub fn generate_integer_keys<B: IntegerEngine>() -> Result<IntegerKeys<B>> {
    let (client, server) = B::uint8_gen_keys().map_err(|status| GatewayError::engine("generate integer keys", status))?;
    let mut keys: IntegerKeys<B> = KeyPair {
        client: Handle::new(HandleKind::ClientKey, client),
        server: Handle::new(HandleKind::ServerKey, server),
    };

    let accepted: Result<()> = ContextBinder::<B>::bind(&keys.server).and_then(|guard| guard.unbind());
    if let Err(err) = accepted {
        keys.release();
        return Err(err);
    }

    debug!(backend = B::NAME, family = "uint8", "generated key pair");
    Ok(keys)
}

pub fn derive_public_key<B: IntegerEngine>(client: &Handle<B::IntegerClientKey>) -> Result<Handle<B::IntegerPublicKey>> {
    let ck: &B::IntegerClientKey = client.get()?;
    let pk: B::IntegerPublicKey = B::uint8_public_key(ck).map_err(|status| GatewayError::engine("derive public key", status))?;
    Ok(Handle::new(HandleKind::PublicKey, pk))
}
