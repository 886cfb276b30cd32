//! Ambient server-key binding for the Uint8 family.
//!
//! The engine reads the Uint8 server key from thread-local state. A binding is
//! therefore only meaningful on the thread that made it, and for as long as
//! that thread does not run anything else. [`ContextGuard`] is `!Send`, so a
//! bound section cannot migrate to another thread or be held across an
//! `.await` in a `Send` future. The guard borrows the server key handle, so
//! the key cannot be released while bound.
//!
//! ```compile_fail
//! fn assert_send<T: Send>() {}
//! assert_send::<fhegate_core::ContextGuard<'static, fhegate_backend::RefEngine>>();
//! ```

use std::{cell::Cell, marker::PhantomData};

use fhegate_backend::{EngineResult, IntegerEngine};
use tracing::trace;

use crate::{
    error::{ContextError, GatewayError, Result},
    keys::Handle,
};

thread_local! {
    static BOUND: Cell<bool> = const { Cell::new(false) };
}

pub struct ContextBinder<B: IntegerEngine> {
    _phantom: PhantomData<B>,
}

impl<B: IntegerEngine> ContextBinder<B> {
    /// Registers `key` as the ambient server key of the calling thread.
    ///
    /// Fails with [`ContextError::AlreadyBound`] if this thread already holds
    /// a binding; that binding is left in place.
    pub fn bind(key: &Handle<B::IntegerServerKey>) -> Result<ContextGuard<'_, B>> {
        let sk: &B::IntegerServerKey = key.get()?;
        if BOUND.get() {
            return Err(ContextError::AlreadyBound.into());
        }
        B::set_server_key(sk).map_err(|status| GatewayError::engine("set server key", status))?;
        BOUND.set(true);
        trace!(backend = B::NAME, "bound server key");
        Ok(ContextGuard {
            released: false,
            _key: PhantomData,
            _lane: PhantomData,
        })
    }

    /// Runs `f` with `key` bound on the calling thread, unbinding before the
    /// result is looked at. A failure of `f` takes precedence over a failure
    /// to unbind.
    pub fn run<T>(key: &Handle<B::IntegerServerKey>, op: &'static str, f: impl FnOnce() -> EngineResult<T>) -> Result<T> {
        let guard: ContextGuard<'_, B> = Self::bind(key)?;
        let out: EngineResult<T> = f();
        let unbound: Result<()> = guard.unbind();
        let value: T = out.map_err(|status| GatewayError::engine(op, status))?;
        unbound?;
        Ok(value)
    }

    pub fn is_bound() -> bool {
        BOUND.get()
    }
}

/// A live binding on the current thread. Unbinds on drop.
pub struct ContextGuard<'k, B: IntegerEngine> {
    released: bool,
    _key: PhantomData<&'k B::IntegerServerKey>,
    _lane: PhantomData<*const ()>,
}

impl<B: IntegerEngine> ContextGuard<'_, B> {
    pub fn unbind(mut self) -> Result<()> {
        self.released = true;
        release::<B>()
    }
}

impl<B: IntegerEngine> Drop for ContextGuard<'_, B> {
    fn drop(&mut self) {
        if !self.released {
            // Drop cannot return the unbind status.
            let _ = release::<B>();
        }
    }
}

fn release<B: IntegerEngine>() -> Result<()> {
    let status: EngineResult<()> = B::unset_server_key();
    BOUND.set(false);
    trace!(backend = B::NAME, "unbound server key");
    status.map_err(|status| GatewayError::engine("unset server key", status))
}
