use std::cell::RefCell;

use crate::{
    cpu_ref::RefServerKey,
    layouts::{EngineResult, Status},
};

thread_local! {
    static SERVER_KEY: RefCell<Option<RefServerKey>> = const { RefCell::new(None) };
}

pub(super) fn install(sk: &RefServerKey) {
    SERVER_KEY.with(|slot| *slot.borrow_mut() = Some(sk.clone()));
}

pub(super) fn clear() {
    SERVER_KEY.with(|slot| slot.borrow_mut().take());
}

pub(super) fn installed() -> bool {
    SERVER_KEY.with(|slot| slot.borrow().is_some())
}

/// Runs `f` with the server key registered on the calling thread.
pub(super) fn with_server_key<T>(f: impl FnOnce(&RefServerKey) -> EngineResult<T>) -> EngineResult<T> {
    let sk: Option<RefServerKey> = SERVER_KEY.with(|slot| slot.borrow().clone());
    match sk {
        Some(sk) => f(&sk),
        None => Err(Status::NO_SERVER_KEY),
    }
}
