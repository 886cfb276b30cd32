//! Key-lifecycle and execution-context layer of an HE gateway.
//!
//! `fhegate-core` sits between a transport layer, which hands it raw ciphertext
//! bytes and primitive values, and an engine implementing the
//! [`fhegate_backend`] extension points. It owns key material, moves
//! ciphertexts across the byte boundary, and binds the engine's ambient server
//! key around each Uint8 operation.
//!
//! # Services
//!
//! * [`BooleanCryptoService`] -- client + server key; the server key is passed
//!   explicitly to every gate, so operations are freely parallel.
//! * [`IntegerCryptoService`] -- client + server + public key over `u8`; the
//!   server key is ambient on the engine side and is bound per operation by
//!   [`ContextBinder`].
//!
//! Every operation deserializes its operands into fresh handles, computes,
//! serializes the result, and releases every handle before returning, on every
//! exit path. [`BooleanCryptoService::live_ciphertexts`] and
//! [`IntegerCryptoService::live_ciphertexts`] expose the per-service count.
//!
//! # Module overview
//!
//! | Module | Responsibility |
//! |---|---|
//! | [`keys`] | Owned handles, release, per-service ledger, key generation |
//! | [`codec`] | Ciphertext bytes, size limit, base64 armor for transports |
//! | [`context`] | Bind/unbind of the ambient Uint8 server key |
//! | [`lane`] | Running core calls from async code on a blocking lane |
//! | [`config`] | `figment`-loaded gateway configuration |
//! | [`error`] | [`GatewayError`] and [`ContextError`] |
//! | [`test_suite`] | Engine-generic tests and their instantiation macros |
//!
//! The core never installs a `tracing` subscriber and only emits `debug` and
//! `trace` events.

mod boolean;
mod integer;

pub mod codec;
pub mod config;
pub mod context;
pub mod error;
pub mod keys;
pub mod lane;

pub mod test_suite;

pub use boolean::BooleanCryptoService;
pub use config::{CodecConfig, GatewayConfig};
pub use context::{ContextBinder, ContextGuard};
pub use error::{ContextError, GatewayError, Result};
pub use integer::IntegerCryptoService;
pub use keys::{Handle, HandleKind, HandleLedger};

#[cfg(test)]
mod tests;
