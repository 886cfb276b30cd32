//! # fhegate-backend
//!
//! A trait-based abstraction over homomorphic-encryption engines exposing a
//! fixed operation set: key generation, encryption, decryption, binary and
//! unary homomorphic operations, and ciphertext (de)serialization.
//!
//! The crate knows nothing about ownership discipline, release semantics or
//! ambient-context binding: those live in `fhegate-core`, which programs
//! against the traits defined here. An engine only has to map its primitives
//! onto the [`oep`] traits and report every failure as a [`layouts::Status`].
//!
//! ## Ciphertext families
//!
//! Two families are modelled:
//!
//! - **Boolean** ([`oep::BooleanEngine`]): one encrypted bit. The server key is
//!   passed explicitly to every gate, so gates are reentrant.
//! - **Uint8** ([`oep::IntegerEngine`]): one encrypted 8-bit unsigned integer.
//!   Arithmetic reads an *ambient* server key registered on the calling thread
//!   with [`oep::IntegerEngine::set_server_key`]. Calling an arithmetic
//!   primitive on a thread with no registered key fails with
//!   [`layouts::Status::NO_SERVER_KEY`].
//!
//! ## Architecture
//!
//! 1. **[`layouts`]** -- the [`layouts::Backend`] marker trait, engine status
//!    codes and the [`layouts::CiphertextFamily`] view used by codecs.
//! 2. **[`oep`]** -- Open Extension Points: the per-family traits an engine
//!    implements.
//! 3. **[`delegates`]** -- blanket `impl` glue connecting each family marker
//!    ([`layouts::Boolean`], [`layouts::Uint8`]) to the engine's primitives.
//! 4. **Engines** -- [`cpu_ref::RefEngine`], a pure-Rust correctness oracle
//!    that is **not secure**, and `tfhe_rs::TfheEngine` (feature `tfhe`), the
//!    production binding to tfhe-rs.
//!
//! ## Non-Goals
//!
//! - No cryptographic primitive, parameter selection or noise management is
//!   implemented here; those belong to the engine.

/// Blanket implementations connecting family markers to engine primitives.
pub mod delegates;

/// Marker traits, status codes and ciphertext family views.
pub mod layouts;

/// Open Extension Points: per-family traits engines implement.
pub mod oep;

/// Pure-Rust reference engine. NOT SECURE: test and oracle use only.
pub mod cpu_ref;

/// Binding to tfhe-rs.
#[cfg(feature = "tfhe")]
pub mod tfhe_rs;

pub use cpu_ref::RefEngine;
pub use layouts::{Backend, Boolean, CiphertextFamily, EngineResult, Status, Uint8};
pub use oep::{BooleanEngine, IntegerEngine};

#[cfg(feature = "tfhe")]
pub use tfhe_rs::TfheEngine;

/// Upper bound, in bytes, on any serialized ciphertext an engine agrees to
/// decode. Protects the bincode decoders from length-prefix driven
/// allocations on corrupt input.
pub const MAX_SERIALIZED_BYTES: u64 = 1 << 28;
