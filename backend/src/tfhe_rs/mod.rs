//! Binding to [tfhe-rs](https://github.com/zama-ai/tfhe-rs).
//!
//! The boolean family maps onto `tfhe::boolean`, whose gates take the server
//! key explicitly. The Uint8 family maps onto the high-level `FheUint8` API,
//! whose operators read the server key installed on the calling thread by
//! `tfhe::set_server_key`.
//!
//! Decoding checks shape as well as syntax: Uint8 ciphertexts go through
//! tfhe-rs safe serialization and must conform to the engine's block
//! parameters, boolean ciphertexts must have the LWE dimension of the default
//! boolean parameters. Anything else is [`Status::MALFORMED`](crate::Status).

mod boolean;
mod integer;
mod wire;

#[cfg(test)]
mod tests;

use crate::layouts::Backend;

pub struct TfheEngine;

impl Backend for TfheEngine {
    const NAME: &'static str = "tfhe-rs";
}
