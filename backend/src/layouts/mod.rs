mod family;
mod status;

pub use family::*;
pub use status::*;

/// Marker trait for an encryption engine.
///
/// Engines are zero-sized types; all state they need lives in the key and
/// ciphertext values they hand out, or, for the ambient-key family, in
/// thread-local storage owned by the engine.
pub trait Backend: Sized + Send + Sync + 'static {
    /// Short identifier used in diagnostics.
    const NAME: &'static str;
}
