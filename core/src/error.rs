use fhegate_backend::Status;
use thiserror::Error;

/// Violations of the bind/unbind protocol.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContextError {
    /// The calling thread already holds an ambient binding.
    #[error("a server key is already bound on this lane")]
    AlreadyBound,

    /// The lane running a pinned section was lost before it completed.
    #[error("execution lane lost: {0}")]
    LaneLost(String),
}

/// Errors reported by the core. None is retried internally.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// A key handle is Nil, absent, or was used after release.
    #[error("key error: {0}")]
    Key(String),

    /// Empty, truncated, oversized or structurally invalid ciphertext bytes,
    /// or use of a released ciphertext handle.
    #[error("codec error: {0}")]
    Codec(String),

    /// An engine primitive returned a nonzero status.
    #[error("engine error: {op} failed with status {status}")]
    Engine { op: &'static str, status: Status },

    #[error("context error: {0}")]
    Context(#[from] ContextError),

    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl GatewayError {
    pub fn key(msg: impl Into<String>) -> Self {
        GatewayError::Key(msg.into())
    }

    pub fn codec(msg: impl Into<String>) -> Self {
        GatewayError::Codec(msg.into())
    }

    pub fn engine(op: &'static str, status: Status) -> Self {
        GatewayError::Engine { op, status }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
