use std::fmt::{Debug, Display};

/// Nonzero status code returned by a failing engine primitive.
///
/// Codes are opaque to the core: it carries them, together with the name of
/// the failing operation, up to the caller for diagnosis.
#[derive(PartialEq, Eq, Copy, Clone, Hash)]
pub struct Status(pub i32);

impl Status {
    /// An argument was rejected before reaching the primitive.
    pub const INVALID_INPUT: Status = Status(1);
    /// Serialized bytes are truncated, carry trailing garbage, or do not
    /// decode to the expected structure.
    pub const MALFORMED: Status = Status(2);
    /// Serialized bytes decode to a ciphertext of another family.
    pub const WRONG_FAMILY: Status = Status(3);
    /// Operands were produced under different keys.
    pub const KEY_MISMATCH: Status = Status(4);
    /// An ambient-key primitive ran on a thread with no registered server key.
    pub const NO_SERVER_KEY: Status = Status(5);
    /// The engine refused to encrypt the given value.
    pub const ENCRYPTION: Status = Status(6);
    /// A serialized ciphertext exceeds [`crate::MAX_SERIALIZED_BYTES`].
    pub const SIZE_LIMIT: Status = Status(7);

    pub fn code(&self) -> i32 {
        self.0
    }

    fn name(&self) -> Option<&'static str> {
        match *self {
            Status::INVALID_INPUT => Some("invalid input"),
            Status::MALFORMED => Some("malformed"),
            Status::WRONG_FAMILY => Some("wrong family"),
            Status::KEY_MISMATCH => Some("key mismatch"),
            Status::NO_SERVER_KEY => Some("no server key"),
            Status::ENCRYPTION => Some("encryption"),
            Status::SIZE_LIMIT => Some("size limit"),
            _ => None,
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", self.0, name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Debug for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Status({self})")
    }
}

/// Result of an engine primitive.
pub type EngineResult<T> = Result<T, Status>;
