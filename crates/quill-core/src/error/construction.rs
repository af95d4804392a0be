use super::Error;

/// Error when a node cannot be constructed.
///
/// This occurs when:
/// - A set operation is finalized without its left or right operand
/// - The ALL / DISTINCT indicator handed over by the parser is malformed
///
/// The parser must abandon the enclosing statement when it sees this error; no
/// partially built node is ever returned alongside it.
#[derive(Debug, Clone)]
pub(super) struct ConstructionError {
    message: Box<str>,
}

impl std::error::Error for ConstructionError {}

impl core::fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "construction failed: {}", self.message)
    }
}

impl Error {
    /// Creates a construction error.
    pub fn construction(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Construction(ConstructionError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a construction error.
    pub fn is_construction(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Construction(_))
    }
}
