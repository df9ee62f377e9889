use std::fmt;

/// Failure reported by a [`Dom`](crate::Dom) implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// The selector could not be parsed.
    InvalidSelector(String),
    /// A host API call failed. Carries the host's description of the failure.
    Host(String),
    /// The element handle does not belong to this document.
    UnknownNode,
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::InvalidSelector(selector) => write!(f, "invalid selector '{selector}'"),
            DomError::Host(message) => write!(f, "host DOM error: {message}"),
            DomError::UnknownNode => write!(f, "unknown node"),
        }
    }
}

impl std::error::Error for DomError {}
