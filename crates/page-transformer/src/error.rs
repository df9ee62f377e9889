use std::fmt;

use page_scene::DomError;

/// Reason a transform could not be applied. Aborts the rest of startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// No element matches the selector.
    MissingElement { selector: String },
    /// Fewer row containers than the positional index requires.
    MissingRow {
        selector: String,
        index: usize,
        found: usize,
    },
    /// The card row holds fewer slots than the permutation addresses.
    NotEnoughCards { found: usize, required: usize },
    /// Selection outside the list widget's current items.
    NoSuchItem { index: usize, items: usize },
    /// The page's embedded configuration is not valid JSON for `PageConfig`.
    InvalidConfig(String),
    Dom(DomError),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::MissingElement { selector } => {
                write!(f, "no element matches '{selector}'")
            }
            TransformError::MissingRow { selector, index, found } => write!(
                f,
                "expected a row at index {index} of '{selector}', found {found} rows"
            ),
            TransformError::NotEnoughCards { found, required } => {
                write!(f, "expected at least {required} cards, found {found}")
            }
            TransformError::NoSuchItem { index, items } => {
                write!(f, "cannot select item {index}, the list has {items} items")
            }
            TransformError::InvalidConfig(message) => write!(f, "invalid page config: {message}"),
            TransformError::Dom(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransformError::Dom(error) => Some(error),
            _ => None,
        }
    }
}

impl From<DomError> for TransformError {
    fn from(error: DomError) -> Self {
        TransformError::Dom(error)
    }
}
