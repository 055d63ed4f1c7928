//! Helper errors

use domkit_dom::DomError;

/// Result alias for fallible helpers
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced from the host document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot create <{tag}>: {source}")]
    Tag { tag: String, source: DomError },

    #[error("cannot set attribute {name:?}: {source}")]
    Attribute { name: String, source: DomError },

    #[error(transparent)]
    Dom(#[from] DomError),
}
