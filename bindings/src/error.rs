use thiserror::Error;

/// Uniform failure value returned to the embedder in place of a
/// constructed object.
///
/// Every variant carries a complete, human-readable message; the embedder
/// is expected to surface it as-is (e.g. as the text of its own runtime
/// exception).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructError {
    /// The argument count matches no constructor form.
    #[error("{0}")]
    InvalidArity(String),

    /// The argument count matches a form, but a value has the wrong shape.
    #[error("{0}")]
    InvalidArgumentType(String),

    /// Shapes were fine; the architecture layer rejected the coerced values.
    #[error("{0}")]
    NativeConstructionFailed(String),
}

/// Discriminant of a [`ConstructError`], for embedders that map kinds
/// onto their own exception types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArity,
    InvalidArgumentType,
    NativeConstructionFailed,
}

impl ConstructError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConstructError::InvalidArity(_) => ErrorKind::InvalidArity,
            ConstructError::InvalidArgumentType(_) => ErrorKind::InvalidArgumentType,
            ConstructError::NativeConstructionFailed(_) => ErrorKind::NativeConstructionFailed,
        }
    }

    /// Translates an architecture-layer rejection, keeping only its
    /// message text.
    pub fn from_native(err: arch::ArchError) -> Self {
        ConstructError::NativeConstructionFailed(err.to_string())
    }
}

impl From<arch::ArchError> for ConstructError {
    fn from(err: arch::ArchError) -> Self {
        ConstructError::from_native(err)
    }
}
