use thiserror::Error;

/// Failure reported by the checked (`expect_*`) scanner operations.
///
/// The core `skip*`/`scan*` operations never fail; they leave the position
/// unchanged instead. The checked variants surface the same outcome as an
/// error so lexers can propagate it with `?`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanError {
    /// Input ended before the expected elements were found.
    #[error("unexpected end of input at {position}")]
    UnexpectedEnd {
        /// Index at which more input was needed (the collection's end index).
        position: usize,
    },
    /// An element did not match what was expected.
    #[error("unexpected element at {position}")]
    Mismatch {
        /// Index of the first element that did not match.
        position: usize,
    },
}

impl ScanError {
    /// Index the error refers to.
    #[must_use]
    pub fn position(&self) -> usize {
        match *self {
            ScanError::UnexpectedEnd { position } | ScanError::Mismatch { position } => position,
        }
    }
}
