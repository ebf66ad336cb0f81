use thiserror::Error;

use crate::types::MalformedKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// Input could not be tokenized. `position` is the byte offset where the
    /// failure was detected (`input.len()` when the input ran out).
    #[error("malformed input at byte {position}: {kind}")]
    Malformed { kind: MalformedKind, position: usize },
}

impl SplitError {
    pub(crate) fn malformed(kind: MalformedKind, position: usize) -> Self {
        SplitError::Malformed { kind, position }
    }

    pub fn kind(&self) -> MalformedKind {
        match self {
            SplitError::Malformed { kind, .. } => *kind,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            SplitError::Malformed { position, .. } => *position,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("format string has no conversion")]
    MissingConversion,

    #[error("format string has more than one conversion (second at byte {0})")]
    ExtraConversion(usize),

    #[error("unknown conversion '{0}'")]
    UnknownConversion(char),

    #[error("format string ends inside a conversion")]
    Incomplete,

    #[error("width or precision exceeds {0}")]
    OutOfRange(usize),
}
