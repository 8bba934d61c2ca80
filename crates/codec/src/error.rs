use thiserror::Error;

/// A symbol with no code, or a code with no symbol.
///
/// Never returned to the caller on its own: the codec hands it to the
/// configured [`RecoveryHook`](crate::RecoveryHook), which decides what to
/// emit. Only an escalating hook turns it into a failed conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No encoding for: {unit:?}")]
pub struct NoEncodingError {
    /// The offending unit, a single symbol on encode or a code group on decode.
    pub unit: String,
}

impl NoEncodingError {
    pub fn new(unit: impl Into<String>) -> Self {
        Self { unit: unit.into() }
    }
}

/// Error type for codec construction and conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Symbol table is empty")]
    EmptyTable,
    #[error("Empty code for symbol {0:?}")]
    EmptyCode(char),
    #[error("Invalid symbol {0:?}: table keys must be exactly one character")]
    InvalidSymbol(String),
    #[error("Ambiguous table: code {code:?} is claimed by {first:?} and {second:?}")]
    AmbiguousCode {
        code: String,
        first: char,
        second: char,
    },
    #[error("Empty input: nothing to convert")]
    EmptyInput,
    #[error(transparent)]
    NoEncoding(#[from] NoEncodingError),
}
