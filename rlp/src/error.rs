//! Error types for codec operations.

use thiserror::Error;

/// Error type for codec operations.
///
/// Every decode failure is terminal for that call: the decoder reports the
/// first violation and never retries or normalizes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("declared length runs past the input boundary")]
    TruncatedInput,
    #[error("unexpected trailing bytes: {0}")]
    TrailingBytes(usize),
    #[error("not a canonical short item")]
    NonCanonicalShortItem,
    #[error("leading zero in integer")]
    NonCanonicalInteger,
    #[error("not a canonical long form")]
    NonOptimalLength,
    #[error("integer too wide: {0} bytes")]
    IntegerTooWide(usize),
    #[error("numeric overflow: value does not fit in {0}")]
    NumericOverflow(&'static str),
    #[error("list operation on an item, or item operation on a list")]
    NotAListOrNotAnItem,
    #[error("unexpected negative big integer")]
    NegativeBigInteger,
    #[error("buffer growth would overflow capacity")]
    CapacityOverflow,
    #[error("input exceeds the addressable 31-bit range")]
    InputTooLarge,
    #[error("invalid utf-8 in item")]
    InvalidUtf8,
    #[error("unexpected list arity: expected {expected}, found {found}")]
    UnexpectedArity { expected: usize, found: usize },
}
