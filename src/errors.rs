//! Errors that may be encountered when toggling notes or reading them from a string
#[cfg(doc)]
use crate::{CellNote, Digit};

/// Error for [`CellNote::toggle_number`] and conversions into [`Digit`].
///
/// Contains the rejected number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("number must be between 1 and 9, found {0}")]
pub struct NotADigit(pub u8);

/// Error for decoding a note from its saved string form.
///
/// Decoding is fail-fast: a malformed note is reported to the caller
/// unchanged, it is never silently repaired. The persistence layer decides
/// how to treat corrupt saves.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseNoteError {
    /// Token is neither a number nor the `-` placeholder
    #[error("note contains invalid token {token:?}")]
    InvalidToken {
        /// The unparseable token, verbatim
        token: String,
    },
    /// Token is a well-formed number outside of `1..=9`
    #[error("note contains out of range number {value}")]
    OutOfRange {
        /// The rejected value
        value: i64,
    },
}
