//! Error types for identifier generation, parsing, and validation.

use thiserror::Error;

/// Errors that can occur when generating or parsing an [`EmojiId`].
///
/// The four user-visible failure kinds are mutually exclusive; every
/// fallible operation surfaces the error to its immediate caller with no
/// internal retry.
///
/// [`EmojiId`]: crate::EmojiId
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The string does not match the 8-4-4-4-12 grouped layout.
    #[error("invalid ID format: {message}")]
    InvalidFormat { message: String },

    /// The string is well-shaped but contains a token outside the alphabet.
    #[error("invalid token: {token:?} is not in the alphabet")]
    InvalidToken { token: char },

    /// The system's secure random source could not be read.
    #[error("failed to read from the secure random source")]
    EntropyFailure,

    /// The supplied alphabet has fewer than 2 entries.
    #[error("alphabet must contain at least 2 entries, got {len}")]
    AlphabetTooSmall { len: usize },

    /// The supplied alphabet exceeds the 16-bit sampling range.
    #[error("alphabet must contain at most {max} entries, got {len}", max = crate::alphabet::MAX_ALPHABET_LEN)]
    AlphabetTooLarge { len: usize },
}

impl IdError {
    /// Returns true if this error indicates a structurally malformed string.
    pub fn is_format_error(&self) -> bool {
        matches!(self, IdError::InvalidFormat { .. })
    }

    /// Returns true if this error indicates an unusable alphabet.
    pub fn is_alphabet_error(&self) -> bool {
        matches!(
            self,
            IdError::AlphabetTooSmall { .. } | IdError::AlphabetTooLarge { .. }
        )
    }
}
