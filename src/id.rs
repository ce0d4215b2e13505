//! The [`EmojiId`] identifier type: generation, formatting, and parsing.

use std::collections::HashSet;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::alphabet::{DEFAULT_ALPHABET, MIN_ALPHABET_LEN};
use crate::error::IdError;
use crate::sampler;

/// Number of tokens in an identifier.
pub const TOKEN_COUNT: usize = 32;

/// Token counts of the five delimiter-separated groups.
pub const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// Character separating the groups in the canonical string form.
pub const DELIMITER: char = '-';

/// A UUID-shaped identifier composed of 32 emoji tokens.
///
/// The canonical string layout is 8-4-4-4-12 tokens joined by `-`, e.g.
/// `😀🐙🍕🚀🐸🎧🔑🌈-🦊🍩⭐🧠-🐼🎲💧🏰-🍓🚲🛰🎃-🤖🌸🐳🍔🎸⚽🔥🐤🍺💎📡🥳`.
///
/// An `EmojiId` is an immutable value; it is only ever produced by random
/// generation ([`EmojiId::new`] and friends) or by strict parsing
/// ([`EmojiId::parse`] and friends). Equality is exact per-position token
/// equality. The all-`'\0'` value returned by [`Default::default`] is the
/// invalid/uninitialized sentinel, never a parseable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmojiId {
    tokens: [char; TOKEN_COUNT],
}

impl EmojiId {
    /// Generates a new random identifier from [`DEFAULT_ALPHABET`].
    pub fn new() -> Result<Self, IdError> {
        Self::new_with_alphabet(&DEFAULT_ALPHABET)
    }

    /// Generates a new random identifier from the provided alphabet.
    ///
    /// The alphabet must contain between 2 and 65536 entries; tokens are
    /// selected with the OS secure random source, free of modulo bias.
    pub fn new_with_alphabet(alphabet: &[char]) -> Result<Self, IdError> {
        Self::generate(&mut OsRng, alphabet)
    }

    /// Generates a new identifier from the provided alphabet, drawing
    /// randomness from `rng`.
    ///
    /// [`EmojiId::new`] and [`EmojiId::new_with_alphabet`] delegate here
    /// with [`OsRng`]; passing a deterministic source makes generation
    /// reproducible for tests. A failed draw aborts the whole operation
    /// with [`IdError::EntropyFailure`]; no partial identifier is returned.
    pub fn generate<R: TryRngCore + ?Sized>(
        rng: &mut R,
        alphabet: &[char],
    ) -> Result<Self, IdError> {
        let mut tokens = ['\0'; TOKEN_COUNT];
        for slot in &mut tokens {
            *slot = alphabet[sampler::random_index(rng, alphabet.len())?];
        }
        Ok(Self { tokens })
    }

    /// Generates a new random identifier and formats it.
    pub fn new_string() -> Result<String, IdError> {
        Ok(Self::new()?.to_string())
    }

    /// Like [`EmojiId::new`] but panics on error.
    ///
    /// # Panics
    ///
    /// Panics if the secure random source cannot be read. Only suitable
    /// where generation failure is a programming error.
    #[must_use]
    pub fn must_new() -> Self {
        Self::new().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Like [`EmojiId::new_string`] but panics on error.
    ///
    /// # Panics
    ///
    /// Panics if the secure random source cannot be read.
    #[must_use]
    pub fn must_new_string() -> String {
        Self::must_new().to_string()
    }

    /// Parses an identifier in 8-4-4-4-12 layout against
    /// [`DEFAULT_ALPHABET`].
    pub fn parse(s: &str) -> Result<Self, IdError> {
        Self::parse_with_alphabet(s, &DEFAULT_ALPHABET)
    }

    /// Parses an identifier in 8-4-4-4-12 layout and validates that every
    /// token is a member of the given alphabet.
    ///
    /// Checks are ordered for deterministic errors: alphabet size first,
    /// then group shape, then membership token-by-token in sequence order,
    /// failing on the first token outside the alphabet.
    pub fn parse_with_alphabet(s: &str, alphabet: &[char]) -> Result<Self, IdError> {
        if alphabet.len() < MIN_ALPHABET_LEN {
            return Err(IdError::AlphabetTooSmall {
                len: alphabet.len(),
            });
        }

        let parts: Vec<&str> = s.split(DELIMITER).collect();
        if parts.len() != GROUPS.len() {
            return Err(IdError::InvalidFormat {
                message: format!("expected {} groups, got {}", GROUPS.len(), parts.len()),
            });
        }

        // Group lengths are counted in chars, not bytes; emoji are
        // multi-byte in UTF-8.
        let mut tokens = ['\0'; TOKEN_COUNT];
        let mut filled = 0;
        for (i, part) in parts.iter().enumerate() {
            let want = GROUPS[i];
            let mut got = 0;
            for c in part.chars() {
                if got < want {
                    tokens[filled + got] = c;
                }
                got += 1;
            }
            if got != want {
                return Err(IdError::InvalidFormat {
                    message: format!("group {} has {got} tokens, expected {want}", i + 1),
                });
            }
            filled += want;
        }
        debug_assert_eq!(filled, TOKEN_COUNT);

        let allowed: HashSet<char> = alphabet.iter().copied().collect();
        for &token in &tokens {
            if !allowed.contains(&token) {
                return Err(IdError::InvalidToken { token });
            }
        }

        Ok(Self { tokens })
    }

    /// Like [`EmojiId::parse`] but panics on error.
    ///
    /// # Panics
    ///
    /// Panics if `s` is not a valid identifier. Never use this for
    /// untrusted input.
    #[must_use]
    pub fn must_parse(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Reports whether `s` is a valid identifier under
    /// [`DEFAULT_ALPHABET`].
    #[must_use]
    pub fn validate(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Reports whether this is the all-zero sentinel value.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.tokens == ['\0'; TOKEN_COUNT]
    }

    /// Returns a copy of the underlying 32 tokens.
    #[must_use]
    pub fn tokens(&self) -> [char; TOKEN_COUNT] {
        self.tokens
    }
}

/// The all-zero sentinel.
impl Default for EmojiId {
    fn default() -> Self {
        Self {
            tokens: ['\0'; TOKEN_COUNT],
        }
    }
}

impl fmt::Display for EmojiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut start = 0;
        for (i, len) in GROUPS.into_iter().enumerate() {
            if i > 0 {
                f.write_char(DELIMITER)?;
            }
            for &token in &self.tokens[start..start + len] {
                f.write_char(token)?;
            }
            start += len;
        }
        Ok(())
    }
}

impl FromStr for EmojiId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for EmojiId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for EmojiId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
