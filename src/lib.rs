//! # emoji-id
//!
//! UUID-shaped random identifiers composed of emoji tokens, with strict
//! parsing and validation.
//!
//! ## Design Principles
//!
//! - Identifiers are fixed-shape values: always 32 tokens in an
//!   8-4-4-4-12 grouped layout joined by `-`
//! - Tokens are drawn from a configurable alphabet with a cryptographically
//!   secure source, using rejection sampling so every symbol is exactly
//!   equally likely
//! - Identifiers have a canonical string representation with strict
//!   parsing; parse → format → parse roundtrips exactly
//! - Everything is a pure function over its inputs: no global state, no
//!   locking, safe to call from any thread
//!
//! ## Example
//!
//! ```
//! use emoji_id::EmojiId;
//!
//! let id = EmojiId::new()?;
//! let s = id.to_string();
//! assert_eq!(EmojiId::parse(&s)?, id);
//! assert!(EmojiId::validate(&s));
//! # Ok::<(), emoji_id::IdError>(())
//! ```
//!
//! Custom alphabets are passed explicitly; the default alphabet is a fixed
//! constant and is never mutated:
//!
//! ```
//! use emoji_id::EmojiId;
//!
//! let id = EmojiId::new_with_alphabet(&['🦀', '🦞', '🦐', '🦑'])?;
//! # Ok::<(), emoji_id::IdError>(())
//! ```

pub mod alphabet;
mod error;
mod id;
pub mod sampler;

pub use alphabet::{DEFAULT_ALPHABET, MAX_ALPHABET_LEN, MIN_ALPHABET_LEN};
pub use error::IdError;
pub use id::{EmojiId, DELIMITER, GROUPS, TOKEN_COUNT};
