//! The default emoji alphabet and alphabet size bounds.
//!
//! An alphabet is an ordered slice of `char`s. Each entry is one Unicode
//! scalar value, so every token occupies exactly one display unit; multi
//! scalar grapheme clusters (ZWJ sequences, flags, skin tones) cannot be
//! represented and are deliberately absent from the default set. Entries
//! are not checked for uniqueness; duplicates skew generation toward the
//! duplicated symbol and are not recommended. Entries must not contain the
//! group delimiter `-`.

/// Smallest usable alphabet. One symbol cannot encode a random choice.
pub const MIN_ALPHABET_LEN: usize = 2;

/// Largest usable alphabet for generation.
///
/// The sampler draws 16-bit values, so indices above this bound would be
/// unreachable and the uniformity guarantee would silently break.
pub const MAX_ALPHABET_LEN: usize = 1 << 16;

/// The default alphabet: 152 curated single-scalar emoji.
///
/// Fixed and identical across all default-alphabet operations within a
/// build. Callers wanting a different symbol set pass their own slice to
/// the `*_with_alphabet` constructors; the default is never mutated.
pub const DEFAULT_ALPHABET: [char; 152] = [
    '😀', '😃', '😄', '😁', '😆', '😅', '😂', '🤣',
    '😊', '😇', '🙂', '🙃', '😉', '😌', '😍', '🥰',
    '😘', '😗', '😙', '😚', '😋', '😛', '😝', '😜',
    '🤪', '🤨', '🧐', '🤓', '😎', '🥳', '😤', '😡',
    '🤯', '😱', '😴', '🤤', '😷', '🤒', '🤕', '🤠',
    '😈', '👻', '🤖', '🎃', '🐶', '🐱', '🐭', '🐹',
    '🐰', '🦊', '🐻', '🐼', '🐨', '🐯', '🦁', '🐸',
    '🐵', '🐔', '🐧', '🐦', '🐤', '🐙', '🦑', '🦀',
    '🐠', '🐳', '🦋', '🐞', '🌸', '🌼', '🌻', '🌺',
    '🍎', '🍊', '🍋', '🍉', '🍇', '🍓', '🍒', '🍍',
    '🥑', '🥦', '🥕', '🌶', '🍔', '🍟', '🍕', '🌮',
    '🍣', '🍩', '🍪', '🍫', '🍿', '☕', '🍺', '🍷',
    '⚽', '🏀', '🏈', '⚾', '🎾', '🏐', '🎱', '🏓',
    '🎸', '🎹', '🥁', '🎻', '🎧', '🎮', '🧩', '🎲',
    '🚗', '🚕', '🚌', '🚑', '🚒', '🚜', '✈', '🚀',
    '🛰', '⛵', '🚲', '🛴', '🏠', '🏢', '🏭', '🏰',
    '🌍', '🌙', '⭐', '⚡', '🔥', '💧', '🌈', '❄',
    '💎', '🔒', '🔑', '🧠', '💡', '📦', '🧲', '🧰',
    '🛡', '⚙', '🧪', '🧬', '🔭', '📡', '💾', '🗄',
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alphabet_len() {
        assert_eq!(DEFAULT_ALPHABET.len(), 152);
    }

    #[test]
    fn test_default_alphabet_unique() {
        let unique: std::collections::HashSet<_> = DEFAULT_ALPHABET.iter().collect();
        assert_eq!(unique.len(), DEFAULT_ALPHABET.len(), "duplicate entries");
    }

    #[test]
    fn test_default_alphabet_no_delimiter() {
        assert!(!DEFAULT_ALPHABET.contains(&'-'));
    }
}
