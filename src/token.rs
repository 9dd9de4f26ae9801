//! The delimiter and quote alphabet.
//!
//! This module defines the `TokenKind` classification shared by the
//! tokenizer and both scanners, together with the static pair tables
//! associating each opening delimiter with its closer. Static maps avoid
//! repeated linear membership checks and keep the four pair types and two
//! quote types closed enumerations.

use phf::phf_map;

/// Classification of a single input character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One of `(`, `[`, `{`, `<`.
    Open,
    /// One of `)`, `]`, `}`, `>`.
    Close,
    /// `"` or `'`; each quote is its own opener and closer.
    Quote,
    /// Any other character. Only legal inside a quoted span.
    Text,
}

/// Maps each opening delimiter to the closer it owes.
static CLOSER_OF: phf::Map<char, char> = phf_map! {
    '(' => ')',
    '[' => ']',
    '{' => '}',
    '<' => '>',
};

/// Maps each closing delimiter back to its opener.
static OPENER_OF: phf::Map<char, char> = phf_map! {
    ')' => '(',
    ']' => '[',
    '}' => '{',
    '>' => '<',
};

/// Return the closing delimiter owed by `open`, or `None` if `open` is not
/// an opening delimiter.
#[must_use]
pub fn closer_of(open: char) -> Option<char> {
    CLOSER_OF.get(&open).copied()
}

/// Return the opening delimiter matching `close`, or `None` if `close` is
/// not a closing delimiter.
#[must_use]
pub fn opener_of(close: char) -> Option<char> {
    OPENER_OF.get(&close).copied()
}

#[cfg(test)]
mod tests {
    use super::{closer_of, opener_of};

    #[test]
    fn pair_tables_are_inverses() {
        for open in ['(', '[', '{', '<'] {
            let close = closer_of(open);
            assert!(close.is_some());
            assert_eq!(close.and_then(opener_of), Some(open));
        }
    }

    #[test]
    fn non_delimiters_classify_as_none() {
        for c in ['a', '"', '\'', ' ', '\u{3042}'] {
            assert_eq!(closer_of(c), None);
            assert_eq!(opener_of(c), None);
        }
    }
}
