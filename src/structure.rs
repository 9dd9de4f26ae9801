//! Structural validation of delimiter and quote composition.
//!
//! The validator runs a single pass over the token stream with one shared
//! stack of expectations. Delimiters and quotes share the stack because
//! entering a quoted span must suspend delimiter interpretation until the
//! identical quote recurs, and closing any span must resume exactly the
//! prior context; one LIFO enforces last-opened-first-closed uniformly
//! across both token kinds.

use thiserror::Error;

use crate::token::closer_of;
use crate::{TokenKind, tokenize};

/// A stack entry recording what will close the current context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Expectation {
    /// This closing delimiter is owed.
    Closer(char),
    /// This quote character will end the current literal span.
    Quote(char),
}

/// Why an input was rejected.
///
/// Surfaces in debug logs and unit tests only; the public result of
/// [`validate`] is a plain boolean.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum Violation {
    /// A closing delimiter arrived while no delimiter span was open.
    #[error("closing delimiter {found:?} with no span open")]
    UnmatchedCloser { found: char },
    /// A closing delimiter did not match the innermost open delimiter.
    #[error("expected {expected:?} before {found:?}")]
    MismatchedCloser { expected: char, found: char },
    /// A character outside the delimiter and quote alphabet appeared
    /// outside any quoted span.
    #[error("character {found:?} outside any quoted span")]
    ForeignCharacter { found: char },
    /// The input ended with delimiter or quote spans still open.
    #[error("input ended with {pending} unclosed spans")]
    Unclosed { pending: usize },
}

/// Scan `input` and report the first violation, if any.
pub(crate) fn check(input: &str) -> Result<(), Violation> {
    let mut stack: Vec<Expectation> = Vec::new();
    for (kind, span) in tokenize(input) {
        let Some(c) = input.get(span.clone()).and_then(|text| text.chars().next()) else {
            log::warn!("tokenizer produced an invalid span {span:?}");
            continue;
        };
        if let Some(Expectation::Quote(quote)) = stack.last().copied() {
            // Inside a literal span only the identical quote is
            // significant; the other quote kind and any delimiter are
            // inert content.
            if c == quote {
                stack.pop();
            }
            continue;
        }
        match kind {
            TokenKind::Open => {
                if let Some(close) = closer_of(c) {
                    stack.push(Expectation::Closer(close));
                } else {
                    log::warn!("opening delimiter {c:?} missing from the pair table");
                    return Err(Violation::ForeignCharacter { found: c });
                }
            }
            TokenKind::Close => match stack.last().copied() {
                Some(Expectation::Closer(expected)) if expected == c => {
                    stack.pop();
                }
                Some(Expectation::Closer(expected)) => {
                    return Err(Violation::MismatchedCloser { expected, found: c });
                }
                _ => return Err(Violation::UnmatchedCloser { found: c }),
            },
            TokenKind::Quote => stack.push(Expectation::Quote(c)),
            TokenKind::Text => return Err(Violation::ForeignCharacter { found: c }),
        }
    }
    if stack.is_empty() {
        Ok(())
    } else {
        Err(Violation::Unclosed {
            pending: stack.len(),
        })
    }
}

/// Decide whether `input` is a well-formed composition of the four
/// delimiter pair types and two quote kinds.
///
/// Quoted spans opaquely swallow any content, including unmatched
/// delimiters and the other quote kind, until closed by the matching
/// quote. Malformed input is the defined `false` result, short-circuited
/// at the first violating character; this function never panics.
///
/// # Examples
///
/// ```rust
/// use nestcheck::validate;
///
/// assert!(validate("(<>)"));
/// assert!(validate("(\"\")"));
/// assert!(!validate("(<)>"));
/// ```
#[must_use]
pub fn validate(input: &str) -> bool {
    match check(input) {
        Ok(()) => true,
        Err(violation) => {
            log::debug!("rejected: {violation}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Violation, check};

    #[rstest]
    #[case(")", Violation::UnmatchedCloser { found: ')' })]
    #[case("(<)>", Violation::MismatchedCloser { expected: '>', found: ')' })]
    #[case("a", Violation::ForeignCharacter { found: 'a' })]
    #[case("'", Violation::Unclosed { pending: 1 })]
    #[case("([\"", Violation::Unclosed { pending: 3 })]
    fn check_reports_first_violation(#[case] input: &str, #[case] expected: Violation) {
        assert_eq!(check(input), Err(expected));
    }

    #[rstest]
    #[case("")]
    #[case("{[()]}")]
    #[case("'\"'\"'\"")]
    fn check_accepts_balanced_input(#[case] input: &str) {
        assert_eq!(check(input), Ok(()));
    }
}
