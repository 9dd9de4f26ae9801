//! Lexical analysis for pre-check input.
//!
//! This module exposes a `tokenize` function which converts raw input text
//! into a sequence of `(TokenKind, Span)` pairs, one per character. It uses
//! the `logos` crate to recognise tokens so that the scanners can work over
//! a uniform classified stream instead of raw characters.

use logos::Logos;

use crate::TokenKind;

/// Byte range for a token within the input.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r"[(\[{<]")]
    Open,
    #[regex(r"[)\]}>]")]
    Close,
    #[regex(r#"["']"#)]
    Quote,
    #[regex(r#"[^()\[\]{}<>"']"#)]
    Text,
}

/// Tokenise the input into single-character tokens.
///
/// Every Unicode scalar value classifies as exactly one of the four kinds,
/// so the returned spans tile the input with no gaps. Multi-byte scalar
/// values yield a single `Text` token covering all of their bytes.
///
/// # Examples
///
/// ```rust
/// use nestcheck::{TokenKind, tokenize};
///
/// let tokens = tokenize("(\"a\")");
/// let kinds: Vec<TokenKind> = tokens.iter().map(|(k, _)| *k).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Open,
///         TokenKind::Quote,
///         TokenKind::Text,
///         TokenKind::Quote,
///         TokenKind::Close,
///     ],
/// );
/// ```
#[must_use]
pub fn tokenize(src: &str) -> Vec<(TokenKind, Span)> {
    let mut lexer = Token::lexer(src);
    let mut out = Vec::with_capacity(src.len());
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        // The Text class is the complement of the other three, so the lexer
        // cannot fail; treat a failure as literal text rather than panic.
        let Ok(token) = result else {
            out.push((TokenKind::Text, span));
            continue;
        };
        let kind = match token {
            Token::Open => TokenKind::Open,
            Token::Close => TokenKind::Close,
            Token::Quote => TokenKind::Quote,
            Token::Text => TokenKind::Text,
        };
        out.push((kind, span));
    }
    out
}
