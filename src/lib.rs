//! Library crate for nestcheck.
//!
//! A lexical pre-check for strings built from nested delimiter pairs and
//! quoted literal spans. Two operations share one stack discipline:
//! [`validate`] decides whether an arbitrary string is a well-formed
//! composition of delimiters and quotes, and [`peak_depths`] reports the
//! nesting depth of each innermost delimiter cluster in a well-nested,
//! delimiter-only string.

#![forbid(unsafe_code)]

pub mod depth;
pub mod structure;
pub mod token;
pub mod tokenizer;

pub use depth::peak_depths;
pub use structure::validate;
pub use token::{TokenKind, closer_of, opener_of};
pub use tokenizer::{Span, tokenize};
