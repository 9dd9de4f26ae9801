//! Nesting-depth analysis for well-nested delimiter runs.
//!
//! Tracks a running depth counter over the token stream and records the
//! depth reached at the end of every maximal run of openers that is
//! immediately followed by a closer. For well-nested input this is
//! equivalent to an explicit stack whose size equals the depth at every
//! point.

use crate::{TokenKind, tokenize};

/// Compute the nesting depth of each innermost delimiter cluster, in
/// left-to-right order.
///
/// The caller guarantees that `input` consists solely of the eight
/// delimiter characters and forms a well-nested structure. The result for
/// any other input is unspecified; no error is reported. Empty input
/// yields `[0]`.
///
/// # Examples
///
/// ```rust
/// use nestcheck::peak_depths;
///
/// assert_eq!(peak_depths(""), vec![0]);
/// assert_eq!(peak_depths("[](()){}"), vec![1, 2, 1]);
/// ```
#[must_use]
pub fn peak_depths(input: &str) -> Vec<usize> {
    let mut depth = 0usize;
    let mut climbing = false;
    let mut peaks = Vec::new();
    for (kind, span) in tokenize(input) {
        match kind {
            TokenKind::Open => {
                depth += 1;
                climbing = true;
            }
            TokenKind::Close => {
                if climbing {
                    peaks.push(depth);
                    climbing = false;
                }
                if depth == 0 {
                    log::warn!("closing delimiter at depth zero (byte {})", span.start);
                }
                depth = depth.saturating_sub(1);
            }
            TokenKind::Quote | TokenKind::Text => {
                log::warn!("non-delimiter character at byte {}", span.start);
            }
        }
    }
    if peaks.is_empty() {
        peaks.push(0);
    }
    peaks
}
