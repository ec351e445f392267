//! Token scanning for HanulLang expressions
//!
//! HanulLang has no conventional symbols; every token is recognised by a fixed
//! multi-character marker shape:
//!
//! - `호…엥` — positive literal, value = count of `에` + 2 − count of `.`
//! - `하와…` — negative literal, value = −count of `와` + count of `.`
//! - `디…미` — memory cell reference, address = count of `이`
//! - `21대3` / `훌쩍` — the add and multiply operators
//!
//! Scanning is pure: a cell reference is returned as its address and resolved
//! against the memory store by the evaluator, and unrecognised tokens are
//! reported as [`Token::Unknown`] for the caller to diagnose.

/// The add operator marker.
pub const OP_ADD: &str = "21대3";
/// The multiply operator marker.
pub const OP_MUL: &str = "훌쩍";

/// A scanned expression token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Add,
    Mul,
    /// A decoded positive or negative literal.
    Literal(i64),
    /// A memory cell read, by address.
    Cell(usize),
    /// No marker shape matched.
    Unknown,
}

fn count(token: &str, marker: char) -> usize {
    token.chars().filter(|&c| c == marker).count()
}

/// Scan a single whitespace-delimited token.
///
/// The marker checks run in a fixed order; the operator markers are exact
/// matches and take priority over the literal shapes.
pub fn scan(token: &str) -> Token {
    match token {
        OP_ADD => Token::Add,
        OP_MUL => Token::Mul,
        _ if token.starts_with('호') && token.contains('엥') => {
            Token::Literal(count(token, '에') as i64 + 2 - count(token, '.') as i64)
        }
        _ if token.starts_with("하와") => {
            Token::Literal(-(count(token, '와') as i64) + count(token, '.') as i64)
        }
        _ if token.starts_with('디') && token.contains('미') => Token::Cell(count(token, '이')),
        _ => Token::Unknown,
    }
}

/// Decode a write-target address token.
///
/// Stricter than [`scan`]: the token must start with `디` *and end with* `미`.
/// Returns `None` on a shape mismatch so the caller can log and default the
/// address to 0.
pub fn cell_address(token: &str) -> Option<usize> {
    if token.starts_with('디') && token.ends_with('미') {
        Some(count(token, '이'))
    } else {
        None
    }
}
