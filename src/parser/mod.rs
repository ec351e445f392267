//! HanulLang source recognition
//!
//! The language has no grammar beyond whitespace-separated marker tokens, so
//! there is no AST: "parsing" is two pure lookups used directly by the
//! interpreter:
//! - [`token`]: expression token scanning (literals, cell references,
//!   operators)
//! - [`statement`]: statement classification by ordered marker checks
//!
//! Everything stateful — memory resolution, diagnostics, control flow — lives
//! in [`crate::interpreter`].

pub mod statement;
pub mod token;
