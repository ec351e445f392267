//! HanulLang execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the interpreter — driver loop, statement execution, control
//!   signals
//! - [`eval`]: two-pass expression evaluation
//! - [`errors`]: the [`errors::Diagnostic`] type with the language's exact
//!   message texts
//! - [`log`]: the append-only tagged log with an optional observer
//! - [`constants`]: memory size, step limit, delimiters
//!
//! # Execution Model
//!
//! The program's line list is the jump address space: the driver walks a
//! cursor through it, classifies each line by marker, executes it, and applies
//! the returned [`engine::Signal`] (continue, jump, or halt). A fixed step
//! ceiling converts non-terminating programs into a logged stop.
//!
//! # Failure Model
//!
//! Only malformed program delimiters (checked before execution) and the step
//! guard are fatal. Every other problem — unknown tokens, malformed statement
//! bodies, out-of-range addresses — is logged through the `[에러]` channel and
//! execution continues with a defaulted value or a dropped write.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod eval;
pub mod log;
