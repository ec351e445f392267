//! # HanulLang
//!
//! An interpreter for HanulLang (한울랭), a small esoteric scripting language
//! whose entire lexical surface is fixed multi-character Korean markers.
//! Programs execute line by line against a flat memory of 65536 signed
//! integer cells, producing an output string and a diagnostic log string.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source lines → classify → execute → Signal (continue / jump / halt)
//!                             ↓
//!                expressions → tokens → memory cells
//! ```
//!
//! 1. [`parser`] — pure marker recognition: expression token scanning and
//!    statement classification.
//! 2. [`interpreter`] — the engine: driver loop, statement handlers, the
//!    two-pass expression evaluator, and the tagged diagnostic log.
//! 3. [`memory`] — the sparse 65536-cell store.
//!
//! ## Language summary
//!
//! Statements: cell assignment (DEF), cell copy (`디떨!`), numeric and
//! character output (`서류제출` / `에겐`), input (`키움아래`), conditional
//! (`가을야구?`), line jump (`30실점`), and termination (`탈선린`). A program
//! must open with a `대체누가` line and close with a `디미고를서류로떨어짐?`
//! line. `#` starts a comment.
//!
//! ## Entry points
//!
//! [`interpreter::engine::run`] executes a program with no ambient state and
//! returns `{output, log}`; [`interpreter::engine::Interpreter`] offers the
//! same with an injected log observer and state read-back.

pub mod interpreter;
pub mod memory;
pub mod parser;
