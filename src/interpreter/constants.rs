// Constants for the HanulLang interpreter

/// Number of addressable memory cells.
pub const MEMORY_CELLS: usize = 1 << 16;

/// Maximum number of executed statements before the run is declared runaway.
pub const STEP_LIMIT: u64 = 100_000;

/// Maximum IF nesting depth inside a single line.
///
/// Nesting is bounded by line length, but an adversarial multi-megabyte line
/// could otherwise exhaust the thread stack through recursion.
pub const IF_DEPTH_LIMIT: usize = 64;

/// Message logged through the `[종료]` channel when END executes.
pub const TERMINATION_MESSAGE: &str = "탈선린해도 디미는 못간다 한울한울아";

/// Required prefix of the first source line, whitespace removed.
pub const HEAD_DELIMITER: &str = "대체누가";

/// Required prefix of the last source line, whitespace removed.
pub const TAIL_DELIMITER: &str = "디미고를서류로떨어짐?";
