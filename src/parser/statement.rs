//! Statement classification
//!
//! A source line is classified by scanning for fixed marker substrings in a
//! strict priority order; the first marker found wins. Only DEF is recognised
//! by token shape (the first token must be a strict `디…미` write target)
//! rather than by a contained marker.

/// Statement keyword markers, in classification priority order.
pub const KW_IF: &str = "가을야구?";
pub const KW_MOVE: &str = "디떨!";
pub const KW_PRINT: &str = "서류제출";
pub const KW_INPUT: &str = "키움아래";
pub const KW_PRINTCHAR: &str = "에겐";
pub const KW_END: &str = "탈선린";
pub const KW_JUMP: &str = "30실점";

/// Separators inside an IF statement body.
pub const KW_THEN: &str = "그러면";
pub const KW_ELSE: &str = "아니면";

/// Trailing marker on PRINT/PRINTCHAR requesting a newline.
pub const KW_NEWLINE: &str = "제발";

/// Source/destination separator inside a MOVE body.
pub const MOVE_ARROW: &str = "->";

/// The classified kind of a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    If,
    Move,
    Print,
    Input,
    Def,
    PrintChar,
    End,
    Jump,
}

/// Classify a trimmed, comment-stripped source line.
///
/// Returns `None` for blank or unrecognised lines, which execute as no-ops.
pub fn classify(line: &str) -> Option<StatementKind> {
    if line.is_empty() {
        return None;
    }
    if line.contains(KW_IF) {
        return Some(StatementKind::If);
    }
    if line.contains(KW_MOVE) {
        return Some(StatementKind::Move);
    }
    if line.contains(KW_PRINT) {
        return Some(StatementKind::Print);
    }
    if line.contains(KW_INPUT) {
        return Some(StatementKind::Input);
    }
    if let Some(head) = line.split_whitespace().next() {
        if head.starts_with('디') && head.ends_with('미') {
            return Some(StatementKind::Def);
        }
    }
    if line.contains(KW_PRINTCHAR) {
        return Some(StatementKind::PrintChar);
    }
    if line.contains(KW_END) {
        return Some(StatementKind::End);
    }
    if line.contains(KW_JUMP) {
        return Some(StatementKind::Jump);
    }
    None
}
