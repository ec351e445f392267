//! Diagnostics for HanulLang execution
//!
//! This module defines [`Diagnostic`], which represents everything the
//! interpreter can report about a running program. The `Display` texts are the
//! language's user-facing wire format; programs are observed through these
//! exact strings, so the Korean message texts must not be altered.
//!
//! Severity is decided by the driver, not the type: [`Diagnostic::BadDelimiters`]
//! aborts before any statement runs and [`Diagnostic::RunawayLoop`] aborts
//! mid-run; every other variant is logged and execution continues with a
//! defaulted value or a dropped write.

use std::fmt;

/// Everything the interpreter can diagnose about a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A token matched no marker shape (literal, cell, or operator).
    UnrecognizedToken { token: String },

    /// A multiply had no numeric operand on one side.
    MultiplyMissingOperand,

    /// A DEF line had no expression after the destination token.
    MalformedAssign,

    /// A MOVE body was neither `src -> dst` nor exactly two tokens.
    MalformedMove,

    /// An IF line did not match `가을야구? <cond> 그러면 <then> [아니면 <else>]`.
    MalformedIf,

    /// IF nesting exceeded [`crate::interpreter::constants::IF_DEPTH_LIMIT`].
    IfDepthExceeded,

    /// A decoded address fell outside the fixed cell space.
    AddressOutOfRange { address: usize },

    /// A PRINTCHAR value was not a valid Unicode scalar.
    InvalidCharCode { value: i64 },

    /// The program was missing its required first/last delimiter lines.
    BadDelimiters,

    /// The step guard tripped; `line_index` is the cursor after its final
    /// increment (0-based).
    RunawayLoop { line_index: i64 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnrecognizedToken { token } => {
                write!(f, "{}도 에겐같이 하네;;", token)
            }
            Diagnostic::MultiplyMissingOperand => write!(f, "곱셈 오류 발생"),
            Diagnostic::MalformedAssign => write!(f, "대입도 에겐같이 하네;;"),
            Diagnostic::MalformedMove => write!(f, "MOVE도 에겐같이 하네;;"),
            Diagnostic::MalformedIf => write!(f, "IF 문법도 에겐같이 하네;;"),
            Diagnostic::IfDepthExceeded => write!(f, "IF 중첩 한도 초과"),
            Diagnostic::AddressOutOfRange { address } => {
                write!(f, "메모리 주소 범위 초과: {}", address)
            }
            Diagnostic::InvalidCharCode { value } => {
                write!(f, "잘못된 문자 코드: {}", value)
            }
            Diagnostic::BadDelimiters => write!(f, "이게 어떻게 에겐이냐 ㅋㅋ"),
            Diagnostic::RunawayLoop { line_index } => {
                write!(f, "{}번째 줄에서 무한 루프가 감지되었습니다.", line_index)
            }
        }
    }
}

impl std::error::Error for Diagnostic {}
