//! Expression evaluation implementation
//!
//! An expression is a flat whitespace-tokenized sequence of literals, cell
//! references, and the two operators. Evaluation is two passes:
//!
//! 1. Multiply pass, left to right. A multiply with a missing or non-numeric
//!    operand on either side is reported as `곱셈 오류 발생` and the whole
//!    expression evaluates to 0.
//! 2. Add pass: the wrapping sum of every remaining numeric entry. Add
//!    symbols are skipped — addition is the implicit connective joining all
//!    leftover operands, so `a b c` and `a 21대3 b 21대3 c` are equivalent.
//!
//! There are no parentheses and no other operators; arithmetic wraps on
//! overflow.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::Diagnostic;
use crate::parser::token::{scan, Token};

/// A term in the reduction sequence: an operator symbol or a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Term {
    Add,
    Mul,
    Value(i64),
}

impl Interpreter {
    /// Reduce a whitespace-tokenized expression to one integer.
    ///
    /// Unrecognised tokens are logged and contribute 0; an empty expression
    /// evaluates to 0.
    pub(crate) fn evaluate(&mut self, expression: &str) -> i64 {
        let mut terms: Vec<Term> = Vec::new();
        for token in expression.split_whitespace() {
            terms.push(match scan(token) {
                Token::Add => Term::Add,
                Token::Mul => Term::Mul,
                Token::Literal(value) => Term::Value(value),
                Token::Cell(address) => Term::Value(self.read_cell(address)),
                Token::Unknown => {
                    self.log.error(&Diagnostic::UnrecognizedToken {
                        token: token.to_string(),
                    });
                    Term::Value(0)
                }
            });
        }

        // Multiply binds tighter than add: reduce products in place first.
        let mut reduced: Vec<Term> = Vec::new();
        let mut i = 0;
        while i < terms.len() {
            if terms[i] == Term::Mul {
                let Some(Term::Value(prev)) = reduced.pop() else {
                    return self.multiply_error();
                };
                let Some(Term::Value(next)) = terms.get(i + 1).copied() else {
                    return self.multiply_error();
                };
                reduced.push(Term::Value(prev.wrapping_mul(next)));
                i += 2;
            } else {
                reduced.push(terms[i]);
                i += 1;
            }
        }

        reduced
            .iter()
            .filter_map(|term| match term {
                Term::Value(value) => Some(*value),
                _ => None,
            })
            .fold(0i64, |sum, value| sum.wrapping_add(value))
    }

    fn multiply_error(&mut self) -> i64 {
        self.log.error(&Diagnostic::MultiplyMissingOperand);
        0
    }
}
