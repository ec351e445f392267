// Execution engine for the HanulLang interpreter

use crate::interpreter::constants::{
    HEAD_DELIMITER, IF_DEPTH_LIMIT, STEP_LIMIT, TAIL_DELIMITER, TERMINATION_MESSAGE,
};
use crate::interpreter::errors::Diagnostic;
use crate::interpreter::log::{Log, LogObserver};
use crate::memory::Memory;
use crate::parser::statement::{
    classify, StatementKind, KW_ELSE, KW_IF, KW_INPUT, KW_JUMP, KW_MOVE, KW_NEWLINE, KW_PRINT,
    KW_PRINTCHAR, KW_THEN, MOVE_ARROW,
};
use crate::parser::token::cell_address;
use std::collections::VecDeque;

/// Control signal produced by executing one statement.
///
/// The driver loop and the recursive IF path consume this uniformly: a jump or
/// halt raised inside an IF branch propagates unchanged to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Fall through to the next line.
    Continue,
    /// END executed; stop the run.
    Halt,
    /// Resume at the given 1-based line number.
    Jump(i64),
}

/// Result of a complete run: the program's output text and its diagnostic log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub output: String,
    pub log: String,
}

/// Run a program to completion with no ambient state.
///
/// Convenience wrapper over [`Interpreter`] for callers that only want the
/// final output and log strings.
pub fn run(source: &str, input: &str) -> RunResult {
    let mut interpreter = Interpreter::new(input);
    interpreter.compile(source);
    RunResult {
        output: interpreter.output().to_string(),
        log: interpreter.log().to_string(),
    }
}

/// One isolated HanulLang execution: memory, input queue, output, and log.
///
/// All state is created fresh per instance and nothing persists between runs;
/// callers wanting a clean slate construct a new interpreter.
pub struct Interpreter {
    pub(crate) memory: Memory,
    inputs: VecDeque<String>,
    output: String,
    pub(crate) log: Log,
}

impl Interpreter {
    /// Create an interpreter with the given input text feeding INPUT
    /// statements (lines trimmed, blank lines dropped).
    pub fn new(input: &str) -> Self {
        Interpreter {
            memory: Memory::new(),
            inputs: Self::input_queue(input),
            output: String::new(),
            log: Log::new(),
        }
    }

    /// Like [`Interpreter::new`], with an observer invoked synchronously on
    /// every log append with the full cumulative log text.
    pub fn with_observer(input: &str, observer: LogObserver) -> Self {
        Interpreter {
            memory: Memory::new(),
            inputs: Self::input_queue(input),
            output: String::new(),
            log: Log::with_observer(observer),
        }
    }

    fn input_queue(input: &str) -> VecDeque<String> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Execute a program to completion or to a logged failure.
    ///
    /// The line list (blank lines included) is the jump-target address space,
    /// 1-based. The first and last lines must carry the program delimiters;
    /// otherwise nothing executes.
    pub fn compile(&mut self, source: &str) {
        let lines: Vec<&str> = source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let strip_whitespace =
            |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        let head = lines.first().map(|l| strip_whitespace(l)).unwrap_or_default();
        let tail = lines.last().map(|l| strip_whitespace(l)).unwrap_or_default();
        if !head.starts_with(HEAD_DELIMITER) || !tail.starts_with(TAIL_DELIMITER) {
            self.log.error(&Diagnostic::BadDelimiters);
            return;
        }

        let mut cursor: i64 = 0;
        let mut steps: u64 = 0;
        while cursor < lines.len() as i64 {
            // A jump below line 1 leaves the cursor negative; those positions
            // read as blank lines until the increment climbs back into range.
            let line = if cursor >= 0 { lines[cursor as usize] } else { "" };
            match self.execute_line(line, 0) {
                Signal::Halt => break,
                Signal::Jump(target) => cursor = target.saturating_sub(2),
                Signal::Continue => {}
            }
            cursor += 1;
            steps += 1;
            if steps > STEP_LIMIT {
                self.log.error(&Diagnostic::RunawayLoop { line_index: cursor });
                break;
            }
        }
    }

    /// The accumulated output text.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// The accumulated log text.
    pub fn log(&self) -> &str {
        self.log.text()
    }

    /// The memory store (read-back for embedders and tests).
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Strip the `#` comment and surrounding whitespace, classify, and execute
    /// one line. `depth` tracks IF nesting.
    fn execute_line(&mut self, raw: &str, depth: usize) -> Signal {
        let code = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        }
        .trim();
        if code.is_empty() {
            return Signal::Continue;
        }
        match classify(code) {
            Some(StatementKind::Def) => self.execute_def(code),
            Some(StatementKind::Input) => self.execute_input(code),
            Some(StatementKind::Print) => self.execute_print(code),
            Some(StatementKind::PrintChar) => self.execute_print_char(code),
            Some(StatementKind::Move) => self.execute_move(code),
            Some(StatementKind::If) => self.execute_if(code, depth),
            Some(StatementKind::Jump) => self.execute_jump(code),
            Some(StatementKind::End) => self.execute_end(),
            None => Signal::Continue,
        }
    }

    fn execute_def(&mut self, code: &str) -> Signal {
        let parts: Vec<&str> = code.split_whitespace().collect();
        if parts.len() < 2 {
            self.log.error(&Diagnostic::MalformedAssign);
            return Signal::Continue;
        }
        let address = self.resolve_address(parts[0]);
        let value = self.evaluate(&parts[1..].join(" "));
        self.write_cell(address, value);
        Signal::Continue
    }

    fn execute_input(&mut self, code: &str) -> Signal {
        let target = code.replacen(KW_INPUT, "", 1);
        let address = self.resolve_address(target.trim());
        let raw = self.inputs.pop_front().unwrap_or_else(|| "0".to_string());
        let value = Self::integer_prefix(&raw);
        self.write_cell(address, value);
        Signal::Continue
    }

    /// Parse the leading integer of an input line: an optional sign followed
    /// by decimal digits. Anything after the digits is ignored (`12abc`
    /// reads as 12); no digits means 0.
    fn integer_prefix(raw: &str) -> i64 {
        let (rest, sign) = match raw.strip_prefix('-') {
            Some(rest) => (rest, -1i64),
            None => (raw.strip_prefix('+').unwrap_or(raw), 1),
        };
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        rest[..digits]
            .parse::<i64>()
            .map(|value| sign * value)
            .unwrap_or(0)
    }

    fn execute_print(&mut self, code: &str) -> Signal {
        let (expression, newline) = Self::print_body(code, KW_PRINT);
        let value = self.evaluate(&expression);
        self.output.push_str(&value.to_string());
        if newline {
            self.output.push('\n');
        }
        Signal::Continue
    }

    fn execute_print_char(&mut self, code: &str) -> Signal {
        let (expression, newline) = Self::print_body(code, KW_PRINTCHAR);
        let value = self.evaluate(&expression);
        match u32::try_from(value).ok().and_then(char::from_u32) {
            Some(c) => {
                self.output.push(c);
                if newline {
                    self.output.push('\n');
                }
            }
            None => self.log.error(&Diagnostic::InvalidCharCode { value }),
        }
        Signal::Continue
    }

    /// Strip the statement keyword and an optional trailing newline marker
    /// from a PRINT/PRINTCHAR line, leaving the expression text.
    fn print_body(code: &str, keyword: &str) -> (String, bool) {
        let body = code.replacen(keyword, "", 1);
        let mut expression = body.trim();
        let mut newline = false;
        if let Some(stripped) = expression.strip_suffix(KW_NEWLINE) {
            newline = true;
            expression = stripped.trim();
        }
        (expression.to_string(), newline)
    }

    fn execute_move(&mut self, code: &str) -> Signal {
        let body = code.replacen(KW_MOVE, "", 1);
        let body = body.trim();
        let (src, dst) = if body.contains(MOVE_ARROW) {
            let mut pieces = body.split(MOVE_ARROW);
            let src = pieces.next().unwrap_or_default().trim();
            let dst = pieces.next().unwrap_or_default().trim();
            (src, dst)
        } else {
            let parts: Vec<&str> = body.split_whitespace().collect();
            if parts.len() != 2 {
                self.log.error(&Diagnostic::MalformedMove);
                return Signal::Continue;
            }
            (parts[0], parts[1])
        };
        let src_address = self.resolve_address(src);
        let dst_address = self.resolve_address(dst);
        let value = self.read_cell(src_address);
        self.write_cell(dst_address, value);
        Signal::Continue
    }

    /// `가을야구? <cond> 그러면 <then> [아니면 <else>]`
    ///
    /// The separators must be standalone tokens, the condition must have at
    /// least one token before the first `그러면`, and a trailing `아니면` with
    /// nothing after it is absorbed into the then-branch. The chosen branch is
    /// executed recursively as one statement and its signal propagates.
    fn execute_if(&mut self, code: &str, depth: usize) -> Signal {
        if depth >= IF_DEPTH_LIMIT {
            self.log.error(&Diagnostic::IfDepthExceeded);
            return Signal::Continue;
        }
        let Some(rest) = code.strip_prefix(KW_IF) else {
            self.log.error(&Diagnostic::MalformedIf);
            return Signal::Continue;
        };
        let tokens: Vec<&str> = rest.split_whitespace().collect();
        let then_pos = tokens
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, t)| **t == KW_THEN)
            .map(|(i, _)| i);
        let Some(then_pos) = then_pos else {
            self.log.error(&Diagnostic::MalformedIf);
            return Signal::Continue;
        };
        let condition = tokens[..then_pos].join(" ");
        let after = &tokens[then_pos + 1..];
        if after.is_empty() {
            self.log.error(&Diagnostic::MalformedIf);
            return Signal::Continue;
        }

        // The else split needs a non-empty branch on both sides; an 아니면
        // that would leave either side empty stays part of the then-branch.
        let else_pos = after
            .iter()
            .enumerate()
            .find(|(i, t)| **t == KW_ELSE && *i >= 1 && i + 1 < after.len())
            .map(|(i, _)| i);
        let (then_tokens, else_tokens) = match else_pos {
            Some(pos) => (&after[..pos], Some(&after[pos + 1..])),
            None => (after, None),
        };

        if self.evaluate(&condition) != 0 {
            self.execute_line(&then_tokens.join(" "), depth + 1)
        } else if let Some(else_tokens) = else_tokens {
            self.execute_line(&else_tokens.join(" "), depth + 1)
        } else {
            Signal::Continue
        }
    }

    fn execute_jump(&mut self, code: &str) -> Signal {
        let expression = code.replacen(KW_JUMP, "", 1);
        let target = self.evaluate(expression.trim());
        Signal::Jump(target)
    }

    fn execute_end(&mut self) -> Signal {
        self.log.end(TERMINATION_MESSAGE);
        Signal::Halt
    }

    /// Decode a strict write-target token; an invalid shape is logged and
    /// defaults to address 0.
    pub(crate) fn resolve_address(&mut self, token: &str) -> usize {
        match cell_address(token) {
            Some(address) => address,
            None => {
                self.log.error(&Diagnostic::UnrecognizedToken {
                    token: token.to_string(),
                });
                0
            }
        }
    }

    /// Read a cell, logging an out-of-range address and defaulting to 0.
    pub(crate) fn read_cell(&mut self, address: usize) -> i64 {
        match self.memory.read(address) {
            Ok(value) => value,
            Err(diagnostic) => {
                self.log.error(&diagnostic);
                0
            }
        }
    }

    /// Write a cell, logging and dropping an out-of-range write.
    pub(crate) fn write_cell(&mut self, address: usize, value: i64) {
        if let Err(diagnostic) = self.memory.write(address, value) {
            self.log.error(&diagnostic);
        }
    }
}
