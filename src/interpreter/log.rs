//! Append-only diagnostic log
//!
//! Every entry is a tagged line (`[에러] …` or `[종료] …`). Appends are
//! observable: an optional injected callback receives the full accumulated
//! text after each append, one synchronous notification per logged event.
//! Callers wanting deltas must diff the snapshots themselves.

use crate::interpreter::errors::Diagnostic;
use std::fmt;

/// Callback invoked with the cumulative log text after every append.
pub type LogObserver = Box<dyn FnMut(&str)>;

/// The accumulated diagnostic log for one run.
#[derive(Default)]
pub struct Log {
    text: String,
    observer: Option<LogObserver>,
}

impl Log {
    pub fn new() -> Self {
        Log::default()
    }

    pub fn with_observer(observer: LogObserver) -> Self {
        Log {
            text: String::new(),
            observer: Some(observer),
        }
    }

    /// Append a diagnostic through the `[에러]` channel.
    pub fn error(&mut self, diagnostic: &Diagnostic) {
        self.append("[에러]", &diagnostic.to_string());
    }

    /// Append a termination notice through the `[종료]` channel.
    pub fn end(&mut self, message: &str) {
        self.append("[종료]", message);
    }

    /// The full accumulated log text.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn append(&mut self, tag: &str, message: &str) {
        self.text.push_str(tag);
        self.text.push(' ');
        self.text.push_str(message);
        self.text.push('\n');
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.text);
        }
    }
}

impl fmt::Debug for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Log")
            .field("text", &self.text)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_tagged_and_newline_terminated() {
        let mut log = Log::new();
        log.error(&Diagnostic::MultiplyMissingOperand);
        log.end("끝");
        assert_eq!(log.text(), "[에러] 곱셈 오류 발생\n[종료] 끝\n");
    }

    #[test]
    fn observer_sees_cumulative_text_per_append() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut log = Log::with_observer(Box::new(move |text| {
            sink.borrow_mut().push(text.to_string());
        }));

        log.error(&Diagnostic::MalformedMove);
        log.error(&Diagnostic::MalformedIf);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], "[에러] MOVE도 에겐같이 하네;;\n");
        assert_eq!(
            seen[1],
            "[에러] MOVE도 에겐같이 하네;;\n[에러] IF 문법도 에겐같이 하네;;\n"
        );
    }
}
