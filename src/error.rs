use crate::token::{Token, TokenKind};

/// A runtime failure raised while evaluating an already-resolved program.
///
/// This is the `Err` arm of every evaluator `Result`; it is never confused
/// with a `Signal::Return`/`Signal::Break`, which travel in the `Ok` arm.
#[derive(Debug, Clone)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl RuntimeError {
    pub fn new(token: &Token, message: impl Into<String>) -> Self {
        RuntimeError { token: token.clone(), message: message.into() }
    }
}

fn token_suffix(token: &Token) -> String {
    if token.kind == TokenKind::Eof {
        "at end".to_string()
    } else {
        format!("at '{}'", token.lexeme)
    }
}

/// The single seam between the interpreter core and any I/O surface.
///
/// Every stage (scanner, parser, resolver, evaluator) is handed a
/// `&mut dyn Reporter` rather than writing to stdout/stderr or a global
/// directly, so tests can substitute [`RecordingReporter`] for a real
/// console implementation.
pub trait Reporter {
    /// A lexical/parse/resolve error tied only to a line (no specific token).
    fn error(&mut self, line: usize, message: &str);

    /// A lexical/parse/resolve error tied to a specific token.
    fn error_token(&mut self, token: &Token, message: &str);

    /// A non-fatal diagnostic; never sets the had-error flag.
    fn warning_token(&mut self, token: &Token, message: &str);

    /// A runtime failure; sets the had-runtime-error flag.
    fn runtime_error(&mut self, error: &RuntimeError);

    /// A `print` statement's output.
    fn print(&mut self, text: &str);

    fn had_error(&self) -> bool;
    fn had_runtime_error(&self) -> bool;

    /// Clears both flags. Used by the REPL between lines so one mistake
    /// does not poison the rest of the session.
    fn reset(&mut self);
}

/// Reports to stderr/stdout, for the CLI driver.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    had_error: bool,
    had_runtime_error: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        ConsoleReporter::default()
    }
}

impl Reporter for ConsoleReporter {
    fn error(&mut self, line: usize, message: &str) {
        eprintln!("[line {}] Error: {}", line + 1, message);
        self.had_error = true;
    }

    fn error_token(&mut self, token: &Token, message: &str) {
        eprintln!("[{}] Error {}: {}", token.location, token_suffix(token), message);
        self.had_error = true;
    }

    fn warning_token(&mut self, token: &Token, message: &str) {
        eprintln!("[{}] Warning {}: {}", token.location, token_suffix(token), message);
    }

    fn runtime_error(&mut self, error: &RuntimeError) {
        eprintln!("[{}] Error {}: {}", error.token.location, token_suffix(&error.token), error.message);
        self.had_runtime_error = true;
    }

    fn print(&mut self, text: &str) {
        println!("{text}");
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }
}

/// Captures every event instead of writing it, for integration tests.
///
/// Mirrors the teacher's `tests/common/mod.rs` macro, which injects an
/// output sink in place of stdout; here the sink is the `Reporter` seam
/// itself, so both `print` output and diagnostics are inspectable.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub prints: Vec<String>,
    pub diagnostics: Vec<String>,
    had_error: bool,
    had_runtime_error: bool,
}

impl RecordingReporter {
    pub fn new() -> Self {
        RecordingReporter::default()
    }
}

impl Reporter for RecordingReporter {
    fn error(&mut self, line: usize, message: &str) {
        self.diagnostics.push(format!("[line {}] Error: {}", line + 1, message));
        self.had_error = true;
    }

    fn error_token(&mut self, token: &Token, message: &str) {
        self.diagnostics.push(format!("[{}] Error {}: {}", token.location, token_suffix(token), message));
        self.had_error = true;
    }

    fn warning_token(&mut self, token: &Token, message: &str) {
        self.diagnostics.push(format!("[{}] Warning {}: {}", token.location, token_suffix(token), message));
    }

    fn runtime_error(&mut self, error: &RuntimeError) {
        self.diagnostics.push(format!("[{}] Error {}: {}", error.token.location, token_suffix(&error.token), error.message));
        self.had_runtime_error = true;
    }

    fn print(&mut self, text: &str) {
        self.prints.push(text.to_string());
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }
}
