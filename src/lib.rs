#![allow(clippy::needless_return)]

//! `loxi` is a tree-walking interpreter for a small dynamically typed
//! scripting language in the Lox family. It is lexically scoped, has
//! first-class functions and closures, and supports single-inheritance
//! classes.
//!
//! `loxi` is dynamically typed: the type of a variable is determined at
//! runtime rather than compile time. It is a tree-walk interpreter: it
//! evaluates the abstract syntax tree directly rather than compiling it
//! to bytecode first. This project is inspired by the
//! [Crafting Interpreters](https://craftinginterpreters.com/) book by
//! Bob Nystrom.
//!
//! ## Scanning
//! The first step is scanning: turning a string of source characters
//! into a list of tokens. The scanner is implemented in the
//! [`scanner`](scanner) module over a peekable character iterator. It
//! never panics on malformed input; it reports through a
//! [`Reporter`](error::Reporter) and keeps going, so a single pass over
//! a file can surface every lexical error at once.
//!
//! ## Parsing
//! The second step is parsing: turning the token list into an abstract
//! syntax tree. The parser is implemented in the [`parser`](parser)
//! module as a recursive-descent parser. [`Expressions`](expr::Expr)
//! produce a [`Value`](value::Value); [`Statements`](stmt::Stmt) are
//! executed for their side effects. The parser also recovers from a
//! syntax error by synchronizing to the next statement boundary, so one
//! mistake does not hide the rest.
//!
//! ## Resolving
//! The third step is resolving: a static pass over the AST that
//! computes, for every variable reference, how many environment frames
//! separate it from the scope that declares it. The resolver is
//! implemented in the [`resolver`](resolver) module. It also catches
//! semantically-invalid-but-syntactically-valid programs, such as a
//! `return` outside any function or a `this` outside any class.
//!
//! ## Interpreting
//! The final step is interpreting: walking the resolved AST and
//! evaluating it. The interpreter is implemented in the
//! [`interpreter`](interpreter) module. It manages the environment, a
//! chain of scope frames implemented in [`environment`](environment),
//! and reports failures as a [`RuntimeError`](error::RuntimeError).

use std::fs;
use std::io;
use std::process::ExitCode;

pub mod ast;
pub mod class;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;
pub mod value;

use error::{ConsoleReporter, Reporter};
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// Exit code for a usage error (the CLI was invoked wrong).
pub const EXIT_USAGE: u8 = 64;
/// Exit code for a scan/parse/resolve error.
pub const EXIT_DATAERR: u8 = 65;
/// Exit code for a runtime error.
pub const EXIT_SOFTWARE: u8 = 70;

/// Owns the interpreter's persistent state (global environment, variable
/// resolution cache) across one or more [`run`](Lox::run) calls, so a
/// REPL session accumulates definitions the way a single script would.
pub struct Lox {
    interpreter: Interpreter,
}

impl Lox {
    pub fn new() -> Self {
        Lox { interpreter: Interpreter::new() }
    }

    pub fn run_file(&mut self, path: &str) -> io::Result<ExitCode> {
        let contents = fs::read_to_string(path)?;

        let mut reporter = ConsoleReporter::new();
        self.run(&contents, &mut reporter);

        if reporter.had_error() {
            return Ok(ExitCode::from(EXIT_DATAERR));
        }
        if reporter.had_runtime_error() {
            return Ok(ExitCode::from(EXIT_SOFTWARE));
        }

        Ok(ExitCode::SUCCESS)
    }

    /// Runs one REPL line against the persistent interpreter state.
    /// Returns whether the line ran without a runtime error, so the REPL
    /// can decide what to echo; a scan/parse/resolve error never
    /// poisons later lines.
    pub fn run_line(&mut self, source: &str, reporter: &mut dyn Reporter) {
        self.run(source, reporter);
    }

    fn run(&mut self, source: &str, reporter: &mut dyn Reporter) {
        let tokens = Scanner::new(source, reporter).scan_tokens();
        if reporter.had_error() {
            return;
        }

        let statements = Parser::new(tokens, reporter).parse();
        if reporter.had_error() {
            return;
        }

        Resolver::new(&mut self.interpreter).resolve(&statements, reporter);
        if reporter.had_error() {
            return;
        }

        self.interpreter.interpret(&statements, reporter);
    }
}

impl Default for Lox {
    fn default() -> Self {
        Self::new()
    }
}
