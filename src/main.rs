use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use loxi::error::{ConsoleReporter, Reporter};
use loxi::Lox;

const HISTORY_FILE: &str = ".loxi_history";

fn history_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(HISTORY_FILE))
}

fn run_prompt() -> ExitCode {
    let mut lox = Lox::new();
    let mut editor = DefaultEditor::new().expect("terminal to support line editing");

    let history_path = history_path();
    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());

                let mut reporter = ConsoleReporter::new();
                lox.run_line(&line, &mut reporter);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("Readline error: {error}");
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        let _ = editor.save_history(path);
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        n if n > 2 => {
            println!("Usage: loxi [script]");
            ExitCode::from(loxi::EXIT_USAGE)
        }
        2 => {
            let mut lox = Lox::new();
            match lox.run_file(&args[1]) {
                Ok(code) => code,
                Err(error) => {
                    eprintln!("Could not read file '{}': {error}", args[1]);
                    ExitCode::from(loxi::EXIT_USAGE)
                }
            }
        }
        _ => run_prompt(),
    }
}
