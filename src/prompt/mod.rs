mod commands;

use std::io::{self, Write};

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::report::Report;
use commands::PromptCommand;

const HISTORY_FILE: &str = ".factorial_history";

/// Interactive line-based front end: reads a value or a command per line
/// and prints the result.
pub struct Prompt {
    /// Line editor reading the input, with history
    editor: DefaultEditor,

    /// What to print for a plain value
    report: Report,
}

impl Prompt {
    /// Create a new prompt, loading the history if there is one
    pub fn new(report: Report) -> Result<Self, ReadlineError> {
        let mut editor = DefaultEditor::new()?;
        let _ = editor.load_history(HISTORY_FILE);

        Ok(Prompt { editor, report })
    }

    /// Run until the user quits, presses Ctrl-C or closes the input
    pub fn run(&mut self) {
        println!("Type a number, or `help` for the list of commands.");

        while let Some(line) = self.read_line() {
            if line.is_empty() {
                continue;
            }

            match PromptCommand::parse(&line) {
                Ok(PromptCommand::Quit) => break,
                Ok(command) => {
                    let mut stdout = io::stdout().lock();

                    if let Err(e) = execute(self.report, command, &mut stdout) {
                        eprintln!("[Prompt] Could not write output: {e}");
                        break;
                    }
                }
                Err(e) => {
                    // Unknown command, wrong arguments or `help`
                    let _ = e.print();
                }
            }
        }

        if let Err(e) = self.editor.save_history(HISTORY_FILE) {
            eprintln!("[Prompt] Could not save history: {e}");
        }
    }

    /// Read a line from the user. Returns None when the input is over.
    fn read_line(&mut self) -> Option<String> {
        match self.editor.readline("n> ") {
            Ok(line) => {
                let line = line.trim().to_string();

                if !line.is_empty() {
                    let _ = self.editor.add_history_entry(&line);
                }

                Some(line)
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(e) => {
                eprintln!("[Prompt] Error reading line: {e}");
                None
            }
        }
    }
}

/// Executes one command, writing its lines to `out` as they are
/// produced. Calculator errors are written as a line instead of ending the
/// prompt.
fn execute(
    base: Report,
    command: PromptCommand,
    out: &mut impl Write,
) -> io::Result<()> {
    let (n, report) = match command {
        PromptCommand::Fact { n } => (n, base),
        PromptCommand::Trace { n } => (
            n,
            Report {
                trace: true,
                ..base
            },
        ),
        PromptCommand::Summary { n } => (
            n,
            Report {
                summary: true,
                ..base
            },
        ),
        PromptCommand::Quit => return Ok(()),
    };

    match report.lines(n) {
        Ok(lines) => {
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
        Err(e) => writeln!(out, "Error: {e}")?,
    }

    out.flush()
}
