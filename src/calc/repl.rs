use crate::calc::calculator::LineOutcome;
use crate::calc::commands::{is_help, CommandExecutor};
use crate::common::ErrorPolicy;
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `exit` was entered
    Exit,
    EndOfInput,
    /// A line failed under [`ErrorPolicy::Abort`]
    Aborted,
}

pub fn run_repl(executor: &CommandExecutor) -> Result<SessionEnd> {
    executor.show_banner();

    let config = executor.config();
    let mut rl: DefaultEditor = DefaultEditor::new()?;

    let history_file = config.history_path();
    if let Some(ref path) = history_file {
        if rl.load_history(path).is_err() {
            log::debug!("No history loaded from {:?}", path);
        }
    }

    let end = loop {
        let readline = rl.readline(&config.repl.prompt);

        match readline {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }

                if is_help(&line) {
                    executor.show_help();
                    continue;
                }

                match executor.eval(&line) {
                    Ok(LineOutcome::Exit) => break SessionEnd::Exit,
                    Ok(LineOutcome::Value(_)) => {}
                    Err(_) if config.repl.on_error == ErrorPolicy::Abort => {
                        break SessionEnd::Aborted;
                    }
                    Err(_) => {}
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break SessionEnd::EndOfInput,
            Err(err) => {
                eprintln!("Error reading input: {}", err);
                break SessionEnd::EndOfInput;
            }
        }
    };

    if let Some(ref path) = history_file {
        if let Err(e) = rl.save_history(path) {
            log::warn!("Failed to save history to {:?}: {}", path, e);
        }
    }

    log::debug!("Session ended: {:?}", end);
    Ok(end)
}
