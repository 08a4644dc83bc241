use crate::calc::calculator::{Calculator, LineOutcome};
use crate::calc::output::{format_error, format_result};
use crate::common::error::CalcError;
use crate::common::{Config, OutputFormat};
use anyhow::{Context, Result};
use colored::*;
use std::fmt::Write;
use std::path::Path;

pub struct CommandExecutor {
    config: Config,
    calculator: Calculator,
}

impl CommandExecutor {
    pub fn new(config: Config) -> Self {
        CommandExecutor {
            config,
            calculator: Calculator::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluate one line and print its result or error.
    pub fn eval(&self, line: &str) -> std::result::Result<LineOutcome, CalcError> {
        let outcome = self.calculator.process_line(line);

        match &outcome {
            Ok(LineOutcome::Value(value)) => {
                println!("{}", format_result(value, self.config.output.format));
            }
            Ok(LineOutcome::Exit) => {}
            Err(e) => {
                log::debug!("{:?} failed: {}", line, e.kind());
                self.print_error(e);
            }
        }

        outcome
    }

    fn print_error(&self, err: &CalcError) {
        match self.config.output.format {
            OutputFormat::Text => {
                eprintln!("{} {}", "Error:".red().bold(), format_error(err, OutputFormat::Text));
            }
            OutputFormat::Json => println!("{}", format_error(err, OutputFormat::Json)),
        }
    }

    pub fn show_config(&self) -> Result<()> {
        print!("{}", self.config.to_toml()?);
        Ok(())
    }

    pub fn init_config(&self, path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            anyhow::bail!("Config file {:?} already exists (use --force to overwrite)", path);
        }

        Config::default()
            .save(path)
            .with_context(|| format!("Failed to initialise config at {:?}", path))?;

        println!("{}", "✅ Default config written".green());
        println!("   Path: {}", path.display().to_string().bright_cyan());
        Ok(())
    }

    /// Banner and help text. In JSON mode stdout carries only result objects.
    fn print_info(&self, text: &str) {
        match self.config.output.format {
            OutputFormat::Text => print!("{}", text),
            OutputFormat::Json => eprint!("{}", text),
        }
    }

    pub fn show_banner(&self) {
        self.print_info(&banner_text());
    }

    pub fn show_help(&self) {
        self.print_info(&help_text());
    }
}

fn banner_text() -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", "Simple Calculator".bright_green().bold());
    let _ = writeln!(text, "Enter expressions in the format: operand1 operator operand2");
    let _ = writeln!(text, "Example: 3 + 4 or IV * II");
    let _ = writeln!(text, "Type 'help' for details, 'exit' to quit\n");
    text
}

fn help_text() -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", "Usage:".bold().underline());
    let _ = writeln!(text);
    let _ = writeln!(text, "  {}  Evaluate an expression", "<a> <op> <b>".cyan());
    let _ = writeln!(text, "  {}          Show this help message", "help".cyan());
    let _ = writeln!(text, "  {}          Exit the calculator", "exit".cyan());
    let _ = writeln!(text);
    let _ = writeln!(text, "  Operands are Arabic (1-10) or Roman (I-X), never mixed.");
    let _ = writeln!(text, "  Operators: + - * /  (division truncates)");
    let _ = writeln!(text, "  Roman results must lie between I and C.");
    text
}

pub fn is_help(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("help")
}
