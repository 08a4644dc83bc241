use crate::calc::commands::CommandExecutor;
use crate::calc::repl::{run_repl, SessionEnd};
use crate::common::config::CONFIG_FILE_NAME;
use crate::common::{Config, ErrorPolicy, OutputFormat};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "roman-calc")]
#[command(about = "Calculator for Arabic (1-10) and Roman (I-X) numerals", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Stop at the first line that fails to evaluate
    #[arg(long, global = true)]
    pub fail_fast: bool,

    /// Output format (default: from config)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Do not read or write line history
    #[arg(long, global = true)]
    pub no_history: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a single expression, e.g. `eval IV + II`
    Eval {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        expression: Vec<String>,
    },

    /// Configuration file operations
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Destination (default: ~/.config/roman-calc/config.toml)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Config file values with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::load_default()?,
        };

        if self.fail_fast {
            config.repl.on_error = ErrorPolicy::Abort;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.no_history {
            config.repl.history_file.clear();
        }
        if self.no_color {
            config.output.color = false;
        }

        Ok(config)
    }
}

pub fn run_cli(cli: Cli) -> Result<ExitCode> {
    let config = cli.resolve_config()?;

    if !config.output.color || !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let executor = CommandExecutor::new(config);

    match cli.command {
        Some(Commands::Eval { expression }) => {
            let line = expression.join(" ");
            match executor.eval(&line) {
                Ok(_) => Ok(ExitCode::SUCCESS),
                Err(_) => Ok(ExitCode::FAILURE),
            }
        }

        Some(Commands::Config { action }) => {
            match action {
                ConfigCommands::Show => {
                    executor.show_config()?;
                }
                ConfigCommands::Init { path, force } => {
                    let path = path
                        .or_else(Config::user_config_path)
                        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
                    executor.init_config(&path, force)?;
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        None => {
            // No command provided - start interactive REPL
            match run_repl(&executor)? {
                SessionEnd::Aborted => Ok(ExitCode::FAILURE),
                SessionEnd::Exit | SessionEnd::EndOfInput => Ok(ExitCode::SUCCESS),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_eval_with_hyphen_operator() {
        let cli = Cli::try_parse_from(["roman-calc", "eval", "5", "-", "3"]).unwrap();
        match cli.command {
            Some(Commands::Eval { expression }) => assert_eq!(expression, ["5", "-", "3"]),
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::try_parse_from(["roman-calc", "eval", "-1", "*", "2"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Eval { .. })));
    }

    #[test]
    fn test_no_command_means_repl() {
        let cli = Cli::try_parse_from(["roman-calc", "--fail-fast"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.fail_fast);
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "[repl]\nprompt = \"calc> \"\nhistory_file = \"/tmp/hist\"\n\n[output]\nformat = \"text\"\n",
        )
        .unwrap();
        let path_str = path.to_str().unwrap();

        let cli = Cli::try_parse_from([
            "roman-calc",
            "--config",
            path_str,
            "--fail-fast",
            "--format",
            "json",
            "--no-history",
            "--no-color",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.repl.prompt, "calc> ");
        assert_eq!(config.repl.on_error, ErrorPolicy::Abort);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.history_path().is_none());
        assert!(!config.output.color);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = Cli::try_parse_from(["roman-calc", "--config", "/nonexistent/roman-calc.toml"])
            .unwrap();
        assert!(cli.resolve_config().is_err());
    }
}
