pub mod calculator;
pub mod cli;
pub mod commands;
pub mod output;
pub mod repl;

pub use calculator::{Calculator, LineOutcome};
pub use cli::run_cli;
pub use repl::run_repl;
