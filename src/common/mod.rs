pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, ErrorPolicy, OutputFormat};
pub use error::{CalcError, ErrorKind};
pub use types::{CalcValue, Expression, NumeralSystem, Operand, Operator};
