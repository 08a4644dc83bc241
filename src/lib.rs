// Library exports for testing and potential external use

pub mod calc;
pub mod common;
pub mod evaluator;
pub mod numeral;

pub use calc::{Calculator, LineOutcome};
pub use common::{CalcError, CalcValue, ErrorKind, NumeralSystem, Operator};
