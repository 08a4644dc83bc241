use serde::Serialize;
use thiserror::Error;

use crate::common::types::{NumeralSystem, Operand};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid input format: expected `operand operator operand`, got {found} token(s)")]
    Format { found: usize },

    #[error("Mixed or invalid numeral systems: unrecognized numeral '{token}'")]
    UnrecognizedNumeral { token: String },

    #[error("Mixed or invalid numeral systems: '{left_token}' is {left}, '{right_token}' is {right}")]
    MixedSystems {
        left: NumeralSystem,
        left_token: String,
        right: NumeralSystem,
        right_token: String,
    },

    #[error("{} numbers out of range ({}): {operand} operand is {value}", .system, range_label(.system))]
    OperandRange {
        system: NumeralSystem,
        operand: Operand,
        value: i64,
    },

    #[error("Result out of range for Roman numerals: {value}")]
    ResultRange { value: i64 },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid operator: {token}")]
    InvalidOperator { token: String },

    #[error("Integer overflow: {left} {operator} {right}")]
    Overflow {
        left: i64,
        operator: &'static str,
        right: i64,
    },
}

fn range_label(system: &NumeralSystem) -> &'static str {
    match system {
        NumeralSystem::Arabic => "1-10",
        NumeralSystem::Roman => "I-X",
    }
}

/// Stable classification of a [`CalcError`], independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Format,
    MixedSystem,
    OperandRange,
    ResultRange,
    DivisionByZero,
    InvalidOperator,
    Overflow,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Format => "format",
            ErrorKind::MixedSystem => "mixed_system",
            ErrorKind::OperandRange => "operand_range",
            ErrorKind::ResultRange => "result_range",
            ErrorKind::DivisionByZero => "division_by_zero",
            ErrorKind::InvalidOperator => "invalid_operator",
            ErrorKind::Overflow => "overflow",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Format { .. } => ErrorKind::Format,
            CalcError::UnrecognizedNumeral { .. } | CalcError::MixedSystems { .. } => {
                ErrorKind::MixedSystem
            }
            CalcError::OperandRange { .. } => ErrorKind::OperandRange,
            CalcError::ResultRange { .. } => ErrorKind::ResultRange,
            CalcError::DivisionByZero => ErrorKind::DivisionByZero,
            CalcError::InvalidOperator { .. } => ErrorKind::InvalidOperator,
            CalcError::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
