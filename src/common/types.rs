use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::common::error::CalcError;

/// Numeral system an operand was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    Arabic,
    Roman,
}

impl std::fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumeralSystem::Arabic => write!(f, "Arabic"),
            NumeralSystem::Roman => write!(f, "Roman"),
        }
    }
}

/// Position of an operand within an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    Left,
    Right,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Left => write!(f, "left"),
            Operand::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(CalcError::InvalidOperator {
                token: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One parsed `operand operator operand` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<'a> {
    pub left: &'a str,
    pub operator: Operator,
    pub right: &'a str,
}

/// Result of evaluating an expression, in the numeral system of its operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcValue {
    Arabic(i64),
    Roman(String),
}

impl CalcValue {
    pub fn system(&self) -> NumeralSystem {
        match self {
            CalcValue::Arabic(_) => NumeralSystem::Arabic,
            CalcValue::Roman(_) => NumeralSystem::Roman,
        }
    }
}

impl std::fmt::Display for CalcValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcValue::Arabic(n) => write!(f, "{}", n),
            CalcValue::Roman(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_parse() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("-".parse::<Operator>().unwrap(), Operator::Subtract);
        assert_eq!("*".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);
    }

    #[test]
    fn test_operator_parse_rejects_unknown() {
        let err = "%".parse::<Operator>().unwrap_err();
        assert!(matches!(err, CalcError::InvalidOperator { ref token } if token == "%"));

        // Roman numerals are not operators
        assert!("IV".parse::<Operator>().is_err());
    }

    #[test]
    fn test_calc_value_display() {
        assert_eq!(CalcValue::Arabic(-3).to_string(), "-3");
        assert_eq!(CalcValue::Roman("XIV".to_string()).to_string(), "XIV");
        assert_eq!(CalcValue::Roman("X".to_string()).system(), NumeralSystem::Roman);
    }
}
