use crate::common::error::{CalcError, Result};
use crate::common::types::{CalcValue, Expression, NumeralSystem, Operand, Operator};
use crate::evaluator::evaluate;
use crate::numeral::{NumeralTable, Numerals, MAX_OPERAND};

/// What a single input line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Value(CalcValue),
    Exit,
}

/// Evaluates `operand operator operand` expressions over a fixed numeral table.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    table: NumeralTable,
}

impl Calculator {
    pub fn new(table: NumeralTable) -> Self {
        Calculator { table }
    }

    pub fn numerals(&self) -> Numerals<'_> {
        Numerals::new(&self.table)
    }

    /// Handle one input line: `exit` (any case) or an expression.
    pub fn process_line(&self, line: &str) -> Result<LineOutcome> {
        if is_exit(line) {
            return Ok(LineOutcome::Exit);
        }
        self.evaluate_line(line).map(LineOutcome::Value)
    }

    pub fn evaluate_line(&self, line: &str) -> Result<CalcValue> {
        let expr = parse_expression(line)?;
        self.evaluate_expression(&expr)
    }

    pub fn evaluate_tokens(&self, left: &str, operator: &str, right: &str) -> Result<CalcValue> {
        let expr = Expression {
            left,
            operator: operator.parse()?,
            right,
        };
        self.evaluate_expression(&expr)
    }

    pub fn evaluate_expression(&self, expr: &Expression<'_>) -> Result<CalcValue> {
        let numerals = self.numerals();
        let system = self.common_system(expr.left, expr.right)?;

        let a = numerals.decode(expr.left)?;
        let b = numerals.decode(expr.right)?;

        // A zero divisor is reported as such even though it is also out of range.
        if expr.operator == Operator::Divide && b == 0 {
            return Err(CalcError::DivisionByZero);
        }

        for (operand, value) in [(Operand::Left, a), (Operand::Right, b)] {
            if !(1..=MAX_OPERAND).contains(&value) {
                return Err(CalcError::OperandRange {
                    system,
                    operand,
                    value,
                });
            }
        }

        let result = evaluate(a, b, expr.operator)?;
        log::debug!("{} {} {} = {} ({})", a, expr.operator, b, result, system);

        match system {
            NumeralSystem::Arabic => Ok(CalcValue::Arabic(result)),
            NumeralSystem::Roman => {
                let roman = numerals.encode_roman(result)?;
                Ok(CalcValue::Roman(roman.to_string()))
            }
        }
    }

    fn common_system(&self, left: &str, right: &str) -> Result<NumeralSystem> {
        let numerals = self.numerals();
        let classify = |token: &str| {
            numerals
                .classify(token)
                .ok_or_else(|| CalcError::UnrecognizedNumeral {
                    token: token.to_string(),
                })
        };

        let left_system = classify(left)?;
        let right_system = classify(right)?;

        if left_system != right_system {
            return Err(CalcError::MixedSystems {
                left: left_system,
                left_token: left.to_string(),
                right: right_system,
                right_token: right.to_string(),
            });
        }
        Ok(left_system)
    }
}

pub fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("exit")
}

/// Split a line into exactly three whitespace-separated fields.
pub fn parse_expression(line: &str) -> Result<Expression<'_>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        &[left, operator, right] => Ok(Expression {
            left,
            operator: operator.parse()?,
            right,
        }),
        _ => Err(CalcError::Format {
            found: tokens.len(),
        }),
    }
}
