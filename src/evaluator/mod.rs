use crate::common::error::{CalcError, Result};
use crate::common::types::Operator;

/// Apply `op` to two integers. Division truncates toward zero.
pub fn evaluate(a: i64, b: i64, op: Operator) -> Result<i64> {
    let result = match op {
        Operator::Add => a.checked_add(b),
        Operator::Subtract => a.checked_sub(b),
        Operator::Multiply => a.checked_mul(b),
        Operator::Divide => {
            if b == 0 {
                return Err(CalcError::DivisionByZero);
            }
            a.checked_div(b)
        }
    };

    result.ok_or(CalcError::Overflow {
        left: a,
        operator: op.symbol(),
        right: b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_arithmetic_over_operand_domain() {
        for a in 1..=10 {
            for b in 1..=10 {
                assert_eq!(evaluate(a, b, Operator::Add).unwrap(), a + b);
                assert_eq!(evaluate(a, b, Operator::Subtract).unwrap(), a - b);
                assert_eq!(evaluate(a, b, Operator::Multiply).unwrap(), a * b);
                assert_eq!(evaluate(a, b, Operator::Divide).unwrap(), a / b);
            }
        }
    }

    #[test]
    fn test_division_truncates() {
        assert_eq!(evaluate(7, 2, Operator::Divide).unwrap(), 3);
        assert_eq!(evaluate(1, 10, Operator::Divide).unwrap(), 0);
        assert_eq!(evaluate(-7, 2, Operator::Divide).unwrap(), -3);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate(5, 0, Operator::Divide), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert!(matches!(
            evaluate(i64::MAX, 1, Operator::Add),
            Err(CalcError::Overflow { operator: "+", .. })
        ));
        assert!(matches!(
            evaluate(i64::MIN, -1, Operator::Divide),
            Err(CalcError::Overflow { .. })
        ));
    }
}
