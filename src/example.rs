// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Example domain logic used by the packaging demo and its tests.

use thiserror::Error;

/// An integer or floating point operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// Rejected operand text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("Inputs must be integers or floats, got '{input}'")]
    NotNumeric { input: String },
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl std::str::FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Number::Float(f)),
            _ => Err(NumberError::NotNumeric {
                input: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // Whole floats keep one decimal so 6.0 is not shown as an integer.
            Number::Float(x) if x.fract() == 0.0 => write!(f, "{:.1}", x),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Add two numbers. Integer addition that overflows is done in floating
/// point instead.
pub fn add_numbers(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_add(y)
            .map(Number::Int)
            .unwrap_or_else(|| Number::Float(x as f64 + y as f64)),
        _ => Number::Float(a.as_f64() + b.as_f64()),
    }
}

/// Parse both operands, then add them.
pub fn try_add_str(a: &str, b: &str) -> Result<Number, NumberError> {
    Ok(add_numbers(a.parse()?, b.parse()?))
}

/// The line printed by the `commitgate-demo` binary.
pub fn demo_line() -> String {
    let result = add_numbers(Number::from(2_i64), Number::from(3_i64));
    format!("Hello from commitgate! 2 + 3 = {}", result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_numbers() {
        let cases = [
            (Number::Int(1), Number::Int(2), Number::Int(3)),
            (Number::Int(-5), Number::Int(3), Number::Int(-2)),
            (Number::Float(2.5), Number::Float(3.5), Number::Float(6.0)),
            (Number::Int(0), Number::Int(0), Number::Int(0)),
        ];

        for (a, b, expected) in cases {
            assert_eq!(add_numbers(a, b), expected);
        }
    }

    #[test]
    fn test_mixed_operands_are_float() {
        assert_eq!(add_numbers(Number::Int(1), Number::from(0.5)), Number::Float(1.5));
    }

    #[test]
    fn test_overflow_falls_back_to_float() {
        let sum = add_numbers(Number::Int(i64::MAX), Number::Int(1));
        assert!(matches!(sum, Number::Float(_)));
    }

    #[test]
    fn test_add_numbers_type_error() {
        let err = try_add_str("1x", "2").unwrap_err();
        assert_eq!(
            err,
            NumberError::NotNumeric {
                input: "1x".to_string()
            }
        );
        assert!(try_add_str("1", "NaN").is_err());
    }

    #[test]
    fn test_try_add_str() {
        assert_eq!(try_add_str("2", " 3 ").unwrap(), Number::Int(5));
        assert_eq!(try_add_str("2.5", "3.5").unwrap().to_string(), "6.0");
    }

    #[test]
    fn test_demo_line() {
        assert!(demo_line().contains("2 + 3 = 5"));
    }
}
