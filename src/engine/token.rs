use std::fmt;

use crate::engine::format::format_number;

/// Operator keys on the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Equals => "=",
        }
    }

    /// Apply a binary operator with plain IEEE-754 semantics.
    ///
    /// Division by zero yields infinity or NaN. `Equals` keeps the left operand.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
            Operator::Equals => lhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One element of a formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
}

impl Token {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Token::Number(value) => Some(*value),
            Token::Operator(_) => None,
        }
    }

    pub fn is_operator(&self, operator: Operator) -> bool {
        matches!(self, Token::Operator(op) if *op == operator)
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Token::Number(value)
    }
}

impl From<Operator> for Token {
    fn from(operator: Operator) -> Self {
        Token::Operator(operator)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => f.write_str(&format_number(*value)),
            Token::Operator(operator) => write!(f, "{}", operator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_apply_basic_arithmetic() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operator::Multiply.apply(2.0, 3.0), 6.0);
        assert_eq!(Operator::Divide.apply(3.0, 2.0), 1.5);
    }

    #[test]
    fn test_operator_divide_by_zero() {
        assert_eq!(Operator::Divide.apply(9.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-9.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_equals_keeps_left_operand() {
        assert_eq!(Operator::Equals.apply(4.0, 7.0), 4.0);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Number(15.0).to_string(), "15");
        assert_eq!(Token::Operator(Operator::Multiply).to_string(), "×");
        assert_eq!(Token::Operator(Operator::Divide).to_string(), "÷");
    }

    #[test]
    fn test_token_is_operator() {
        let token = Token::Operator(Operator::Equals);
        assert!(token.is_operator(Operator::Equals));
        assert!(!token.is_operator(Operator::Add));
        assert!(!Token::Number(1.0).is_operator(Operator::Equals));
    }
}
