//! Left-to-right formula reduction
//!
//! Collapses `[n, op, n, op, ...]` into one value without operator precedence:
//! `2 + 3 × 4` is `(2 + 3) × 4`. The first three tokens are folded into one number
//! and the fold repeats while at least three tokens remain.

use super::formula::Formula;
use super::token::Token;

/// Reduce a formula to its current value.
///
/// An empty formula is `0`. A malformed triple (non-number where an operand is
/// expected, or a number in operator position) stops the fold; the triple is dropped
/// and whatever follows it is the result. `None` means nothing numeric is left.
pub fn reduce(formula: &Formula) -> Option<f64> {
    reduce_tokens(formula.tokens())
}

pub fn reduce_tokens(tokens: &[Token]) -> Option<f64> {
    let Some(&first) = tokens.first() else {
        return Some(0.0);
    };

    let mut front = first;
    let mut rest = &tokens[1..];

    while let [operator, rhs, tail @ ..] = rest {
        match (front, operator, rhs) {
            (Token::Number(lhs), Token::Operator(op), Token::Number(rhs)) => {
                front = Token::Number(op.apply(lhs, *rhs));
                rest = tail;
            }
            _ => {
                tracing::warn!(formula = ?tokens, "malformed formula, reduction stopped");
                return tail.first().and_then(Token::as_number);
            }
        }
    }

    front.as_number()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::token::Operator;

    fn n(value: f64) -> Token {
        Token::Number(value)
    }

    fn op(operator: Operator) -> Token {
        Token::Operator(operator)
    }

    #[test]
    fn test_empty_formula_is_zero() {
        assert_eq!(reduce(&Formula::new()), Some(0.0));
    }

    #[test]
    fn test_single_triple() {
        assert_eq!(reduce_tokens(&[n(2.0), op(Operator::Add), n(3.0)]), Some(5.0));
        assert_eq!(reduce_tokens(&[n(2.0), op(Operator::Subtract), n(3.0)]), Some(-1.0));
        assert_eq!(reduce_tokens(&[n(2.0), op(Operator::Multiply), n(3.0)]), Some(6.0));
        assert_eq!(reduce_tokens(&[n(3.0), op(Operator::Divide), n(2.0)]), Some(1.5));
    }

    #[test]
    fn test_left_to_right_without_precedence() {
        let tokens = [
            n(2.0),
            op(Operator::Add),
            n(3.0),
            op(Operator::Multiply),
            n(4.0),
        ];
        assert_eq!(reduce_tokens(&tokens), Some(20.0));
    }

    #[test]
    fn test_trailing_operator_is_ignored() {
        let tokens = [n(7.0), op(Operator::Add), n(8.0), op(Operator::Equals)];
        assert_eq!(reduce_tokens(&tokens), Some(15.0));
        assert_eq!(reduce_tokens(&[n(7.0), op(Operator::Add)]), Some(7.0));
    }

    #[test]
    fn test_division_by_zero_propagates() {
        let tokens = [n(9.0), op(Operator::Divide), n(0.0), op(Operator::Equals)];
        assert_eq!(reduce_tokens(&tokens), Some(f64::INFINITY));

        let tokens = [
            n(9.0),
            op(Operator::Divide),
            n(0.0),
            op(Operator::Subtract),
            n(1.0),
        ];
        assert_eq!(reduce_tokens(&tokens), Some(f64::INFINITY));

        let nan = reduce_tokens(&[n(0.0), op(Operator::Divide), n(0.0)]);
        assert!(nan.is_some_and(f64::is_nan));
    }

    #[test]
    fn test_malformed_operand_stops_reduction() {
        let tokens = [
            op(Operator::Add),
            op(Operator::Add),
            n(3.0),
            n(5.0),
            op(Operator::Add),
        ];
        assert_eq!(reduce_tokens(&tokens), Some(5.0));
    }

    #[test]
    fn test_malformed_with_nothing_left_is_absent() {
        let tokens = [n(1.0), op(Operator::Add), op(Operator::Add)];
        assert_eq!(reduce_tokens(&tokens), None);
    }

    #[test]
    fn test_number_in_operator_position_is_malformed() {
        let tokens = [n(1.0), n(2.0), n(3.0)];
        assert_eq!(reduce_tokens(&tokens), None);
    }

    #[test]
    fn test_leading_operator_alone_is_absent() {
        assert_eq!(reduce_tokens(&[op(Operator::Add)]), None);
    }

    #[test]
    fn test_reduce_does_not_mutate_formula() {
        let formula = Formula::from_tokens(vec![n(1.0), op(Operator::Add), n(1.0)]);
        let before = formula.clone();
        let _ = reduce(&formula);
        assert_eq!(formula, before);
    }
}
