use std::fmt;

use super::token::{Operator, Token};

/// Ordered record of operands and operators entered since the last clear.
///
/// Positional edits go through length-checked helpers so the calculator's
/// replace-last-operator and repeat-last-operation rules never index out of range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Formula {
    tokens: Vec<Token>,
}

impl Formula {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Token `n` positions from the end, where `1` is the last token.
    pub fn nth_from_end(&self, n: usize) -> Option<Token> {
        if n == 0 || n > self.tokens.len() {
            return None;
        }
        self.tokens.get(self.tokens.len() - n).copied()
    }

    pub fn ends_with(&self, operator: Operator) -> bool {
        self.last().is_some_and(|token| token.is_operator(operator))
    }

    pub fn push(&mut self, token: impl Into<Token>) {
        self.tokens.push(token.into());
    }

    /// Append a committed operand followed by the operator that committed it.
    pub fn push_pair(&mut self, operand: f64, operator: Operator) {
        self.tokens.push(Token::Number(operand));
        self.tokens.push(Token::Operator(operator));
    }

    /// Replace the last token. Returns false on an empty formula.
    pub fn replace_last(&mut self, token: impl Into<Token>) -> bool {
        match self.tokens.last_mut() {
            Some(last) => {
                *last = token.into();
                true
            }
            None => false,
        }
    }

    /// Start over from a single committed pair.
    pub fn reset_to(&mut self, operand: f64, operator: Operator) {
        self.tokens.clear();
        self.push_pair(operand, operator);
    }

    /// Repeat the last binary operation against the accumulated result.
    ///
    /// `[.., op, b, last]` becomes `[.., op, b, op, b, =]`. Requires more than three
    /// tokens; returns false and leaves the formula untouched otherwise.
    pub fn repeat_last_operation(&mut self) -> bool {
        if self.tokens.len() <= 3 {
            return false;
        }
        let (Some(operator), Some(operand)) = (self.nth_from_end(3), self.nth_from_end(2)) else {
            return false;
        };
        self.replace_last(operator);
        self.push(operand);
        self.push(Operator::Equals);
        true
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Space-joined rendering used for the trace line
    pub fn trace(&self) -> String {
        self.tokens
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.trace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula(tokens: &[Token]) -> Formula {
        Formula::from_tokens(tokens.to_vec())
    }

    #[test]
    fn test_new_formula_is_empty() {
        let formula = Formula::new();
        assert!(formula.is_empty());
        assert_eq!(formula.len(), 0);
        assert_eq!(formula.trace(), "");
    }

    #[test]
    fn test_nth_from_end_bounds() {
        let f = formula(&[Token::Number(2.0), Token::Operator(Operator::Add)]);
        assert_eq!(f.nth_from_end(0), None);
        assert_eq!(f.nth_from_end(1), Some(Token::Operator(Operator::Add)));
        assert_eq!(f.nth_from_end(2), Some(Token::Number(2.0)));
        assert_eq!(f.nth_from_end(3), None);
    }

    #[test]
    fn test_replace_last_on_empty_formula() {
        let mut f = Formula::new();
        assert!(!f.replace_last(Operator::Add));
        assert!(f.is_empty());
    }

    #[test]
    fn test_replace_last_swaps_operator() {
        let mut f = Formula::new();
        f.push_pair(4.0, Operator::Add);
        assert!(f.replace_last(Operator::Multiply));
        assert_eq!(f.trace(), "4 ×");
    }

    #[test]
    fn test_reset_to_discards_history() {
        let mut f = Formula::new();
        f.push_pair(2.0, Operator::Add);
        f.push_pair(3.0, Operator::Equals);
        f.reset_to(9.0, Operator::Subtract);
        assert_eq!(f.tokens(), &[Token::Number(9.0), Token::Operator(Operator::Subtract)]);
    }

    #[test]
    fn test_ends_with() {
        let mut f = Formula::new();
        assert!(!f.ends_with(Operator::Equals));
        f.push_pair(2.0, Operator::Equals);
        assert!(f.ends_with(Operator::Equals));
        assert!(!f.ends_with(Operator::Add));
    }

    #[test]
    fn test_repeat_last_operation() {
        let mut f = Formula::new();
        f.push_pair(2.0, Operator::Add);
        f.push_pair(3.0, Operator::Equals);
        assert!(f.repeat_last_operation());
        assert_eq!(f.trace(), "2 + 3 + 3 =");
    }

    #[test]
    fn test_repeat_last_operation_needs_more_than_three_tokens() {
        let mut f = formula(&[
            Token::Number(2.0),
            Token::Operator(Operator::Add),
            Token::Number(3.0),
        ]);
        assert!(!f.repeat_last_operation());
        assert_eq!(f.len(), 3);
    }

    #[test]
    fn test_trace_joins_with_spaces() {
        let mut f = Formula::new();
        f.push_pair(7.0, Operator::Add);
        f.push_pair(8.0, Operator::Equals);
        assert_eq!(f.trace(), "7 + 8 =");
        assert_eq!(f.to_string(), "7 + 8 =");
    }
}
