use crate::engine::{format_number, reduce, Formula, Operator};

/// Operand being typed before an operator commits it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PendingOperand {
    #[default]
    Absent,
    Entered(String),
}

impl PendingOperand {
    /// Append a digit or decimal point. A second `.` is ignored.
    pub fn push(&mut self, ch: char) {
        match self {
            PendingOperand::Absent => *self = PendingOperand::Entered(ch.to_string()),
            PendingOperand::Entered(buffer) => {
                if ch == '.' && buffer.contains('.') {
                    return;
                }
                buffer.push(ch);
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PendingOperand::Absent => "",
            PendingOperand::Entered(buffer) => buffer,
        }
    }

    /// Parsed value; `None` when absent or unparsable (e.g. a lone `.`)
    pub fn value(&self) -> Option<f64> {
        match self {
            PendingOperand::Absent => None,
            PendingOperand::Entered(buffer) => buffer.parse().ok(),
        }
    }

    /// Clear the buffer and return what it held
    pub fn take(&mut self) -> Option<f64> {
        let value = self.value();
        *self = PendingOperand::Absent;
        value
    }
}

/// Input handling state machine: the pending operand plus the formula
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    pending: PendingOperand,
    formula: Formula,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &PendingOperand {
        &self.pending
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn enter_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            tracing::warn!(?digit, "ignoring non-digit input");
            return;
        }
        self.pending.push(digit);
    }

    pub fn enter_point(&mut self) {
        self.pending.push('.');
    }

    pub fn press_operator(&mut self, operator: Operator) {
        match self.pending.take() {
            Some(operand) => {
                if self.formula.len() > 1 && self.formula.ends_with(Operator::Equals) {
                    self.formula.reset_to(operand, operator);
                } else {
                    self.formula.push_pair(operand, operator);
                }
            }
            None => {
                if self.formula.is_empty() {
                    return;
                }
                if operator == Operator::Equals && self.formula.len() > 3 {
                    self.formula.repeat_last_operation();
                } else {
                    self.formula.replace_last(operator);
                }
            }
        }
        tracing::debug!(%operator, formula = %self.formula, "operator pressed");
    }

    pub fn clear(&mut self) {
        self.pending = PendingOperand::Absent;
        self.formula.clear();
    }

    pub fn reduced_value(&self) -> Option<f64> {
        reduce(&self.formula)
    }

    /// Value shown on the display.
    ///
    /// A pending operand that parses to exactly zero counts as absent here, so
    /// typing `0` keeps showing the reduced value.
    pub fn display_value(&self) -> Option<f64> {
        match self.pending.value() {
            Some(operand) if operand != 0.0 => Some(operand),
            _ => self.reduced_value(),
        }
    }

    pub fn display(&self) -> String {
        self.display_value().map(format_number).unwrap_or_default()
    }

    pub fn trace(&self) -> String {
        self.formula.trace()
    }
}
