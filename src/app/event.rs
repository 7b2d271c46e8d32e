use crate::engine::Operator;

/// Application events
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppEvent {
    Digit(char),
    Point,
    Operator(Operator),
    Clear,
    CopyResult,
    Help,
    Quit,
    None,
}
