#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Calculating,
    Help,
    Quit,
}

