use crate::app::event::AppEvent;
use crate::app::mode::AppMode;
use crate::app::state::CalculatorState;

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub display: String,
    pub trace: String,
    /// Last keypad action, highlighted on the keypad
    pub last_input: Option<AppEvent>,
    pub status: Option<String>,
}

impl RenderState {
    /// Snapshot of the calculator for one frame
    pub fn from_calculator(
        mode: AppMode,
        calculator: &CalculatorState,
        last_input: Option<AppEvent>,
        status: Option<String>,
    ) -> Self {
        Self {
            mode,
            display: calculator.display(),
            trace: calculator.trace(),
            last_input,
            status,
        }
    }
}
