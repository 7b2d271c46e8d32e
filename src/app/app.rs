use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use super::state::CalculatorState;
use crate::clipboard::{ClipboardSink, SystemClipboard};

pub struct App {
    mode: AppMode,
    calculator: CalculatorState,
    last_input: Option<AppEvent>,
    status: Option<String>,
    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new() -> Self {
        Self::with_clipboard(Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            mode: AppMode::Calculating,
            calculator: CalculatorState::new(),
            last_input: None,
            status: None,
            clipboard,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn calculator(&self) -> &CalculatorState {
        &self.calculator
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
            AppEvent::Help => {
                self.mode = match self.mode {
                    AppMode::Help => AppMode::Calculating,
                    _ => AppMode::Help,
                };
            }
            AppEvent::CopyResult => self.copy_result(),
            AppEvent::None => {}
            AppEvent::Digit(_) | AppEvent::Point | AppEvent::Operator(_) | AppEvent::Clear => {
                if self.mode == AppMode::Help {
                    self.mode = AppMode::Calculating;
                }
                self.status = None;
                self.apply_input(event);
                self.last_input = Some(event);
            }
        }
    }

    fn apply_input(&mut self, event: AppEvent) {
        match event {
            AppEvent::Digit(digit) => self.calculator.enter_digit(digit),
            AppEvent::Point => self.calculator.enter_point(),
            AppEvent::Operator(operator) => self.calculator.press_operator(operator),
            AppEvent::Clear => {
                self.calculator.clear();
                tracing::debug!("calculator cleared");
            }
            _ => {}
        }
    }

    fn copy_result(&mut self) {
        let shown = self.calculator.display();
        match self.clipboard.set_text(&shown) {
            Ok(()) => {
                tracing::info!(result = %shown, "copied result to clipboard");
                self.status = Some(format!("Copied {}", shown));
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.status = Some(e.to_string());
            }
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState::from_calculator(
            self.mode,
            &self.calculator,
            self.last_input,
            self.status.clone(),
        )
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
