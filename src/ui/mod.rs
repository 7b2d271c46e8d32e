pub mod keymap;
pub mod render;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use keymap::{key_event_to_app_event, key_to_app_event, parse_key, parse_script, Key};
pub use render::draw_calculator;
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
pub use theme::Theme;
