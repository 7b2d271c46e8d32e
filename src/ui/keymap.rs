//! Key mapping for the calculator
//!
//! Translates keyboard input into calculator actions:
//! - `0`-`9` → digits, `.` or `,` → decimal point
//! - `+` `-` → add/subtract, `*` `x` `X` → multiply, `/` → divide
//! - `=` or Enter → equals, `c` `C` or Esc → clear
//! - `y` → copy result, `?` `h` → help, `q` or Ctrl-C → quit
//!
//! The keypad layout lives here too so mouse clicks and key presses resolve to the
//! same events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppEvent;
use crate::engine::{DentakuError, Operator};

/// Keys recognized by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Point,
    Operator(Operator),
    Clear,
    Copy,
    Help,
    Quit,
    Unknown(char),
}

pub fn parse_key(ch: char) -> Key {
    match ch {
        '0'..='9' => Key::Digit(ch),
        '.' | ',' => Key::Point,
        '+' => Key::Operator(Operator::Add),
        '-' => Key::Operator(Operator::Subtract),
        '*' | 'x' | 'X' | '×' => Key::Operator(Operator::Multiply),
        '/' | '÷' => Key::Operator(Operator::Divide),
        '=' => Key::Operator(Operator::Equals),
        'c' | 'C' => Key::Clear,
        'y' => Key::Copy,
        '?' | 'h' => Key::Help,
        'q' => Key::Quit,
        _ => Key::Unknown(ch),
    }
}

/// Convert a parsed key into an AppEvent
pub fn key_to_app_event(key: Key) -> AppEvent {
    match key {
        Key::Digit(digit) => AppEvent::Digit(digit),
        Key::Point => AppEvent::Point,
        Key::Operator(operator) => AppEvent::Operator(operator),
        Key::Clear => AppEvent::Clear,
        Key::Copy => AppEvent::CopyResult,
        Key::Help => AppEvent::Help,
        Key::Quit => AppEvent::Quit,
        Key::Unknown(_) => AppEvent::None,
    }
}

/// Map a terminal key event, including the keys that have no character
pub fn key_event_to_app_event(key: KeyEvent) -> AppEvent {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,
        KeyCode::Char(ch) => key_to_app_event(parse_key(ch)),
        KeyCode::Enter => AppEvent::Operator(Operator::Equals),
        KeyCode::Esc => AppEvent::Clear,
        _ => AppEvent::None,
    }
}

/// Parse a headless key script such as `"7+8="`. Whitespace is skipped.
pub fn parse_script(script: &str) -> Result<Vec<AppEvent>, DentakuError> {
    script
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| match parse_key(ch) {
            Key::Unknown(ch) => Err(DentakuError::UnknownKey(ch)),
            key => Ok(key_to_app_event(key)),
        })
        .collect()
}

/// One button on the on-screen keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub label: &'static str,
    pub event: AppEvent,
}

const fn button(label: &'static str, event: AppEvent) -> KeypadButton {
    KeypadButton { label, event }
}

pub const KEYPAD_COLUMNS: usize = 4;

/// Keypad rows, top to bottom
pub const KEYPAD: &[&[KeypadButton]] = &[
    &[
        button("7", AppEvent::Digit('7')),
        button("8", AppEvent::Digit('8')),
        button("9", AppEvent::Digit('9')),
        button("÷", AppEvent::Operator(Operator::Divide)),
    ],
    &[
        button("4", AppEvent::Digit('4')),
        button("5", AppEvent::Digit('5')),
        button("6", AppEvent::Digit('6')),
        button("×", AppEvent::Operator(Operator::Multiply)),
    ],
    &[
        button("1", AppEvent::Digit('1')),
        button("2", AppEvent::Digit('2')),
        button("3", AppEvent::Digit('3')),
        button("-", AppEvent::Operator(Operator::Subtract)),
    ],
    &[
        button("0", AppEvent::Digit('0')),
        button(".", AppEvent::Point),
        button("=", AppEvent::Operator(Operator::Equals)),
        button("+", AppEvent::Operator(Operator::Add)),
    ],
    &[button("C", AppEvent::Clear)],
];
