//! Terminal setup for the calculator screen
//!
//! Entering the guard switches to raw mode and the alternate screen, and captures
//! the mouse when keypad clicks are enabled. Dropping it undoes exactly what was
//! turned on. A panic restores the terminal before the previous hook prints.

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

// Read by the panic hook, which cannot reach the guard itself
static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);
static MOUSE_CAPTURED: AtomicBool = AtomicBool::new(false);

pub struct TerminalGuard {
    mouse_capture: bool,
}

impl TerminalGuard {
    pub fn new(mouse_capture: bool) -> Result<Self, io::Error> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        SCREEN_ACTIVE.store(true, Ordering::SeqCst);
        if mouse_capture {
            execute!(io::stdout(), EnableMouseCapture)?;
            MOUSE_CAPTURED.store(true, Ordering::SeqCst);
        }

        tracing::debug!(mouse_capture, "terminal prepared");
        Ok(TerminalGuard { mouse_capture })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(self.mouse_capture);
        SCREEN_ACTIVE.store(false, Ordering::SeqCst);
        MOUSE_CAPTURED.store(false, Ordering::SeqCst);
    }
}

fn restore_terminal(mouse_capture: bool) {
    let mut stdout = io::stdout();
    if mouse_capture {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    let _ = execute!(stdout, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn install_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            if SCREEN_ACTIVE.load(Ordering::SeqCst) {
                restore_terminal(MOUSE_CAPTURED.load(Ordering::SeqCst));
            }
            tracing::error!(%panic_info, "calculator panicked");
            previous(panic_info);
        }));
    });
}
