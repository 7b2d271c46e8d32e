use crate::app::{App, AppEvent, AppMode};
use crate::engine::config::{Config, DisplayConfig};
use crate::ui::keymap::key_event_to_app_event;
use crate::ui::render::{button_at, draw_calculator, ButtonArea};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    display: DisplayConfig,
    buttons: Vec<ButtonArea>,
    // Dropped last so the terminal is restored after ratatui lets go of it
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(config: &Config) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new(config.display.mouse)?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            theme: Theme::from_config(&config.theme),
            display: config.display.clone(),
            buttons: Vec::new(),
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            self.render_frame(app)?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            let app_event = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => key_event_to_app_event(key),
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => button_at(&self.buttons, column, row).unwrap_or(AppEvent::None),
                _ => AppEvent::None,
            };

            if app_event != AppEvent::None {
                tracing::debug!(?app_event, "input");
                app.handle_event(app_event);
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        let theme = self.theme;
        let display = &self.display;
        let mut buttons = Vec::new();

        self.terminal.draw(|frame| {
            buttons = draw_calculator(frame, &render_state, &theme, display);
        })?;

        self.buttons = buttons;
        Ok(())
    }
}
