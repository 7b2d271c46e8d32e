use crate::app::{AppEvent, AppMode, RenderState};
use crate::engine::config::DisplayConfig;
use crate::ui::keymap::{KeypadButton, KEYPAD, KEYPAD_COLUMNS};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const BUTTON_WIDTH: u16 = 8;
const BUTTON_HEIGHT: u16 = 3;
const CALCULATOR_WIDTH: u16 = BUTTON_WIDTH * KEYPAD_COLUMNS as u16;

/// Screen area of a keypad button, kept for mouse hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonArea {
    pub area: Rect,
    pub event: AppEvent,
}

/// Event of the button under the given cell, if any
pub fn button_at(buttons: &[ButtonArea], column: u16, row: u16) -> Option<AppEvent> {
    buttons
        .iter()
        .find(|button| button.area.contains(Position::new(column, row)))
        .map(|button| button.event)
}

/// Shorten text to `width` columns, keeping the tail behind a leading ellipsis
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut used = 1;
    let mut kept = Vec::new();
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        kept.push(ch);
    }
    kept.reverse();

    let mut fitted = String::from("…");
    fitted.extend(kept);
    fitted
}

pub fn render_title(title: &str, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(title.to_string())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )
}

pub fn render_display(display: &str, width: u16, theme: &Theme) -> Paragraph<'static> {
    // Two columns go to the border
    let inner_width = width.saturating_sub(2) as usize;
    Paragraph::new(fit_to_width(display, inner_width))
        .alignment(Alignment::Right)
        .style(
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::bordered().border_style(Style::default().fg(theme.dimmed)))
}

pub fn render_button(
    button: &KeypadButton,
    last_input: Option<AppEvent>,
    theme: &Theme,
) -> Paragraph<'static> {
    let pressed = last_input == Some(button.event);
    let (label_style, border_style) = if pressed {
        let style = Style::default()
            .fg(theme.background)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD);
        (style, style)
    } else {
        (
            Style::default().fg(theme.text),
            Style::default().fg(theme.dimmed),
        )
    };

    Paragraph::new(button.label)
        .alignment(Alignment::Center)
        .style(label_style)
        .block(Block::bordered().border_style(border_style))
}

pub fn render_trace(trace: &str, width: u16, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(fit_to_width(trace, width as usize))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dimmed))
}

pub fn render_status(status: Option<&str>, theme: &Theme) -> Line<'static> {
    let text = status.unwrap_or("? help  y copy  q quit").to_string();
    Line::from(Span::styled(text, Style::default().fg(theme.dimmed))).alignment(Alignment::Center)
}

pub fn render_help(theme: &Theme) -> Paragraph<'static> {
    let rows = [
        ("0-9 .", "enter number"),
        ("+ - * /", "operator"),
        ("= Enter", "equals / repeat"),
        ("c Esc", "clear"),
        ("y", "copy result"),
        ("? h", "toggle help"),
        ("q", "quit"),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>8} ", keys),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(action.to_string(), Style::default().fg(theme.text)),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .block(
            Block::bordered()
                .title(" Keys ")
                .border_style(Style::default().fg(theme.dimmed)),
        )
}

/// Lay out the keypad rows inside `area`
pub fn keypad_areas(area: Rect) -> Vec<ButtonArea> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(BUTTON_HEIGHT); KEYPAD.len()])
        .split(area);

    let mut buttons = Vec::new();
    for (row_area, row) in rows.iter().zip(KEYPAD.iter()) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(BUTTON_WIDTH); KEYPAD_COLUMNS])
            .split(*row_area);
        for (button_area, button) in columns.iter().zip(row.iter()) {
            buttons.push(ButtonArea {
                area: *button_area,
                event: button.event,
            });
        }
    }
    buttons
}

/// Draw the whole calculator and return where its buttons ended up
pub fn draw_calculator(
    frame: &mut Frame,
    state: &RenderState,
    theme: &Theme,
    display_config: &DisplayConfig,
) -> Vec<ButtonArea> {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

    let width = CALCULATOR_WIDTH.min(area.width);
    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area)[1];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(BUTTON_HEIGHT * KEYPAD.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(column);

    frame.render_widget(render_title(&display_config.title, theme), chunks[0]);
    frame.render_widget(render_display(&state.display, width, theme), chunks[1]);

    let buttons = keypad_areas(chunks[2]);
    for (button_area, button) in buttons
        .iter()
        .zip(KEYPAD.iter().flat_map(|row| row.iter()))
    {
        frame.render_widget(
            render_button(button, state.last_input, theme),
            button_area.area,
        );
    }

    if display_config.show_trace {
        frame.render_widget(render_trace(&state.trace, width, theme), chunks[3]);
    }

    // Status spans the full terminal width
    let status_area = Rect::new(area.x, chunks[4].y, area.width, chunks[4].height);
    frame.render_widget(render_status(state.status.as_deref(), theme), status_area);

    if state.mode == AppMode::Help {
        let help_area = Rect::new(
            column.x,
            chunks[2].y,
            width,
            (BUTTON_HEIGHT * KEYPAD.len() as u16).min(chunks[2].height),
        );
        frame.render_widget(Clear, help_area);
        frame.render_widget(render_help(theme), help_area);
    }

    buttons
}
