//! Field rendering utilities for forms

use crate::state::FormField;
use crate::ui::components::render_button;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field using FormField from the domain layer.
///
/// The displayed value always mirrors the stored one; password fields are
/// masked while obscured.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.block(block), area);
}

/// Draw the `[Show]`/`[Hide]` toggle next to a password field
pub fn draw_visibility_toggle(frame: &mut Frame, area: Rect, is_visible: bool, is_active: bool) {
    let label = if is_visible { "Hide" } else { "Show" };
    render_button(frame, area, label, is_active, true);
}
