//! Layout components (main area, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into main content and the status bar line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Current route
    spans.push(Span::styled(
        format!(" {} ", app.state.current_view.route()),
        Style::default().fg(Color::Blue),
    ));

    // View-specific hints
    spans.push(Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::DarkGray),
    ));

    if app.state.is_loading() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "registering...",
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn get_view_hints(view: &View) -> String {
    match view {
        View::Home => "r:register  q:quit".to_string(),
        View::IndustryRegister => {
            format!("Tab:next  Shift+Tab:prev  {SUBMIT_SHORTCUT}:register  Esc:cancel")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_takes_last_line() {
        let (main, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(main.height, 23);
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_view_hints() {
        assert!(get_view_hints(&View::Home).contains("q:quit"));
        assert!(get_view_hints(&View::IndustryRegister).contains("Esc:cancel"));
    }
}
