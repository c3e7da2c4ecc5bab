//! Industry registration form rendering and hit-testing

use super::field_renderer::{draw_field, draw_visibility_toggle};
use crate::platform::{REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{
    password_fields, text_fields, IndustryRegisterForm, CANCEL_BUTTON, FIELD_COUNT,
    SUBMIT_BUTTON,
};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a single-line bordered field
const FIELD_HEIGHT: u16 = 3;
/// Text fields per row
const COLUMNS: usize = 3;
/// Width of the Show/Hide toggle
const TOGGLE_WIDTH: u16 = 8;
/// Width of each action button
const ACTION_BUTTON_WIDTH: u16 = 18;

const SUBTITLE: &str = "National Pharmacy Welfare Association, Pune";

/// Screen regions of the registration form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub subtitle: Rect,
    /// Field rectangles indexed like the field schema
    pub fields: Vec<Rect>,
    /// Visibility toggles as (field index, rect)
    pub toggles: Vec<(usize, Rect)>,
    pub status: Rect,
    pub submit: Rect,
    pub cancel: Rect,
    pub help: Rect,
}

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormHit {
    Field(usize),
    Toggle(usize),
    Submit,
    Cancel,
}

fn text_rows() -> usize {
    text_fields().count().div_ceil(COLUMNS)
}

/// Compute the form layout for the given content area.
///
/// Drawing and mouse handling both go through this function so that a
/// click always maps to what is on screen.
pub fn form_layout(area: Rect) -> FormLayout {
    let rows = text_rows();
    let mut constraints = vec![Constraint::Length(1)]; // Subtitle
    constraints.extend((0..rows).map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(FIELD_HEIGHT)); // Passwords
    constraints.push(Constraint::Length(1)); // Status message
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Actions
    constraints.push(Constraint::Length(1)); // Help text
    constraints.push(Constraint::Min(0)); // Remaining space

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);
    // First text row follows the subtitle
    let (subtitle, chunks) = (chunks[0], &chunks[1..]);

    let mut fields = vec![Rect::default(); FIELD_COUNT];

    for (position, (index, _)) in text_fields().enumerate() {
        let row = position / COLUMNS;
        let col = position % COLUMNS;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(chunks[row]);
        fields[index] = columns[col];
    }

    let password_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(chunks[rows]);

    let mut toggles = Vec::new();
    for (position, (index, _)) in password_fields().enumerate() {
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(TOGGLE_WIDTH)])
            .split(password_columns[position.min(1)]);
        fields[index] = parts[0];
        toggles.push((index, parts[1]));
    }

    let actions = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(ACTION_BUTTON_WIDTH),
            Constraint::Length(ACTION_BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .split(chunks[rows + 2]);

    FormLayout {
        subtitle,
        fields,
        toggles,
        status: chunks[rows + 1],
        submit: actions[0],
        cancel: actions[1],
        help: chunks[rows + 3],
    }
}

impl FormLayout {
    /// Find the element under a screen position
    pub fn hit_test(&self, column: u16, row: u16) -> Option<FormHit> {
        let pos = Position::new(column, row);
        if let Some((index, _)) = self.toggles.iter().find(|(_, r)| r.contains(pos)) {
            return Some(FormHit::Toggle(*index));
        }
        if let Some(index) = self.fields.iter().position(|r| r.contains(pos)) {
            return Some(FormHit::Field(index));
        }
        if self.submit.contains(pos) {
            return Some(FormHit::Submit);
        }
        if self.cancel.contains(pos) {
            return Some(FormHit::Cancel);
        }
        None
    }
}

/// Draw the industry registration form
pub fn draw(frame: &mut Frame, area: Rect, form: &IndustryRegisterForm) {
    let layout = form_layout(area);

    let block = Block::default()
        .title(" Industry Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    for (index, field) in form.fields().iter().enumerate() {
        draw_field(
            frame,
            layout.fields[index],
            field,
            form.active_field_index == index,
        );
    }

    for (index, rect) in &layout.toggles {
        let key = form.fields()[*index].name;
        draw_visibility_toggle(
            frame,
            *rect,
            form.is_password_visible(key),
            form.active_field_index == *index,
        );
    }

    frame.render_widget(
        Paragraph::new(SUBTITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        layout.subtitle,
    );

    draw_status(frame, layout.status, form);
    draw_actions(frame, &layout, form);
    draw_help(frame, layout.help);
}

fn draw_status(frame: &mut Frame, area: Rect, form: &IndustryRegisterForm) {
    let line = if form.loading {
        Line::from(Span::styled(
            "Registering...",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(error) = &form.error {
        Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(message) = &form.success_message {
        Line::from(Span::styled(
            message.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_actions(frame: &mut Frame, layout: &FormLayout, form: &IndustryRegisterForm) {
    let on_buttons = form.is_buttons_row_active();
    let submit_label = if form.loading {
        "Registering..."
    } else {
        "Register"
    };

    render_action_button(
        frame,
        layout.submit,
        submit_label,
        on_buttons && form.selected_button == SUBMIT_BUTTON,
        !form.loading,
        Color::Green,
    );

    render_action_button(
        frame,
        layout.cancel,
        "Cancel",
        on_buttons && form.selected_button == CANCEL_BUTTON,
        true,
        Color::Gray,
    );
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next  "),
        Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": register  "),
        Span::styled(REVEAL_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": show/hide password  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": cancel"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
