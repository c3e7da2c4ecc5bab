//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;

pub use forms::{form_layout, FormHit};
#[cfg(test)]
pub use forms::FormLayout;
pub use layout::create_layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::IndustryRegister => {
            if let Some(form) = app.state.register_form() {
                forms::draw_industry_register(frame, main_area, form);
            }
        }
    }

    // Draw status bar
    layout::draw_status_bar(frame, status_area, app);
}
