//! Application state definitions

use super::forms::{FormState, IndustryRegisterForm};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Application root
    Home,
    #[default]
    IndustryRegister,
}

impl View {
    /// Route path shown in the status bar
    pub fn route(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::IndustryRegister => "/industry-register",
        }
    }

    /// Check if this view owns a form
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::IndustryRegister)
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Form state
    pub form: FormState,
}

impl AppState {
    /// Mount a fresh registration form with empty fields
    pub fn open_register_form(&mut self) {
        self.form = FormState::IndustryRegister(IndustryRegisterForm::new());
    }

    /// Discard the current form and everything scheduled by it
    pub fn clear_form(&mut self) {
        self.form = FormState::None;
    }

    pub fn register_form(&self) -> Option<&IndustryRegisterForm> {
        self.form.industry_register()
    }

    pub fn register_form_mut(&mut self) -> Option<&mut IndustryRegisterForm> {
        self.form.industry_register_mut()
    }

    /// True while a registration request is in flight
    pub fn is_loading(&self) -> bool {
        self.register_form().is_some_and(|f| f.loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        assert_eq!(View::Home.route(), "/");
        assert_eq!(View::IndustryRegister.route(), "/industry-register");
    }

    #[test]
    fn test_form_views() {
        assert!(View::IndustryRegister.is_form_view());
        assert!(!View::Home.is_form_view());
    }

    #[test]
    fn test_default_state_has_no_form() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::IndustryRegister);
        assert!(state.register_form().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_open_and_clear_form() {
        let mut state = AppState::default();
        state.open_register_form();
        assert!(state.register_form().is_some());
        state.register_form_mut().unwrap().loading = true;
        assert!(state.is_loading());
        state.clear_form();
        assert!(state.register_form().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_open_form_resets_values() {
        let mut state = AppState::default();
        state.open_register_form();
        state
            .register_form_mut()
            .unwrap()
            .update_field("city", "Pune".to_string());
        state.open_register_form();
        assert_eq!(state.register_form().unwrap().value("city"), "");
    }
}
