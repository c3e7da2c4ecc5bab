//! Application state and core logic

use crate::backend::{RegistrationBackend, RegistrationClient, SubmitError};
use crate::config::{RegisterConfig, ENDPOINT_ENV_VAR};
use crate::platform::is_form_shortcut;
use crate::state::{AppState, Form, View, CANCEL_BUTTON, FIELD_COUNT, SUBMIT_BUTTON};
use crate::ui::{create_layout, form_layout, FormHit};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::Instant;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend receiving registrations
    backend: Arc<dyn RegistrationBackend>,
    /// Registration request in flight, if any
    submission: Option<JoinHandle<Result<(), SubmitError>>>,
    /// Delay between a successful registration and the redirect
    redirect_delay: Duration,
    /// Whether the app should quit
    quit: bool,
    /// Message carried to the root view after a redirect
    pub status_message: Option<String>,
    /// Full terminal area from the last draw, for mouse hit-testing
    pub frame_area: Rect,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &RegisterConfig) -> Result<Self> {
        let client = RegistrationClient::new(config.endpoint(std::env::var(ENDPOINT_ENV_VAR).ok())?);
        let endpoint = client.endpoint();
        tracing::info!(%endpoint, "using registration endpoint");
        if endpoint.scheme() != "https" {
            tracing::warn!("registration endpoint is not encrypted; passwords are sent in cleartext");
        }

        let start_view = if config.start_on_home() {
            View::Home
        } else {
            View::IndustryRegister
        };

        Ok(Self::with_backend(
            Arc::new(client),
            config.redirect_delay(),
            start_view,
        ))
    }

    /// Create an App around an arbitrary backend
    pub fn with_backend(
        backend: Arc<dyn RegistrationBackend>,
        redirect_delay: Duration,
        start_view: View,
    ) -> Self {
        let mut app = Self {
            state: AppState::default(),
            backend,
            submission: None,
            redirect_delay,
            quit: false,
            status_message: None,
            frame_area: Rect::default(),
        };
        app.navigate(start_view);
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Switch views. Leaving a form tears it down; entering one mounts it fresh.
    pub fn navigate(&mut self, view: View) {
        self.teardown_form();
        tracing::debug!(route = view.route(), "navigate");
        self.state.current_view = view;
        if view.is_form_view() {
            self.status_message = None;
            self.state.open_register_form();
        }
    }

    /// Drop the form, its pending redirect and any request still in flight
    fn teardown_form(&mut self) {
        if let Some(handle) = self.submission.take() {
            handle.abort();
            tracing::info!("aborted in-flight registration on teardown");
        }
        self.state.clear_form();
    }

    /// Quit the application, releasing the form first
    pub fn quit(&mut self) {
        self.teardown_form();
        self.quit = true;
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::IndustryRegister => self.handle_register_key(key),
        }
        Ok(())
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter => self.navigate(View::IndustryRegister),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    /// Handle keys in the registration view
    fn handle_register_key(&mut self, key: KeyEvent) {
        if is_form_shortcut(&key, 's') {
            self.request_submit();
            return;
        }
        if key.code == KeyCode::Esc {
            self.navigate(View::Home);
            return;
        }

        let Some(form) = self.state.register_form_mut() else {
            return;
        };

        if is_form_shortcut(&key, 't') {
            form.toggle_active_visibility();
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left if form.is_buttons_row_active() => form.prev_button(),
            KeyCode::Right if form.is_buttons_row_active() => form.next_button(),
            KeyCode::Enter if form.is_buttons_row_active() => {
                let selected = form.selected_button;
                self.activate_button(selected);
            }
            KeyCode::Enter => form.next_field(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.input_char(c)
            }
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    fn activate_button(&mut self, button: usize) {
        match button {
            SUBMIT_BUTTON => self.request_submit(),
            CANCEL_BUTTON => self.navigate(View::Home),
            _ => {}
        }
    }

    /// Handle a mouse event
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.current_view != View::IndustryRegister {
            return Ok(());
        }
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return Ok(());
        };

        let (main_area, _) = create_layout(self.frame_area);
        let Some(hit) = form_layout(main_area).hit_test(mouse.column, mouse.row) else {
            return Ok(());
        };

        match hit {
            FormHit::Submit => self.activate_button(SUBMIT_BUTTON),
            FormHit::Cancel => self.activate_button(CANCEL_BUTTON),
            FormHit::Field(index) => {
                if let Some(form) = self.state.register_form_mut() {
                    form.set_active_field(index);
                }
            }
            FormHit::Toggle(index) => {
                if let Some(form) = self.state.register_form_mut() {
                    if let Some(key) = form.get_field(index).map(|f| f.name) {
                        form.toggle_visibility(key);
                    }
                }
            }
        }
        Ok(())
    }

    /// Validate the form and start the registration request.
    ///
    /// Ignored while a request is already in flight.
    pub fn request_submit(&mut self) {
        if self.submission.is_some() {
            tracing::debug!("submit ignored while a registration is in flight");
            return;
        }
        let Some(form) = self.state.register_form_mut() else {
            return;
        };

        if let Err(err) = form.check_required() {
            tracing::info!(%err, "registration blocked by empty field");
            return;
        }

        let payload = match form.begin_submit() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::info!(%err, "registration rejected locally");
                return;
            }
        };

        tracing::info!(fields = FIELD_COUNT - 1, "submitting industry registration");
        let backend = Arc::clone(&self.backend);
        self.submission = Some(tokio::spawn(async move {
            backend.register_industry(&payload).await
        }));
    }

    /// Advance time-driven state: settle a finished request, fire a due redirect
    pub async fn tick(&mut self) {
        self.poll_submission().await;

        let now = Instant::now();
        let Some(form) = self.state.register_form_mut() else {
            return;
        };
        if form.take_due_redirect(now) {
            let organization = form.value("organization_name").to_string();
            tracing::info!("redirecting to root after registration");
            self.navigate(View::Home);
            self.status_message = Some(format!("Registered {organization}."));
        }
    }

    /// Collect the result of the in-flight request without blocking
    async fn poll_submission(&mut self) {
        if !self
            .submission
            .as_ref()
            .is_some_and(JoinHandle::is_finished)
        {
            return;
        }
        if let Some(handle) = self.submission.take() {
            let joined = handle.await;
            self.settle_submission(joined);
        }
    }

    fn settle_submission(&mut self, joined: Result<Result<(), SubmitError>, JoinError>) {
        let outcome = joined.unwrap_or_else(|err| Err(SubmitError::from(err)));

        match &outcome {
            Ok(()) => tracing::info!("industry registered"),
            Err(err) => tracing::warn!(status = ?err.status(), error = %err, "registration failed"),
        }

        if let Some(form) = self.state.register_form_mut() {
            form.complete_submit(&outcome, Instant::now(), self.redirect_delay);
        }
    }

    /// Wait for the in-flight request, if any, and settle it
    #[cfg(test)]
    async fn wait_for_submission(&mut self) {
        if let Some(handle) = self.submission.take() {
            let joined = handle.await;
            self.settle_submission(joined);
        }
    }
}
