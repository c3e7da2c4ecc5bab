//! Form state management and form structs

use super::field::FormField;
use super::schema::{self, CONFIRM_PASSWORD_KEY, FIELD_COUNT, FIELD_SCHEMA, PASSWORD_KEY};
use crate::backend::{IndustryRegistration, SubmitError};
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

pub const SUBMIT_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Industry registered successfully!";

/// Delay between a successful registration and the redirect to `/`
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Index of the Submit/Cancel row, one past the last field
pub const BUTTONS_ROW: usize = FIELD_COUNT;

pub const SUBMIT_BUTTON: usize = 0;
pub const CANCEL_BUTTON: usize = 1;

/// Local validation failures. These never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Passwords do not match!")]
    PasswordMismatch,
    #[error("Please fill in {label}.")]
    MissingField { index: usize, label: String },
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Enum representing all possible form states.
///
/// Replacing the variant drops the form together with any pending redirect.
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    IndustryRegister(IndustryRegisterForm),
}

impl FormState {
    pub fn industry_register(&self) -> Option<&IndustryRegisterForm> {
        match self {
            FormState::IndustryRegister(f) => Some(f),
            FormState::None => None,
        }
    }

    pub fn industry_register_mut(&mut self) -> Option<&mut IndustryRegisterForm> {
        match self {
            FormState::IndustryRegister(f) => Some(f),
            FormState::None => None,
        }
    }
}

/// One-shot navigation scheduled after a successful registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRedirect {
    deadline: Instant,
}

impl PendingRedirect {
    pub fn new(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

// Industry Register Form
#[derive(Debug, Clone)]
pub struct IndustryRegisterForm {
    fields: Vec<FormField>,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Submit, 1=Cancel)
    pub selected_button: usize,
    pub error: Option<String>,
    pub loading: bool,
    pub success_message: Option<String>,
    pending_redirect: Option<PendingRedirect>,
}

impl IndustryRegisterForm {
    pub fn new() -> Self {
        Self {
            fields: FIELD_SCHEMA.iter().map(FormField::from_spec).collect(),
            active_field_index: 0,
            selected_button: SUBMIT_BUTTON,
            error: None,
            loading: false,
            success_message: None,
            pending_redirect: None,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FormField> {
        schema::index_of(key).map(|i| &self.fields[i])
    }

    /// Stored value for a key, empty for unknown keys
    pub fn value(&self, key: &str) -> &str {
        self.field(key).map(FormField::as_text).unwrap_or("")
    }

    /// Replace one field's value, leaving every other field untouched.
    ///
    /// Returns false for keys outside the schema. Editing clears a
    /// previously shown error.
    pub fn update_field(&mut self, key: &str, value: String) -> bool {
        let Some(index) = schema::index_of(key) else {
            return false;
        };
        self.fields[index].set_text(value);
        self.error = None;
        true
    }

    fn active_key(&self) -> Option<&'static str> {
        self.fields.get(self.active_field_index).map(|f| f.name)
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(key) = self.active_key() {
            let mut value = self.value(key).to_string();
            value.push(c);
            self.update_field(key, value);
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(key) = self.active_key() {
            let mut value = self.value(key).to_string();
            if value.pop().is_some() {
                self.update_field(key, value);
            }
        }
    }

    /// Flip obscured/plain rendering of a password field
    pub fn toggle_visibility(&mut self, key: &str) {
        if let Some(index) = schema::index_of(key) {
            self.fields[index].toggle_visibility();
        }
    }

    /// Flip visibility of the focused field when it is a password field
    pub fn toggle_active_visibility(&mut self) -> bool {
        match self.fields.get_mut(self.active_field_index) {
            Some(field) if field.is_password() => {
                field.toggle_visibility();
                true
            }
            _ => false,
        }
    }

    pub fn is_password_visible(&self, key: &str) -> bool {
        self.field(key)
            .is_some_and(|f| f.is_password() && !f.is_obscured())
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        self.next_button();
    }

    /// Check that every field has a value.
    ///
    /// On failure the first empty field is focused and the error shown.
    pub fn check_required(&mut self) -> Result<(), ValidationError> {
        let Some((index, field)) = self.fields.iter().enumerate().find(|(_, f)| f.is_empty())
        else {
            return Ok(());
        };
        let err = ValidationError::MissingField {
            index,
            label: field.label.clone(),
        };
        self.active_field_index = index;
        self.error = Some(err.to_string());
        Err(err)
    }

    /// Validate and enter the loading state.
    ///
    /// Returns the outbound payload when the passwords match. On mismatch
    /// the error is set and loading is not entered.
    pub fn begin_submit(&mut self) -> Result<IndustryRegistration, ValidationError> {
        if self.value(PASSWORD_KEY) != self.value(CONFIRM_PASSWORD_KEY) {
            let err = ValidationError::PasswordMismatch;
            self.error = Some(err.to_string());
            return Err(err);
        }
        self.loading = true;
        self.error = None;
        Ok(self.payload())
    }

    /// Record the outcome of the request and leave the loading state
    pub fn complete_submit(
        &mut self,
        outcome: &Result<(), SubmitError>,
        now: Instant,
        redirect_delay: Duration,
    ) {
        match outcome {
            Ok(()) => {
                self.success_message = Some(SUBMIT_SUCCESS_MESSAGE.to_string());
                self.error = None;
                // A later success never postpones an already scheduled redirect
                if self.pending_redirect.is_none() {
                    self.pending_redirect = Some(PendingRedirect::new(now, redirect_delay));
                }
            }
            Err(_) => {
                self.error = Some(SUBMIT_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    pub fn pending_redirect(&self) -> Option<PendingRedirect> {
        self.pending_redirect
    }

    /// Consume the pending redirect once its deadline has passed
    pub fn take_due_redirect(&mut self, now: Instant) -> bool {
        match self.pending_redirect {
            Some(redirect) if redirect.is_due(now) => {
                self.pending_redirect = None;
                true
            }
            _ => false,
        }
    }

    /// Build the outbound payload, dropping the confirmation field
    pub fn payload(&self) -> IndustryRegistration {
        let value = |key: &str| self.value(key).to_string();
        IndustryRegistration {
            organization_name: value("organization_name"),
            registration_number: value("registration_number"),
            owner_name: value("owner_name"),
            email_address: value("email_address"),
            phone_number: value("phone_number"),
            license_number: value("license_number"),
            year_established: value("year_established"),
            address: value("address"),
            city: value("city"),
            state: value("state"),
            pincode: value("pincode"),
            password: value(PASSWORD_KEY),
        }
    }
}

impl Default for IndustryRegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for IndustryRegisterForm {
    fn field_count(&self) -> usize {
        FIELD_COUNT + 1 // fields + buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
