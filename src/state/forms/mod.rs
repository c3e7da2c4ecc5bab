//! Form domain layer
//!
//! Type-safe state for the industry registration form: the static field
//! schema, per-field values, and the submission state machine.

mod field;
mod form_state;
mod schema;

pub use field::FormField;
pub use form_state::{
    Form, FormState, IndustryRegisterForm, CANCEL_BUTTON, REDIRECT_DELAY, SUBMIT_BUTTON,
};
pub use schema::{password_fields, text_fields, FIELD_COUNT};

#[cfg(test)]
pub use form_state::{BUTTONS_ROW, SUBMIT_FAILED_MESSAGE, SUBMIT_SUCCESS_MESSAGE};
#[cfg(test)]
pub use schema::{CONFIRM_PASSWORD_KEY, PASSWORD_KEY};
