//! Form field value objects

use super::schema::{FieldKind, FieldSpec};

/// Mask character shown for each obscured password character
pub const MASK_CHAR: char = '•';

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: String,
    pub kind: FieldKind,
    value: String,
    /// Only meaningful for password fields; text fields are never obscured
    obscured: bool,
}

impl FormField {
    /// Create an empty field from its schema descriptor
    pub fn from_spec(spec: &FieldSpec) -> Self {
        Self {
            name: spec.key,
            label: spec.label(),
            kind: spec.kind,
            value: String::new(),
            obscured: spec.kind == FieldKind::Password,
        }
    }

    /// Get the stored value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the stored value
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_password(&self) -> bool {
        self.kind == FieldKind::Password
    }

    pub fn is_obscured(&self) -> bool {
        self.obscured
    }

    /// Flip between obscured and plain rendering. No-op for text fields.
    pub fn toggle_visibility(&mut self) {
        if self.is_password() {
            self.obscured = !self.obscured;
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.obscured {
            std::iter::repeat(MASK_CHAR)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }
}
