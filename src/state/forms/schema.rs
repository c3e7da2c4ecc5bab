//! Static field schema for the industry registration form

/// How a field is entered and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain text input, rendered generically
    Text,
    /// Obscurable input with its own visibility toggle
    Password,
}

/// Descriptor for one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub kind: FieldKind,
    /// Label used instead of the one derived from the key
    fixed_label: Option<&'static str>,
}

impl FieldSpec {
    const fn text(key: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::Text,
            fixed_label: None,
        }
    }

    const fn password(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::Password,
            fixed_label: Some(label),
        }
    }

    /// Display label: fixed for password fields, derived from the key otherwise
    pub fn label(&self) -> String {
        match self.fixed_label {
            Some(label) => label.to_string(),
            None => label_for_key(self.key),
        }
    }
}

pub const PASSWORD_KEY: &str = "password";
pub const CONFIRM_PASSWORD_KEY: &str = "confirmPassword";

/// All registration fields in display order
pub const FIELD_SCHEMA: [FieldSpec; 13] = [
    FieldSpec::text("organization_name"),
    FieldSpec::text("registration_number"),
    FieldSpec::text("owner_name"),
    FieldSpec::text("email_address"),
    FieldSpec::text("phone_number"),
    FieldSpec::text("license_number"),
    FieldSpec::text("year_established"),
    FieldSpec::text("address"),
    FieldSpec::text("city"),
    FieldSpec::text("state"),
    FieldSpec::text("pincode"),
    FieldSpec::password(PASSWORD_KEY, "Password"),
    FieldSpec::password(CONFIRM_PASSWORD_KEY, "Confirm Password"),
];

/// Number of fields in the schema
pub const FIELD_COUNT: usize = FIELD_SCHEMA.len();

/// Fields rendered as generic text inputs
pub fn text_fields() -> impl Iterator<Item = (usize, &'static FieldSpec)> {
    FIELD_SCHEMA
        .iter()
        .enumerate()
        .filter(|(_, spec)| spec.kind == FieldKind::Text)
}

/// Fields rendered with a visibility toggle
pub fn password_fields() -> impl Iterator<Item = (usize, &'static FieldSpec)> {
    FIELD_SCHEMA
        .iter()
        .enumerate()
        .filter(|(_, spec)| spec.kind == FieldKind::Password)
}

/// Position of a key in the schema
pub fn index_of(key: &str) -> Option<usize> {
    FIELD_SCHEMA.iter().position(|spec| spec.key == key)
}

/// Derive a display label from a snake_case key.
///
/// Underscores become spaces and the first letter of each word is
/// upper-cased; the rest of each word is kept as-is.
pub fn label_for_key(key: &str) -> String {
    key.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    mod labels {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_year_established_label() {
            assert_eq!(label_for_key("year_established"), "Year Established");
        }

        #[test]
        fn test_single_word_label() {
            assert_eq!(label_for_key("pincode"), "Pincode");
        }

        #[test]
        fn test_multi_word_label() {
            assert_eq!(label_for_key("organization_name"), "Organization Name");
        }

        #[test]
        fn test_empty_key() {
            assert_eq!(label_for_key(""), "");
        }

        #[test]
        fn test_keeps_inner_case() {
            assert_eq!(label_for_key("confirmPassword"), "ConfirmPassword");
        }

        #[test]
        fn test_schema_labels_in_display_order() {
            let labels: Vec<String> = FIELD_SCHEMA.iter().map(FieldSpec::label).collect();
            assert_eq!(
                labels,
                vec![
                    "Organization Name",
                    "Registration Number",
                    "Owner Name",
                    "Email Address",
                    "Phone Number",
                    "License Number",
                    "Year Established",
                    "Address",
                    "City",
                    "State",
                    "Pincode",
                    "Password",
                    "Confirm Password",
                ]
            );
        }
    }

    mod schema {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_schema_has_thirteen_fields() {
            assert_eq!(FIELD_COUNT, 13);
        }

        #[test]
        fn test_text_fields_exclude_passwords() {
            let keys: Vec<_> = text_fields().map(|(_, spec)| spec.key).collect();
            assert_eq!(keys.len(), 11);
            assert!(!keys.contains(&PASSWORD_KEY));
            assert!(!keys.contains(&CONFIRM_PASSWORD_KEY));
        }

        #[test]
        fn test_password_fields_are_last_two() {
            let indices: Vec<_> = password_fields().map(|(i, _)| i).collect();
            assert_eq!(indices, vec![11, 12]);
        }

        #[test]
        fn test_index_of() {
            assert_eq!(index_of("organization_name"), Some(0));
            assert_eq!(index_of("pincode"), Some(10));
            assert_eq!(index_of(CONFIRM_PASSWORD_KEY), Some(12));
            assert_eq!(index_of("unknown"), None);
        }

        #[test]
        fn test_keys_are_unique() {
            for (i, spec) in FIELD_SCHEMA.iter().enumerate() {
                assert_eq!(index_of(spec.key), Some(i));
            }
        }
    }
}
