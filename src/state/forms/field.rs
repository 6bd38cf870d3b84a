//! Form field value objects and validation

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Validation failure for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required field was left empty (or whitespace-only)
    #[error("This field is required")]
    Required,
    /// An email field holds a value that is not `local@domain.tld`
    #[error("Please enter a valid email address")]
    Format,
}

/// What kind of input a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
}

/// Validation state of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Unvalidated,
    Valid,
    Invalid,
}

/// One or more non-whitespace/non-@ chars, "@", same, ".", same
fn email_pattern() -> &'static Regex {
    static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Represents a single form field with its configuration, value, and
/// validation state
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub is_multiline: bool,
    pub value: String,
    pub validity: Validity,
    pub error: Option<FieldError>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, required: bool, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text,
            required,
            is_multiline,
            value: String::new(),
            validity: Validity::Unvalidated,
            error: None,
        }
    }

    /// Create a new email field
    pub fn email(name: &str, label: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Email,
            required,
            is_multiline: false,
            value: String::new(),
            validity: Validity::Unvalidated,
            error: None,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Validate the field against its rules.
    ///
    /// The value is trimmed before checking. A failure is stored on the
    /// field for inline display; it stays there until the next input edit
    /// clears it via [`FormField::clear_error`].
    pub fn validate(&mut self) -> Result<(), FieldError> {
        self.clear_error();

        let value = self.value.trim();
        let result = if self.required && value.is_empty() {
            Err(FieldError::Required)
        } else if self.kind == FieldKind::Email
            && !value.is_empty()
            && !email_pattern().is_match(value)
        {
            Err(FieldError::Format)
        } else {
            Ok(())
        };

        match result {
            Ok(()) => self.validity = Validity::Valid,
            Err(err) => {
                self.validity = Validity::Invalid;
                self.error = Some(err);
            }
        }
        result
    }

    /// Remove any displayed error annotation. No validation is performed.
    pub fn clear_error(&mut self) {
        self.error = None;
        self.validity = Validity::Unvalidated;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_value(field: &mut FormField, value: &str) {
        for c in value.chars() {
            field.push_char(c);
        }
    }

    mod constructors {
        use super::*;

        #[test]
        fn test_text_field_defaults() {
            let field = FormField::text("name", "Name", true, false);
            assert_eq!(field.name, "name");
            assert_eq!(field.label, "Name");
            assert_eq!(field.kind, FieldKind::Text);
            assert!(field.required);
            assert!(!field.is_multiline);
            assert_eq!(field.value, "");
            assert_eq!(field.validity, Validity::Unvalidated);
            assert!(field.error.is_none());
        }

        #[test]
        fn test_email_field_is_single_line() {
            let field = FormField::email("email", "Email", true);
            assert_eq!(field.kind, FieldKind::Email);
            assert!(!field.is_multiline);
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn test_push_and_pop_chars() {
            let mut field = FormField::text("name", "Name", false, false);
            set_value(&mut field, "abc");
            assert_eq!(field.value, "abc");
            field.pop_char();
            assert_eq!(field.value, "ab");
        }

        #[test]
        fn test_pop_on_empty_is_noop() {
            let mut field = FormField::text("name", "Name", false, false);
            field.pop_char();
            assert_eq!(field.value, "");
        }

        #[test]
        fn test_clear_empties_value() {
            let mut field = FormField::text("name", "Name", false, false);
            set_value(&mut field, "abc");
            field.clear();
            assert_eq!(field.value, "");
        }
    }

    mod required_validation {
        use super::*;

        #[test]
        fn test_empty_required_field_fails() {
            let mut field = FormField::text("name", "Name", true, false);
            assert_eq!(field.validate(), Err(FieldError::Required));
            assert_eq!(field.validity, Validity::Invalid);
            assert_eq!(field.error, Some(FieldError::Required));
        }

        #[test]
        fn test_whitespace_only_required_field_fails() {
            let mut field = FormField::text("name", "Name", true, false);
            set_value(&mut field, "   \t ");
            assert_eq!(field.validate(), Err(FieldError::Required));
        }

        #[test]
        fn test_empty_required_email_is_required_not_format() {
            let mut field = FormField::email("email", "Email", true);
            assert_eq!(field.validate(), Err(FieldError::Required));
        }

        #[test]
        fn test_empty_optional_field_is_valid() {
            let mut field = FormField::text("subject", "Subject", false, false);
            assert_eq!(field.validate(), Ok(()));
            assert_eq!(field.validity, Validity::Valid);
        }

        #[test]
        fn test_filled_required_field_is_valid() {
            let mut field = FormField::text("name", "Name", true, false);
            set_value(&mut field, "Ada");
            assert_eq!(field.validate(), Ok(()));
        }
    }

    mod email_validation {
        use super::*;

        #[test]
        fn test_simple_address_is_valid() {
            let mut field = FormField::email("email", "Email", true);
            set_value(&mut field, "a@b.co");
            assert_eq!(field.validate(), Ok(()));
        }

        #[test]
        fn test_missing_at_fails() {
            let mut field = FormField::email("email", "Email", true);
            set_value(&mut field, "a.b.co");
            assert_eq!(field.validate(), Err(FieldError::Format));
        }

        #[test]
        fn test_missing_dot_fails() {
            let mut field = FormField::email("email", "Email", true);
            set_value(&mut field, "a@b");
            assert_eq!(field.validate(), Err(FieldError::Format));
        }

        #[test]
        fn test_whitespace_in_address_fails() {
            let mut field = FormField::email("email", "Email", true);
            set_value(&mut field, "a b@c.co");
            assert_eq!(field.validate(), Err(FieldError::Format));
        }

        #[test]
        fn test_surrounding_whitespace_is_trimmed() {
            let mut field = FormField::email("email", "Email", true);
            set_value(&mut field, "  a@b.co  ");
            assert_eq!(field.validate(), Ok(()));
        }

        #[test]
        fn test_empty_optional_email_skips_format_check() {
            let mut field = FormField::email("email", "Email", false);
            assert_eq!(field.validate(), Ok(()));
        }
    }

    mod error_display {
        use super::*;

        #[test]
        fn test_error_messages() {
            assert_eq!(FieldError::Required.to_string(), "This field is required");
            assert_eq!(
                FieldError::Format.to_string(),
                "Please enter a valid email address"
            );
        }

        #[test]
        fn test_clear_error_resets_annotation() {
            let mut field = FormField::text("name", "Name", true, false);
            let _ = field.validate();
            assert!(field.error.is_some());

            field.clear_error();

            assert!(field.error.is_none());
            assert_eq!(field.validity, Validity::Unvalidated);
        }

        #[test]
        fn test_error_persists_until_cleared() {
            let mut field = FormField::email("email", "Email", true);
            set_value(&mut field, "not-an-email");
            let _ = field.validate();
            assert_eq!(field.error, Some(FieldError::Format));

            // Editing alone does not clear the annotation; the input
            // handler does that explicitly.
            field.push_char('x');
            assert_eq!(field.error, Some(FieldError::Format));
        }

        #[test]
        fn test_revalidation_replaces_error() {
            let mut field = FormField::email("email", "Email", true);
            let _ = field.validate();
            assert_eq!(field.error, Some(FieldError::Required));

            set_value(&mut field, "a@b");
            let _ = field.validate();
            assert_eq!(field.error, Some(FieldError::Format));
        }
    }
}
