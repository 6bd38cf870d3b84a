//! Contact form state and submit lifecycle

use super::field::FormField;
use std::collections::HashMap;

/// Submission lifecycle of the contact form.
///
/// Transitions only via explicit submit attempts: a valid submit moves
/// `Idle`/`Succeeded`/`Failed` to `Submitting`; the gateway outcome moves
/// `Submitting` to `Succeeded` or `Failed`. An invalid submit leaves the
/// status untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Index of the buttons row in the focus cycle (after the four fields)
const BUTTONS_ROW_INDEX: usize = 4;

/// The contact form: ordered fields plus submission status
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Clear, 1=Send)
    pub selected_button: usize,
    pub status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", true, false),
            email: FormField::email("email", "Email", true),
            subject: FormField::text("subject", "Subject", false, false),
            message: FormField::text("message", "Message", true, true),
            active_field_index: 0,
            selected_button: 1, // Default to "Send" button
            status: SubmitStatus::Idle,
        }
    }

    pub fn field_count(&self) -> usize {
        5 // name, email, subject, message, buttons
    }

    pub fn active_field(&self) -> usize {
        self.active_field_index
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW_INDEX);
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW_INDEX
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        // Two buttons, so previous and next coincide
        self.next_button();
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.subject),
            3 => Some(&self.message),
            // Index 4 is the buttons row, no FormField for it
            _ => None,
        }
    }

    pub fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.subject),
            3 => Some(&mut self.message),
            _ => None,
        }
    }

    /// The field that currently has focus, if focus is not on the buttons row
    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.get_field_mut(self.active_field_index)
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    /// Validate every field. Short-circuiting is deliberately avoided so
    /// each invalid field ends up annotated at once.
    pub fn validate_all(&mut self) -> bool {
        let mut is_valid = true;
        for index in 0..BUTTONS_ROW_INDEX {
            if let Some(field) = self.get_field_mut(index) {
                if field.validate().is_err() {
                    is_valid = false;
                }
            }
        }
        is_valid
    }

    /// Collect field name -> value for the submission call. Values are
    /// sent as typed; trimming happens only inside validation.
    pub fn values(&self) -> HashMap<String, String> {
        let mut values = HashMap::new();
        for index in 0..BUTTONS_ROW_INDEX {
            if let Some(field) = self.get_field(index) {
                values.insert(field.name.clone(), field.value.clone());
            }
        }
        values
    }

    /// Reset every field value and annotation (successful send, or the
    /// Clear button)
    pub fn clear_values(&mut self) {
        for index in 0..BUTTONS_ROW_INDEX {
            if let Some(field) = self.get_field_mut(index) {
                field.clear();
                field.clear_error();
            }
        }
    }

    /// The submit affordance is disabled exactly while a send is in flight
    pub fn is_send_enabled(&self) -> bool {
        self.status != SubmitStatus::Submitting
    }

    /// Label for the Send button; swapped while a send is in flight and
    /// restored with the status on every terminal transition
    pub fn send_label(&self) -> &'static str {
        if self.status == SubmitStatus::Submitting {
            "Sending..."
        } else {
            "Send"
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
