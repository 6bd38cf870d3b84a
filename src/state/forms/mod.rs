//! Contact form state management
//!
//! The form owns its fields and submission status; validation rules live
//! on the fields themselves.

mod field;
mod form_state;

pub use field::*;
pub use form_state::*;
