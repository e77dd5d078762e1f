// forms/mod.rs - Structural validation of submitted HTML forms
//
// Every form struct deserializes with all fields optional so that axum's Form
// extractor never rejects a submission; `validate` then turns the raw strings
// into typed values or a set of per-field messages.

use std::collections::BTreeMap;

pub mod cat;
pub mod feeding;
pub mod login;
pub mod signup;
pub mod toy;

pub use cat::{CatCreateForm, CatUpdateForm};
pub use feeding::FeedingForm;
pub use login::LoginForm;
pub use signup::SignupForm;
pub use toy::ToyForm;

pub const REQUIRED: &str = "This field is required.";

/// Per-field validation messages, keyed by form field name
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Ok(value) when no messages were recorded
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Trimmed, non-empty text no longer than `max_chars`
pub(crate) fn required_text(
    errors: &mut FormErrors,
    field: &'static str,
    value: Option<&str>,
    max_chars: usize,
) -> String {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        errors.add(field, REQUIRED);
        return String::new();
    }
    let length = value.chars().count();
    if length > max_chars {
        errors.add(
            field,
            format!("Ensure this value has at most {max_chars} characters (it has {length})."),
        );
    }
    value.to_string()
}

/// Whole number that fits the column type
pub(crate) fn required_integer(errors: &mut FormErrors, field: &'static str, value: Option<&str>) -> i32 {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        errors.add(field, REQUIRED);
        return 0;
    }
    match value.parse::<i32>() {
        Ok(n) => n,
        Err(_) => {
            errors.add(field, "Enter a whole number.");
            0
        }
    }
}
