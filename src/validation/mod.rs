//! # Form Validation
//!
//! Client-side schemas for every form the front end submits. A form that fails
//! validation never reaches the network.
//!
//! Each field reports only its first failing rule, and fields are checked in the
//! order the form shows them.

pub mod forms;

use thiserror::Error;

/// A single failed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field errors of one form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", join_errors(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Message reported for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn push(&mut self, field: &'static str, message: String) {
        self.errors.push(FieldError { field, message });
    }

    /// `Ok(())` when nothing failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// `field: message` pairs joined with `; `.
fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Implemented by every form payload.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Rule chain for one string field. Stops at the first failing rule.
pub(crate) struct FieldCheck<'a> {
    field: &'static str,
    value: &'a str,
    failure: Option<String>,
}

impl<'a> FieldCheck<'a> {
    pub(crate) fn new(field: &'static str, value: &'a str) -> Self {
        Self {
            field,
            value,
            failure: None,
        }
    }

    fn rule(mut self, ok: impl FnOnce(&str) -> bool, message: &str) -> Self {
        if self.failure.is_none() && !ok(self.value) {
            self.failure = Some(message.to_string());
        }
        self
    }

    pub(crate) fn required(self, message: &str) -> Self {
        self.rule(|v| !v.is_empty(), message)
    }

    pub(crate) fn min_chars(self, min: usize, message: &str) -> Self {
        self.rule(|v| v.chars().count() >= min, message)
    }

    pub(crate) fn max_chars(self, max: usize, message: &str) -> Self {
        self.rule(|v| v.chars().count() <= max, message)
    }

    pub(crate) fn matches(self, pattern: &regex::Regex, message: &str) -> Self {
        self.rule(|v| pattern.is_match(v), message)
    }

    pub(crate) fn finish(self, errors: &mut ValidationErrors) {
        if let Some(message) = self.failure {
            errors.push(self.field, message);
        }
    }
}
