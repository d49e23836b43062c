use std::{collections::BTreeMap, fmt};

use crate::{
    auth::{RegisterRequest, ResetPasswordRequest}, contact::ContactMessage, timetable::{DAYS, NewTimetableEntry}
};

/// High-level validation errors reported before any request is sent.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Required,
    PasswordMismatch,
    UnknownDay(String),
    InvalidFormat(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "This field is required"),
            ValidationError::PasswordMismatch => write!(f, "❌ Passwords do not match!"),
            ValidationError::UnknownDay(day) => write!(f, "Unknown day: {}", day),
            ValidationError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
        }
    }
}

/// Field name to error, ordered so the first reported error is stable.
pub type FieldErrors = BTreeMap<&'static str, ValidationError>;

/// Record `Required` for every blank field.
pub fn require(errors: &mut FieldErrors, fields: &[(&'static str, &str)]) {
    for (name, value) in fields {
        if value.trim().is_empty() {
            errors.insert(*name, ValidationError::Required);
        }
    }
}

/// Input wrapper for the password reset form.
#[derive(Debug, Clone, Default)]
pub struct PasswordResetInput<'a> {
    pub email: &'a str,
    pub new_password: &'a str,
    pub confirm_password: &'a str,
}

impl PasswordResetInput<'_> {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(
            &mut errors,
            &[("email", self.email), ("new_password", self.new_password)],
        );

        if self.new_password != self.confirm_password {
            errors.insert("confirm_password", ValidationError::PasswordMismatch);
        }

        errors
    }

    /// Validated request, or the field errors.
    pub fn into_request(self) -> Result<ResetPasswordRequest, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ResetPasswordRequest {
            email: self.email.trim().to_string(),
            new_password: self.new_password.to_string(),
        })
    }
}

impl RegisterRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(
            &mut errors,
            &[("name", self.name.as_str()), ("email", self.email.as_str()), ("password", self.password.as_str())],
        );
        errors
    }
}

impl ContactMessage {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(
            &mut errors,
            &[
                ("name", self.name.as_str()),
                ("email", self.email.as_str()),
                ("contact", self.contact.as_str()),
                ("message", self.message.as_str()),
            ],
        );
        errors
    }
}

impl NewTimetableEntry {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(
            &mut errors,
            &[
                ("day", self.day.as_str()),
                ("time", self.time.as_str()),
                ("subject", self.subject.as_str()),
                ("teacher", self.teacher.as_str()),
            ],
        );

        if !self.day.is_empty() && !DAYS.contains(&self.day.as_str()) {
            errors.insert("day", ValidationError::UnknownDay(self.day.clone()));
        }

        errors
    }
}

/// Message shown for a failed form: the first error, prefixed by its field
/// unless the error already reads as a sentence.
pub fn summarize(errors: &FieldErrors) -> Option<String> {
    let (field, error) = errors.iter().next()?;
    Some(match error {
        ValidationError::PasswordMismatch => error.to_string(),
        _ => format!("❌ {}: {}", field.replace('_', " "), error),
    })
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
