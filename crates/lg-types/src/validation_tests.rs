//! Unit tests for form validation.

use super::*;

#[test]
fn test_password_reset_mismatch() {
    let input = PasswordResetInput {
        email: "ada@x.io",
        new_password: "hunter2",
        confirm_password: "hunter3",
    };
    let errors = input.validate();
    assert_eq!(errors.get("confirm_password"), Some(&ValidationError::PasswordMismatch));
    assert_eq!(summarize(&errors).as_deref(), Some("❌ Passwords do not match!"));
    assert!(input.into_request().is_err());
}

#[test]
fn test_password_reset_ok() {
    let request = PasswordResetInput {
        email: " ada@x.io ",
        new_password: "hunter2",
        confirm_password: "hunter2",
    }
    .into_request()
    .unwrap();
    assert_eq!(request.email, "ada@x.io");
    assert_eq!(request.new_password, "hunter2");
}

#[test]
fn test_password_reset_blank_fields() {
    let errors = PasswordResetInput::default().validate();
    assert_eq!(errors.get("email"), Some(&ValidationError::Required));
    assert_eq!(errors.get("new_password"), Some(&ValidationError::Required));
    // Both blank means they match.
    assert!(!errors.contains_key("confirm_password"));
}

#[test]
fn test_register_required_fields() {
    let request = RegisterRequest {
        name: "  ".into(),
        email: "ada@x.io".into(),
        password: String::new(),
    };
    let errors = request.validate();
    assert_eq!(errors.len(), 2);
    assert_eq!(summarize(&errors).as_deref(), Some("❌ name: This field is required"));
}

#[test]
fn test_contact_required_fields() {
    let errors = ContactMessage::default().validate();
    assert_eq!(errors.len(), 4);
}

#[test]
fn test_timetable_day_must_be_known() {
    let mut entry = NewTimetableEntry {
        day: "Funday".into(),
        time: "9:00-10:00".into(),
        subject: "Maths".into(),
        teacher: "Noether".into(),
    };
    assert_eq!(entry.validate().get("day"), Some(&ValidationError::UnknownDay("Funday".into())));

    entry.day = "Sunday".into();
    assert!(entry.validate().is_empty());
}
