//! Tests for registration draft validation and its wire shape.

use crate::model::auth::{RegistrationDraft, Role};

fn draft() -> RegistrationDraft {
    RegistrationDraft {
        name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        password: "secret123".to_string(),
        role: Role::JobSeeker,
    }
}

/// Tests that a complete draft validates cleanly.
#[test]
fn accepts_complete_draft() {
    assert!(draft().validate().is_empty());
}

/// Tests the name checks: presence and minimum length.
#[test]
fn validates_name() {
    let mut missing = draft();
    missing.name = "  ".to_string();
    assert_eq!(
        missing.validate().name,
        Some("Name is required".to_string())
    );

    let mut short = draft();
    short.name = "A".to_string();
    assert_eq!(
        short.validate().name,
        Some("Name must be at least 2 characters".to_string())
    );
}

/// Tests that a malformed email is reported.
///
/// Expected: "not-an-email" blocks registration locally
#[test]
fn validates_email() {
    let mut bad = draft();
    bad.email = "not-an-email".to_string();

    assert_eq!(
        bad.validate().email,
        Some("Please enter a valid email".to_string())
    );
}

/// Tests the password checks: presence and minimum length.
#[test]
fn validates_password() {
    let mut missing = draft();
    missing.password = String::new();
    assert_eq!(
        missing.validate().password,
        Some("Password is required".to_string())
    );

    let mut short = draft();
    short.password = "abc".to_string();
    assert_eq!(
        short.validate().password,
        Some("Password must be at least 6 characters".to_string())
    );
}

/// Tests that several broken fields are all reported at once.
#[test]
fn reports_all_broken_fields() {
    let empty = RegistrationDraft::default();
    let errors = empty.validate();

    assert!(errors.name.is_some());
    assert!(errors.email.is_some());
    assert!(errors.password.is_some());
}

/// Tests the request body encoding, including the unified role strings.
#[test]
fn serializes_with_wire_role() {
    let mut employer = draft();
    employer.role = Role::Employer;

    let body = serde_json::to_value(&employer).unwrap();

    assert_eq!(body["role"], "EMPLOYER");
    assert_eq!(body["name"], "Asha Rao");
    assert_eq!(body["email"], "asha@example.com");
    assert_eq!(body["password"], "secret123");
}
