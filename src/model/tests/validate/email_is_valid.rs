//! Tests for the email shape check.

use crate::model::validate::email_is_valid;

/// Tests that ordinary addresses are accepted.
#[test]
fn accepts_plain_addresses() {
    assert!(email_is_valid("user@example.com"));
    assert!(email_is_valid("first.last@mail.co.in"));
    assert!(email_is_valid("u+tag@sub.example.org"));
}

/// Tests that an address without an `@` is rejected.
///
/// Expected: "not-an-email" fails, so no login or register request is
/// ever issued for it
#[test]
fn rejects_missing_at_sign() {
    assert!(!email_is_valid("not-an-email"));
}

/// Tests that the domain must contain a dot away from its edges.
#[test]
fn rejects_undotted_or_edge_dotted_domains() {
    assert!(!email_is_valid("user@example"));
    assert!(!email_is_valid("user@.example.com"));
    assert!(!email_is_valid("user@example.com."));
}

/// Tests that the local part must be present.
#[test]
fn rejects_empty_local_part() {
    assert!(!email_is_valid("@example.com"));
}

/// Tests that whitespace and repeated `@` signs are rejected.
#[test]
fn rejects_whitespace_and_double_at() {
    assert!(!email_is_valid("us er@example.com"));
    assert!(!email_is_valid("user@exa mple.com"));
    assert!(!email_is_valid("user@@example.com"));
    assert!(!email_is_valid("user@foo@example.com"));
}

/// Tests that the empty string is rejected.
#[test]
fn rejects_empty_string() {
    assert!(!email_is_valid(""));
}
