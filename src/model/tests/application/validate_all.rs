//! Tests for whole-draft validation at submit time.

use crate::model::application::ApplicationDraft;

use super::complete_draft;

/// Tests that a complete draft passes the final validation.
#[test]
fn complete_draft_passes() {
    assert!(complete_draft().validate().is_empty());
}

/// Tests that the final validation unions every step's errors.
#[test]
fn reports_errors_across_steps() {
    let errors = ApplicationDraft::default().validate();

    assert!(errors.name.is_some());
    assert!(errors.email.is_some());
    assert!(errors.phone.is_some());
    assert!(errors.cover_letter.is_some());
    assert!(errors.resume.is_some());
}

/// Tests that one broken field elsewhere does not mask a broken field in
/// another step.
#[test]
fn mixes_errors_from_different_steps() {
    let mut draft = complete_draft();
    draft.phone = String::new();
    draft.resume_file_name = None;

    let errors = draft.validate();

    assert!(errors.phone.is_some());
    assert!(errors.resume.is_some());
    assert!(errors.name.is_none());
    assert!(errors.cover_letter.is_none());
}
