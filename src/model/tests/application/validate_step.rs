//! Tests for the per-state validators gating the Next button.

use crate::model::application::{ApplicationDraft, ApplyStep};

use super::complete_draft;

/// Tests that the identity step requires name, email, and phone.
#[test]
fn identity_requires_its_fields() {
    let errors = ApplicationDraft::default().validate_step(ApplyStep::Identity);

    assert_eq!(errors.name, Some("Name is required".to_string()));
    assert_eq!(errors.email, Some("Email is required".to_string()));
    assert_eq!(errors.phone, Some("Phone number is required".to_string()));
}

/// Tests that a present but malformed email gets the format message.
#[test]
fn identity_rejects_malformed_email() {
    let mut draft = complete_draft();
    draft.email = "not-an-email".to_string();

    let errors = draft.validate_step(ApplyStep::Identity);

    assert_eq!(errors.email, Some("Invalid email format".to_string()));
}

/// Tests that each validator only checks the fields its step owns.
///
/// Expected: an empty draft passes nothing on Identity but the cover
/// letter step reports only the cover letter
#[test]
fn validators_stay_within_their_step() {
    let errors = ApplicationDraft::default().validate_step(ApplyStep::CoverLetter);

    assert!(errors.name.is_none());
    assert!(errors.email.is_none());
    assert!(errors.phone.is_none());
    assert!(errors.resume.is_none());
    assert_eq!(
        errors.cover_letter,
        Some("Cover letter is required".to_string())
    );
}

/// Tests that the resume step treats a missing or empty file name the
/// same way.
#[test]
fn resume_requires_a_file() {
    let mut draft = complete_draft();

    draft.resume_file_name = None;
    assert_eq!(
        draft.validate_step(ApplyStep::Resume).resume,
        Some("Resume is required".to_string())
    );

    draft.resume_file_name = Some(String::new());
    assert_eq!(
        draft.validate_step(ApplyStep::Resume).resume,
        Some("Resume is required".to_string())
    );
}

/// Tests that a valid step reports no errors.
#[test]
fn complete_step_passes() {
    for step in ApplyStep::ALL {
        assert!(complete_draft().validate_step(step).is_empty());
    }
}
