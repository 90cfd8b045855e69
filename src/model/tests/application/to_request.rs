//! Tests for the submission payload.

use super::complete_draft;

/// Tests that the payload carries the job id and the trimmed fields.
#[test]
fn builds_payload_for_job() {
    let mut draft = complete_draft();
    draft.name = " Asha Rao ".to_string();

    let request = draft.to_request(42);

    assert_eq!(request.job_id, 42);
    assert_eq!(request.name, "Asha Rao");
    assert_eq!(request.user_email, "asha@example.com");
    assert_eq!(request.resume_file_name, "asha-rao.pdf");
}

/// Tests the camelCase wire encoding the API expects.
#[test]
fn serializes_camel_case_keys() {
    let body = serde_json::to_value(complete_draft().to_request(7)).unwrap();

    assert_eq!(body["jobId"], 7);
    assert_eq!(body["userEmail"], "asha@example.com");
    assert!(body.get("coverLetter").is_some());
    assert!(body.get("resumeFileName").is_some());
    assert!(body.get("cover_letter").is_none());
}
