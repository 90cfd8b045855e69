//! Tests for converting the creation form into a request payload.

use crate::model::job::CreateJobDraft;

fn draft() -> CreateJobDraft {
    CreateJobDraft {
        title: "Backend Engineer".to_string(),
        description: "Own the API".to_string(),
        location: "Remote".to_string(),
        salary: "72000".to_string(),
    }
}

/// Tests that a fully-populated draft converts into a single payload with
/// the salary parsed and whitespace trimmed.
#[test]
fn converts_populated_draft() {
    let mut populated = draft();
    populated.title = "  Backend Engineer ".to_string();

    let request = populated.to_request().expect("draft should convert");

    assert_eq!(request.title, "Backend Engineer");
    assert_eq!(request.salary, 72_000.0);
}

/// Tests that any blank field blocks the request.
#[test]
fn rejects_blank_fields() {
    let clears: [fn(&mut CreateJobDraft); 4] = [
        |d| d.title.clear(),
        |d| d.description.clear(),
        |d| d.location.clear(),
        |d| d.salary.clear(),
    ];

    for clear in clears {
        let mut incomplete = draft();
        clear(&mut incomplete);

        assert!(incomplete.to_request().is_err());
    }
}

/// Tests that a salary that does not parse as a number is rejected.
#[test]
fn rejects_non_numeric_salary() {
    let mut bad = draft();
    bad.salary = "a lot".to_string();

    assert_eq!(
        bad.to_request().unwrap_err(),
        "Salary must be a number".to_string()
    );
}

/// Tests that negative salaries are rejected.
#[test]
fn rejects_negative_salary() {
    let mut bad = draft();
    bad.salary = "-1".to_string();

    assert!(bad.to_request().is_err());
}
