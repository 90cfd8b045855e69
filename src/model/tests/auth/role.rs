//! Tests for the role enum: wire encoding and UI gating.

use crate::model::auth::{LoginResponseDto, Role};

/// Tests that every wire string parses to its role and round-trips.
#[test]
fn wire_strings_round_trip() {
    for role in [Role::JobSeeker, Role::Employer, Role::Admin] {
        assert_eq!(role.as_wire().parse::<Role>().unwrap(), role);
    }

    assert_eq!("USER".parse::<Role>().unwrap(), Role::JobSeeker);
    assert_eq!("EMPLOYER".parse::<Role>().unwrap(), Role::Employer);
    assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
}

/// Tests that unknown strings fail to parse instead of defaulting.
#[test]
fn unknown_strings_fail_to_parse() {
    assert!("JOB_SEEKER".parse::<Role>().is_err());
    assert!("user".parse::<Role>().is_err());
    assert!("".parse::<Role>().is_err());
}

/// Tests the role arriving through a login response body.
///
/// Expected: role "EMPLOYER" deserializes to `Role::Employer`
#[test]
fn deserializes_from_login_response() {
    let response: LoginResponseDto =
        serde_json::from_str(r#"{"token":"abc123","role":"EMPLOYER"}"#).unwrap();

    assert_eq!(response.role, Role::Employer);
    assert_eq!(response.token, "abc123");
}

/// Tests that a login response with an unknown role is an error, not a
/// silent default.
#[test]
fn rejects_unknown_role_in_login_response() {
    let result = serde_json::from_str::<LoginResponseDto>(r#"{"token":"t","role":"ROOT"}"#);

    assert!(result.is_err());
}

/// Tests the action gating per role.
///
/// Expected: employers get job creation and not application; job seekers
/// the reverse; admins neither
#[test]
fn gates_actions_by_role() {
    assert!(Role::Employer.can_post_jobs());
    assert!(!Role::Employer.can_apply());

    assert!(Role::JobSeeker.can_apply());
    assert!(!Role::JobSeeker.can_post_jobs());

    assert!(!Role::Admin.can_apply());
    assert!(!Role::Admin.can_post_jobs());
}

/// Tests the navbar initials.
#[test]
fn initials_match_roles() {
    assert_eq!(Role::JobSeeker.initial(), 'U');
    assert_eq!(Role::Employer.initial(), 'E');
    assert_eq!(Role::Admin.initial(), 'A');
}
