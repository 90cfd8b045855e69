use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::validate::{email_is_valid, MIN_PASSWORD_LEN};

/// Minimum characters for a display name at registration.
const MIN_NAME_LEN: usize = 2;

/// The role attached to a session, gating which actions the UI offers.
///
/// The wire encoding is the API's `USER`/`EMPLOYER`/`ADMIN` strings. A
/// guest (no session) is represented as the `None` arm of `Option<Role>`
/// so that gating stays a single exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    #[default]
    JobSeeker,
    Employer,
    Admin,
}

impl Role {
    /// The string the API uses for this role.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::JobSeeker => "USER",
            Self::Employer => "EMPLOYER",
            Self::Admin => "ADMIN",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::JobSeeker => "Job Seeker",
            Self::Employer => "Employer",
            Self::Admin => "Admin",
        }
    }

    /// Single-letter initial shown in the navbar avatar.
    pub fn initial(self) -> char {
        match self {
            Self::JobSeeker => 'U',
            Self::Employer => 'E',
            Self::Admin => 'A',
        }
    }

    /// Only job seekers may start an application.
    pub fn can_apply(self) -> bool {
        matches!(self, Self::JobSeeker)
    }

    /// Only employers may post new listings.
    pub fn can_post_jobs(self) -> bool {
        matches!(self, Self::Employer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// A role string that is not one of the API's known encodings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized role {0:?}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Self::JobSeeker),
            "EMPLOYER" => Ok(Self::Employer),
            "ADMIN" => Ok(Self::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = ParseRoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_wire().to_string()
    }
}

/// The client-held credential identifying the current user to gated
/// screens. Created on login, destroyed on logout; no client-side expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub email: String,
}

/// Credentials posted to the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponseDto {
    pub token: String,
    pub role: Role,
}

/// Gates the login form before any network call is made.
///
/// Returns the message to display, or `None` when the credentials are
/// well-formed enough to send.
pub fn validate_login(email: &str, password: &str) -> Option<String> {
    if email.trim().is_empty() || password.is_empty() {
        return Some("Please fill all fields".to_string());
    }

    if !email_is_valid(email.trim()) {
        return Some("Please enter a valid email address".to_string());
    }

    None
}

/// The registration form's transient state; serializes directly as the
/// register request body.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Field-level registration errors, shown inline next to each input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistrationErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Server-side or fallback failure message, shown above the form.
    pub general: Option<String>,
}

impl RegistrationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.general.is_none()
    }
}

impl RegistrationDraft {
    /// Validates every field; submission is blocked unless the result
    /// [`is_empty`](RegistrationErrors::is_empty).
    pub fn validate(&self) -> RegistrationErrors {
        let mut errors = RegistrationErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some("Name is required".to_string());
        } else if name.len() < MIN_NAME_LEN {
            errors.name = Some("Name must be at least 2 characters".to_string());
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some("Email is required".to_string());
        } else if !email_is_valid(email) {
            errors.email = Some("Please enter a valid email".to_string());
        }

        if self.password.is_empty() {
            errors.password = Some("Password is required".to_string());
        } else if self.password.len() < MIN_PASSWORD_LEN {
            errors.password = Some("Password must be at least 6 characters".to_string());
        }

        errors
    }
}
