//! The application wizard's state machine and draft validation.
//!
//! The wizard is a linear three-step form. Transitions only move one step
//! at a time and clamp at both ends; advancing is gated by the active
//! step's validator, and the final submit re-validates the whole draft.

use serde::Serialize;

use crate::model::validate::email_is_valid;

/// The wizard's states, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyStep {
    Identity,
    CoverLetter,
    Resume,
}

impl ApplyStep {
    pub const ALL: [ApplyStep; 3] = [Self::Identity, Self::CoverLetter, Self::Resume];

    /// The following step, or `None` on the last one.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Identity => Some(Self::CoverLetter),
            Self::CoverLetter => Some(Self::Resume),
            Self::Resume => None,
        }
    }

    /// The preceding step, or `None` on the first one.
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Identity => None,
            Self::CoverLetter => Some(Self::Identity),
            Self::Resume => Some(Self::CoverLetter),
        }
    }

    /// One-based position for the step indicator.
    pub fn number(self) -> usize {
        match self {
            Self::Identity => 1,
            Self::CoverLetter => 2,
            Self::Resume => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Identity => "Personal Info",
            Self::CoverLetter => "Cover Letter",
            Self::Resume => "Resume",
        }
    }

    pub fn is_last(self) -> bool {
        matches!(self, Self::Resume)
    }
}

/// The wizard's transient form state, discarded after submit or
/// navigation away.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApplicationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    /// Name of the selected resume file; `None` until one is picked.
    pub resume_file_name: Option<String>,
}

/// Field-level wizard errors, shown inline under each input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cover_letter: Option<String>,
    pub resume: Option<String>,
    /// Network failure message for the final submit.
    pub submit: Option<String>,
}

impl DraftErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.cover_letter.is_none()
            && self.resume.is_none()
            && self.submit.is_none()
    }
}

impl ApplicationDraft {
    /// Per-state validator: checks only the fields the given step owns.
    /// `Next` advances the wizard exactly when this returns no errors.
    pub fn validate_step(&self, step: ApplyStep) -> DraftErrors {
        let mut errors = DraftErrors::default();

        match step {
            ApplyStep::Identity => {
                if self.name.trim().is_empty() {
                    errors.name = Some("Name is required".to_string());
                }
                let email = self.email.trim();
                if email.is_empty() {
                    errors.email = Some("Email is required".to_string());
                } else if !email_is_valid(email) {
                    errors.email = Some("Invalid email format".to_string());
                }
                if self.phone.trim().is_empty() {
                    errors.phone = Some("Phone number is required".to_string());
                }
            }
            ApplyStep::CoverLetter => {
                if self.cover_letter.trim().is_empty() {
                    errors.cover_letter = Some("Cover letter is required".to_string());
                }
            }
            ApplyStep::Resume => {
                if self.resume_file_name.as_deref().is_none_or(str::is_empty) {
                    errors.resume = Some("Resume is required".to_string());
                }
            }
        }

        errors
    }

    /// Validates the whole draft for the final submit.
    pub fn validate(&self) -> DraftErrors {
        let mut errors = self.validate_step(ApplyStep::Identity);
        errors.cover_letter = self.validate_step(ApplyStep::CoverLetter).cover_letter;
        errors.resume = self.validate_step(ApplyStep::Resume).resume;
        errors
    }

    /// Builds the submission payload for a job.
    pub fn to_request(&self, job_id: i64) -> ApplicationRequest {
        ApplicationRequest {
            job_id,
            user_email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            cover_letter: self.cover_letter.trim().to_string(),
            resume_file_name: self.resume_file_name.clone().unwrap_or_default(),
        }
    }
}

/// Body of the apply request. The resume travels by file name only;
/// submissions are fire-and-forget and carry no binary payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub job_id: i64,
    pub user_email: String,
    pub name: String,
    pub phone: String,
    pub cover_letter: String,
    pub resume_file_name: String,
}
