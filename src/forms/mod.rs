//! Registration Forms
//!
//! Typed form submissions and their validation:
//!
//! - **validate**: required-field and email checks
//! - **types**: counseling, volunteer, partnership and newsletter forms
//!
//! Submissions are never stored. A valid submission is written to the
//! session's form state, acknowledged, and the state is reset to its empty
//! defaults. An invalid one leaves the state untouched.

pub mod types;
pub mod validate;

pub use types::{
    CounselingForm, CounselingType, FormState, NewsletterForm, PartnershipForm, PartnershipType,
    VolunteerForm, VolunteerRole,
};
pub use validate::{is_valid_email, ValidationError};

use serde::Serialize;
use std::fmt;

/// Which form a submission belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Counseling,
    Volunteer,
    Partnership,
    Newsletter,
}

impl FormKind {
    /// Page anchor the form lives under
    pub fn anchor(&self) -> &'static str {
        match self {
            FormKind::Counseling => "counseling-form",
            FormKind::Volunteer => "volunteer-form",
            FormKind::Partnership => "partnership-form",
            FormKind::Newsletter => "newsletter",
        }
    }

    /// Message shown when validation fails
    pub fn error_message(&self) -> &'static str {
        match self {
            FormKind::Counseling | FormKind::Partnership => "Fill all required fields.",
            FormKind::Volunteer => "Fill all fields.",
            FormKind::Newsletter => "Enter a valid email address.",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormKind::Counseling => "counseling",
            FormKind::Volunteer => "volunteer",
            FormKind::Partnership => "partnership",
            FormKind::Newsletter => "newsletter",
        };
        f.write_str(name)
    }
}

/// A form that can be validated and acknowledged
pub trait Submission: Default + Clone {
    const KIND: FormKind;

    fn validate(&self) -> Result<(), ValidationError>;

    /// Success message; `submitted_at` is already formatted for display
    fn confirmation(&self, submitted_at: &str) -> String;

    /// This form's slot in the session form state
    fn slot(state: &mut FormState) -> &mut Self;
}

/// Validate `submitted` and, if it passes, record it in `state` and then
/// clear the slot back to defaults. Returns the confirmation message.
pub fn submit<F: Submission>(
    state: &mut FormState,
    submitted: F,
    submitted_at: &str,
) -> Result<String, ValidationError> {
    submitted.validate()?;

    let slot = F::slot(state);
    *slot = submitted;
    let message = slot.confirmation(submitted_at);
    *slot = F::default();

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counseling(email: &str) -> CounselingForm {
        CounselingForm {
            name: "Jane".to_string(),
            email: email.to_string(),
            phone: "+254 700 000 000".to_string(),
            counseling_type: CounselingType::InPerson,
        }
    }

    #[test]
    fn test_malformed_emails_rejected_state_unchanged() {
        for email in ["janeexample.com", "jane@examplecom", "jane@", "@example.com", ""] {
            let mut state = FormState::default();
            state.counseling.name = "draft".to_string();
            let before = state.clone();

            let result = submit(&mut state, counseling(email), "09:00 AM EAT, August 06, 2025");
            assert!(result.is_err(), "accepted {:?}", email);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_valid_submission_clears_fields() {
        let mut state = FormState::default();

        let message = submit(
            &mut state,
            counseling("jane@example.com"),
            "09:00 AM EAT, August 06, 2025",
        )
        .unwrap();

        assert_eq!(
            message,
            "Thank you, Jane! Your In-Person counseling registration at 09:00 AM EAT, August 06, 2025, is received. Contact at jane@example.com within 48 hours."
        );
        assert_eq!(state.counseling, CounselingForm::default());
        assert_eq!(state.counseling.counseling_type, CounselingType::Online);
    }

    #[test]
    fn test_each_form_resets_only_its_slot() {
        let mut state = FormState::default();
        state.partnership.organization = "Draft Org".to_string();

        let volunteer = VolunteerForm {
            name: "Peter".to_string(),
            email: "peter@example.org".to_string(),
            phone: "0700".to_string(),
            experience: "counseling".to_string(),
            role: VolunteerRole::EventVolunteer,
        };
        submit(&mut state, volunteer, "now").unwrap();

        assert_eq!(state.volunteer, VolunteerForm::default());
        assert_eq!(state.partnership.organization, "Draft Org");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormKind::Counseling.error_message(), "Fill all required fields.");
        assert_eq!(FormKind::Volunteer.error_message(), "Fill all fields.");
        assert_eq!(FormKind::Partnership.anchor(), "partnership-form");
    }
}
