//! Form payloads
//!
//! Each struct deserializes straight from an urlencoded POST body. Select
//! fields post their visible label as the value.

use serde::Deserialize;
use std::fmt;

use super::validate::{require, require_email};
use super::{FormKind, Submission, ValidationError};

macro_rules! select_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident, { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

select_enum!(
    /// How counseling sessions are delivered
    CounselingType, default = Online, {
        Online => "Online",
        InPerson => "In-Person",
    }
);

select_enum!(
    /// Preferred volunteer role
    VolunteerRole, default = Any, {
        OutreachSupport => "Outreach Support",
        EventVolunteer => "Event Volunteer",
        CrisisLineAssistant => "Crisis Line Assistant",
        Any => "Any",
    }
);

select_enum!(
    /// Partner or donor registration
    PartnershipType, default = Partner, {
        Partner => "Partner",
        Donor => "Donor",
    }
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CounselingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub counseling_type: CounselingType,
}

impl Submission for CounselingForm {
    const KIND: FormKind = FormKind::Counseling;

    fn validate(&self) -> Result<(), ValidationError> {
        require(&[
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
        ])?;
        require_email(&self.email)
    }

    fn confirmation(&self, submitted_at: &str) -> String {
        format!(
            "Thank you, {}! Your {} counseling registration at {}, is received. Contact at {} within 48 hours.",
            self.name.trim(),
            self.counseling_type,
            submitted_at,
            self.email.trim()
        )
    }

    fn slot(state: &mut FormState) -> &mut Self {
        &mut state.counseling
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VolunteerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub role: VolunteerRole,
}

impl Submission for VolunteerForm {
    const KIND: FormKind = FormKind::Volunteer;

    fn validate(&self) -> Result<(), ValidationError> {
        require(&[
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("experience", self.experience.as_str()),
        ])?;
        require_email(&self.email)
    }

    fn confirmation(&self, submitted_at: &str) -> String {
        format!(
            "Thank you, {}! Registered at {}. Contact at {} within 48 hours.",
            self.name.trim(),
            submitted_at,
            self.email.trim()
        )
    }

    fn slot(state: &mut FormState) -> &mut Self {
        &mut state.volunteer
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartnershipForm {
    pub name: String,
    /// Optional
    pub organization: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub partnership_type: PartnershipType,
}

impl Submission for PartnershipForm {
    const KIND: FormKind = FormKind::Partnership;

    fn validate(&self) -> Result<(), ValidationError> {
        require(&[
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
        ])?;
        require_email(&self.email)
    }

    fn confirmation(&self, submitted_at: &str) -> String {
        format!(
            "Thank you, {}! Your {} registration at {}, is received. Contact at {} within 48 hours.",
            self.name.trim(),
            self.partnership_type,
            submitted_at,
            self.email.trim()
        )
    }

    fn slot(state: &mut FormState) -> &mut Self {
        &mut state.partnership
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewsletterForm {
    pub email: String,
}

impl Submission for NewsletterForm {
    const KIND: FormKind = FormKind::Newsletter;

    fn validate(&self) -> Result<(), ValidationError> {
        require(&[("email", self.email.as_str())])?;
        require_email(&self.email)
    }

    fn confirmation(&self, _submitted_at: &str) -> String {
        format!(
            "Thanks for subscribing! Our newsletter will reach you at {}.",
            self.email.trim()
        )
    }

    fn slot(state: &mut FormState) -> &mut Self {
        &mut state.newsletter
    }
}

/// Current field values for every form in a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub counseling: CounselingForm,
    pub volunteer: VolunteerForm,
    pub partnership: PartnershipForm,
    pub newsletter: NewsletterForm,
}
