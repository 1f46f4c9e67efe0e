//! Field validation helpers

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Constant pattern; `test_email_pattern_compiles` forces this.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern is valid"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address")]
    InvalidEmail,
}

/// Something of the form `local@domain.tld`. Only the start of the value
/// is anchored.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Fails on the first blank field, in the order given
pub fn require(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(ValidationError::MissingField(name)),
        None => Ok(()),
    }
}

pub fn require_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern_compiles() {
        assert_eq!(Lazy::force(&EMAIL_RE).as_str(), r"^[^@]+@[^@]+\.[^@]+");
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("info@safespaceorganisation.org"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.co.ke"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("missing@dot"));
        assert!(!is_valid_email("@nodomain.com"));
        assert!(!is_valid_email("two@@signs.com"));
    }

    #[test]
    fn test_require_reports_first_blank() {
        assert_eq!(require(&[("name", "Jane"), ("phone", "0700")]), Ok(()));
        assert_eq!(
            require(&[("name", "Jane"), ("email", "  "), ("phone", "")]),
            Err(ValidationError::MissingField("email"))
        );
    }
}
