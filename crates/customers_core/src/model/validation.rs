//! Customer field validation.
//!
//! # Responsibility
//! - Turn raw candidate values into an ordered list of field errors.
//! - Provide the `ensure_validity` gate used by every entity write path.
//!
//! # Invariants
//! - At most one error per field; the first failing rule wins.
//! - Fields are checked independently in `firstName, lastName, email` order.
//! - The email format rule only runs when the email length is in bounds.

use super::constraints::{FieldConstraint, EMAIL, FIRST_NAME, LAST_NAME};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowercase ASCII local part, `@`, lowercase ASCII domain, one `.`, lowercase ASCII tld.
pub const EMAIL_PATTERN: &str = r"^[a-z]+@[a-z]+\.[a-z]+$";

pub const EMAIL_FORMAT_MESSAGE: &str =
    "E-mail has an incorrect format. See the API documentation for the correct format.";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"));

/// One field-level rule violation.
///
/// Serialized with the external property naming used by API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(rename = "propertyName")]
    pub field_name: String,
    /// `None` when the rejected value was absent.
    #[serde(rename = "propertyValue")]
    pub rejected_value: Option<String>,
    #[serde(rename = "errorMessage")]
    pub message: String,
}

impl ValidationError {
    fn missing(constraint: &FieldConstraint) -> Self {
        Self {
            field_name: constraint.field.to_string(),
            rejected_value: None,
            message: format!("{} must have a value.", constraint.label),
        }
    }

    fn size(constraint: &FieldConstraint, value: &str) -> Self {
        Self {
            field_name: constraint.field.to_string(),
            rejected_value: Some(value.to_string()),
            message: format!(
                "{} must be between {} and {} characters long.",
                constraint.label, constraint.min, constraint.max
            ),
        }
    }

    fn email_format(value: &str) -> Self {
        Self {
            field_name: EMAIL.field.to_string(),
            rejected_value: Some(value.to_string()),
            message: EMAIL_FORMAT_MESSAGE.to_string(),
        }
    }
}

/// Failure raised when one or more customer fields are invalid.
///
/// Never empty: constructed only by [`ensure_validity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    errors: Vec<ValidationError>,
}

impl ValidationFailure {
    /// Field errors in validation order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Finds the error reported for `field_name`, if any.
    pub fn error_for(&self, field_name: &str) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|error| error.field_name == field_name)
    }
}

impl Display for ValidationFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer validation failed:")?;
        for error in &self.errors {
            write!(f, " [{}] {}", error.field_name, error.message)?;
        }
        Ok(())
    }
}

impl Error for ValidationFailure {}

/// Validates raw customer values and returns every field error found.
///
/// An empty result means the values are acceptable.
pub fn validate(
    first_name: Option<&str>,
    last_name: Option<&str>,
    email: Option<&str>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    errors.extend(check_size(&FIRST_NAME, first_name));
    errors.extend(check_size(&LAST_NAME, last_name));
    errors.extend(check_email(email));
    errors
}

/// Runs [`validate`] and fails when any error is found.
pub fn ensure_validity(
    first_name: Option<&str>,
    last_name: Option<&str>,
    email: Option<&str>,
) -> Result<(), ValidationFailure> {
    let errors = validate(first_name, last_name, email);
    if errors.is_empty() {
        return Ok(());
    }
    Err(ValidationFailure { errors })
}

/// Returns whether `value` matches the accepted email format.
///
/// Does not check length bounds.
pub fn is_valid_email_format(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn check_size(constraint: &FieldConstraint, value: Option<&str>) -> Option<ValidationError> {
    let Some(value) = value else {
        return Some(ValidationError::missing(constraint));
    };
    if constraint.accepts_length(value.encode_utf16().count()) {
        None
    } else {
        Some(ValidationError::size(constraint, value))
    }
}

fn check_email(email: Option<&str>) -> Option<ValidationError> {
    if let Some(error) = check_size(&EMAIL, email) {
        return Some(error);
    }
    match email {
        Some(value) if !is_valid_email_format(value) => Some(ValidationError::email_format(value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{ensure_validity, is_valid_email_format, validate, EMAIL_FORMAT_MESSAGE};

    #[test]
    fn valid_values_produce_no_errors() {
        assert!(validate(Some("John"), Some("Doe"), Some("johndoe@example.com")).is_empty());
        assert!(ensure_validity(Some("John"), Some("Doe"), Some("johndoe@example.com")).is_ok());
    }

    #[test]
    fn missing_value_stops_further_checks_for_that_field() {
        let errors = validate(None, Some("Doe"), None);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field_name, "firstName");
        assert_eq!(errors[0].rejected_value, None);
        assert_eq!(errors[0].message, "First name must have a value.");
        assert_eq!(errors[1].field_name, "email");
        assert_eq!(errors[1].message, "E-mail must have a value.");
    }

    #[test]
    fn size_failure_on_email_skips_format_check() {
        let errors = validate(Some("John"), Some("Doe"), Some("A@b"));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "E-mail must be between 5 and 320 characters long."
        );
        assert_eq!(errors[0].rejected_value.as_deref(), Some("A@b"));
    }

    #[test]
    fn length_counts_utf16_units_not_bytes() {
        let name = "ä".repeat(75);
        assert!(validate(Some(&name), Some("Doe"), Some("johndoe@example.com")).is_empty());
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        let at_limit = "\u{1F600}".repeat(37);
        assert!(validate(Some(&at_limit), Some("Doe"), Some("johndoe@example.com")).is_empty());

        let over_limit = "\u{1F600}".repeat(38);
        let errors = validate(Some(&over_limit), Some("Doe"), Some("johndoe@example.com"));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "First name must be between 1 and 75 characters long."
        );
    }

    #[test]
    fn format_rule_rejects_non_ascii_letters() {
        assert!(is_valid_email_format("johndoe@example.com"));
        assert!(!is_valid_email_format("ä@example.com"));
        assert!(!is_valid_email_format("johndoe@example.öö"));
        assert!(!is_valid_email_format("John@example.com"));

        let errors = validate(Some("John"), Some("Doe"), Some("johndoe@ä.com"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, EMAIL_FORMAT_MESSAGE);
    }

    #[test]
    fn failure_display_lists_fields() {
        let failure = ensure_validity(None, Some(""), Some("x")).unwrap_err();
        let text = failure.to_string();
        assert!(text.contains("[firstName]"));
        assert!(text.contains("[lastName]"));
        assert!(text.contains("[email]"));
    }
}
