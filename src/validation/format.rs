use crate::models::{ValidationIssue, ValidationIssueType};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref THIRTEEN_DIGITS: Regex = Regex::new(r"^[0-9]{13}$").unwrap();
}

pub struct FormatValidator;

impl FormatValidator {
    /// Strip all whitespace from a raw ID number.
    pub fn clean(raw: &str) -> String {
        raw.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Structural gate for a cleaned ID number. A failure here means the
    /// positional fields cannot be extracted, so the caller stops decoding.
    pub fn validate(clean_id: &str) -> Result<(), ValidationIssue> {
        if clean_id.chars().count() != 13 {
            return Err(ValidationIssue::new(
                ValidationIssueType::Format,
                "ID number must be 13 digits",
            ));
        }

        if !THIRTEEN_DIGITS.is_match(clean_id) {
            return Err(ValidationIssue::new(
                ValidationIssueType::Format,
                "ID number must contain only digits",
            ));
        }

        Ok(())
    }
}
