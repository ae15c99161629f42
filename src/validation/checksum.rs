use crate::models::{ValidationIssue, ValidationIssueType};

pub struct ChecksumValidator;

impl ChecksumValidator {
    /// Luhn check digit for the 12 leading digits of an ID number.
    ///
    /// Digits are processed right to left; every second processed digit is
    /// doubled, starting with the second one, and doubled values above 9 have
    /// 9 subtracted before summing.
    pub fn check_digit(leading_digits: &str) -> u32 {
        let mut sum = 0;
        let mut double = false;

        for c in leading_digits.chars().rev() {
            let mut digit = c.to_digit(10).unwrap_or(0);
            if double {
                digit *= 2;
                if digit > 9 {
                    digit -= 9;
                }
            }
            sum += digit;
            double = !double;
        }

        (10 - sum % 10) % 10
    }

    /// Verify the 13th digit of a cleaned, digits-only ID number.
    pub fn validate(clean_id: &str) -> Option<ValidationIssue> {
        let expected = Self::check_digit(&clean_id[..clean_id.len() - 1]);
        let actual = clean_id
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .unwrap_or(10);

        if expected != actual {
            return Some(ValidationIssue::new(
                ValidationIssueType::Checksum,
                "Invalid checksum - ID number may be fake",
            ));
        }

        None
    }
}
