use crate::models::IdNumberRecord;
use crate::utils::mask_id_number;
use crate::validation::{ChecksumValidator, DateValidator, DemographicsValidator, FormatValidator};
use log::{debug, warn};

/// Decoder for claimed 13-digit South African ID numbers, laid out as
/// YYMMDD SSSS C A Z: six birth-date digits, a four-digit sequence number
/// that discriminates gender, a citizenship digit, a digit that is usually
/// 8 or 9, and a Luhn check digit.
pub struct IdNumberValidator;

impl IdNumberValidator {
    pub fn new() -> Self {
        IdNumberValidator
    }

    /// Normalize, validate and decode an ID number.
    ///
    /// Malformed input never produces an error return; every failure mode is
    /// reported through `IdNumberRecord::errors`, and the checks past the
    /// structural gate all run so that failures accumulate. Decoded fields
    /// are kept even when the number is rejected.
    pub fn validate(&self, raw: &str) -> IdNumberRecord {
        let clean = FormatValidator::clean(raw);
        debug!("validating ID number {}", mask_id_number(&clean));

        // Without 13 digits the positional fields below do not exist.
        if let Err(issue) = FormatValidator::validate(&clean) {
            return IdNumberRecord::rejected(vec![issue]);
        }

        // Extract components
        let year_prefix: i32 = clean[0..2].parse().unwrap_or(0);
        let month: u32 = clean[2..4].parse().unwrap_or(0);
        let day: u32 = clean[4..6].parse().unwrap_or(0);
        let gender_code: u32 = clean[6..10].parse().unwrap_or(0);
        let citizenship_code = &clean[10..11];

        let mut errors = Vec::new();

        let date_result = DateValidator::validate(year_prefix, month, day);
        errors.extend(date_result.issues);

        let demographics = DemographicsValidator::validate(gender_code, citizenship_code);
        errors.extend(demographics.issues);

        // The checksum covers the whole number, so it is verified even when
        // individual fields were already rejected.
        if let Some(issue) = ChecksumValidator::validate(&clean) {
            warn!("checksum failure for ID number {}", mask_id_number(&clean));
            errors.push(issue);
        }

        let is_valid = errors.is_empty();

        IdNumberRecord {
            is_valid,
            date_of_birth: date_result.date_of_birth,
            age: date_result.age,
            gender: demographics.gender,
            citizenship: demographics.citizenship,
            errors,
        }
    }
}

impl Default for IdNumberValidator {
    fn default() -> Self {
        Self::new()
    }
}
