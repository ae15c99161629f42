use crate::models::{ValidationIssue, ValidationIssueType};
use chrono::{Datelike, Local, NaiveDate};

pub struct DateValidationResult {
    pub date_of_birth: Option<String>,
    pub age: Option<i32>,
    pub issues: Vec<ValidationIssue>,
}

pub struct DateValidator;

impl DateValidator {
    /// Decode the YYMMDD portion of an ID number against today's date.
    pub fn validate(year_prefix: i32, month: u32, day: u32) -> DateValidationResult {
        Self::validate_at(year_prefix, month, day, Local::now().date_naive())
    }

    /// Same as `validate`, with an explicit reference date.
    pub fn validate_at(
        year_prefix: i32,
        month: u32,
        day: u32,
        today: NaiveDate,
    ) -> DateValidationResult {
        let mut issues = Vec::new();

        let current_year = today.year();
        let current_century = (current_year / 100) * 100;
        let last_century = current_century - 100;

        // Two-digit years resolve to the most recent century that keeps the
        // holder at most 100 years old.
        let mut full_year = last_century + year_prefix;
        if current_year - full_year > 100 {
            full_year = current_century + year_prefix;
        }

        if !(1..=12).contains(&month) {
            issues.push(ValidationIssue::new(
                ValidationIssueType::Date,
                "Invalid month in ID number",
            ));
        }

        // Day is range-checked only; per-month lengths and leap years are
        // not considered, so "31 February" passes.
        if !(1..=31).contains(&day) {
            issues.push(ValidationIssue::new(
                ValidationIssueType::Date,
                "Invalid day in ID number",
            ));
        }

        let mut date_of_birth = None;
        let mut age = None;

        if issues.is_empty() {
            date_of_birth = Some(format!("{}-{:02}-{:02}", full_year, month, day));

            let mut years = current_year - full_year;
            if (today.month(), today.day()) < (month, day) {
                years -= 1;
            }
            age = Some(years);
        }

        DateValidationResult {
            date_of_birth,
            age,
            issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn test_resolves_last_century() {
        let result = DateValidator::validate_at(85, 6, 12, fixed_today());
        assert_eq!(result.date_of_birth.as_deref(), Some("1985-06-12"));
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_rolls_forward_when_older_than_hundred() {
        // 1910 would be 116 years back, so the prefix resolves to 2010.
        let result = DateValidator::validate_at(10, 3, 1, fixed_today());
        assert_eq!(result.date_of_birth.as_deref(), Some("2010-03-01"));
    }

    #[test]
    fn test_exactly_hundred_years_stays_in_last_century() {
        let result = DateValidator::validate_at(26, 1, 15, fixed_today());
        assert_eq!(result.date_of_birth.as_deref(), Some("1926-01-15"));

        let result = DateValidator::validate_at(25, 1, 15, fixed_today());
        assert_eq!(result.date_of_birth.as_deref(), Some("2025-01-15"));
    }

    #[test]
    fn test_invalid_month() {
        let result = DateValidator::validate_at(85, 13, 12, fixed_today());
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].message, "Invalid month in ID number");
        assert!(result.date_of_birth.is_none());
        assert!(result.age.is_none());
    }

    #[test]
    fn test_invalid_day() {
        let result = DateValidator::validate_at(85, 6, 0, fixed_today());
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].message, "Invalid day in ID number");

        let result = DateValidator::validate_at(85, 6, 32, fixed_today());
        assert_eq!(result.issues[0].message, "Invalid day in ID number");
    }

    #[test]
    fn test_day_is_not_checked_per_month() {
        let result = DateValidator::validate_at(85, 2, 31, fixed_today());
        assert!(result.issues.is_empty());
        assert_eq!(result.date_of_birth.as_deref(), Some("1985-02-31"));
    }

    #[test]
    fn test_age_counts_completed_years() {
        // Birthday already passed this year.
        let result = DateValidator::validate_at(85, 6, 12, fixed_today());
        assert_eq!(result.age, Some(41));

        // Birthday on the reference date itself counts as passed.
        let result = DateValidator::validate_at(85, 8, 6, fixed_today());
        assert_eq!(result.age, Some(41));

        // Birthday still ahead this year.
        let result = DateValidator::validate_at(85, 8, 7, fixed_today());
        assert_eq!(result.age, Some(40));

        let result = DateValidator::validate_at(85, 12, 31, fixed_today());
        assert_eq!(result.age, Some(40));
    }

    #[test]
    fn test_month_and_day_errors_accumulate() {
        let result = DateValidator::validate_at(85, 0, 40, fixed_today());
        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.issues[0].message, "Invalid month in ID number");
        assert_eq!(result.issues[1].message, "Invalid day in ID number");
    }
}
