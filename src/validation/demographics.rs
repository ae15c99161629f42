use crate::models::{Citizenship, Gender, ValidationIssue, ValidationIssueType};

pub struct DemographicsValidationResult {
    pub gender: Option<Gender>,
    pub citizenship: Option<Citizenship>,
    pub issues: Vec<ValidationIssue>,
}

pub struct DemographicsValidator;

impl DemographicsValidator {
    /// Decode the four-digit sequence number and the citizenship digit.
    pub fn validate(gender_code: u32, citizenship_code: &str) -> DemographicsValidationResult {
        let mut issues = Vec::new();

        let gender = match gender_code {
            0..=4999 => Some(Gender::Female),
            5000..=9999 => Some(Gender::Male),
            _ => {
                issues.push(ValidationIssue::new(
                    ValidationIssueType::Gender,
                    "Invalid gender code",
                ));
                None
            }
        };

        let citizenship = match citizenship_code {
            "0" => Some(Citizenship::SaCitizen),
            "1" => Some(Citizenship::PermanentResident),
            _ => {
                issues.push(ValidationIssue::new(
                    ValidationIssueType::Citizenship,
                    "Invalid citizenship code",
                ));
                None
            }
        };

        DemographicsValidationResult {
            gender,
            citizenship,
            issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_boundaries() {
        let result = DemographicsValidator::validate(0, "0");
        assert_eq!(result.gender, Some(Gender::Female));

        let result = DemographicsValidator::validate(4999, "0");
        assert_eq!(result.gender, Some(Gender::Female));

        let result = DemographicsValidator::validate(5000, "0");
        assert_eq!(result.gender, Some(Gender::Male));

        let result = DemographicsValidator::validate(9999, "0");
        assert_eq!(result.gender, Some(Gender::Male));
    }

    #[test]
    fn test_citizenship_codes() {
        let result = DemographicsValidator::validate(5000, "0");
        assert_eq!(result.citizenship, Some(Citizenship::SaCitizen));

        let result = DemographicsValidator::validate(5000, "1");
        assert_eq!(result.citizenship, Some(Citizenship::PermanentResident));
    }

    #[test]
    fn test_unknown_citizenship_code() {
        let result = DemographicsValidator::validate(5000, "2");
        assert_eq!(result.citizenship, None);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].message, "Invalid citizenship code");
        assert_eq!(result.issues[0].issue_type, ValidationIssueType::Citizenship);
    }

    #[test]
    fn test_out_of_range_gender_code() {
        let result = DemographicsValidator::validate(10_000, "0");
        assert_eq!(result.gender, None);
        assert_eq!(result.issues[0].message, "Invalid gender code");
    }
}
