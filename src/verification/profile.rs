use crate::models::{IdNumberRecord, MismatchReport, ValidationIssue, ValidationIssueType};

/// Checks a decoded ID number against the holder's self-submitted profile,
/// flagging fields where the two sources disagree.
pub struct ProfileVerifier;

impl ProfileVerifier {
    pub fn new() -> Self {
        ProfileVerifier
    }

    /// Compare decoded fields against profile claims.
    ///
    /// A field is only compared when both sides carry a value; missing data
    /// is not a discrepancy. Gender comparison ignores case. The profile
    /// birth date may use "/" or "-" separators, but is otherwise matched
    /// textually against the decoded "YYYY-MM-DD" value.
    pub fn compare(
        &self,
        record: &IdNumberRecord,
        profile_gender: &str,
        profile_date_of_birth: &str,
    ) -> MismatchReport {
        let mut issues = Vec::new();
        let mut has_gender_mismatch = false;
        let mut has_date_of_birth_mismatch = false;

        if let Some(gender) = record.gender {
            if !profile_gender.is_empty() && !gender.label().eq_ignore_ascii_case(profile_gender) {
                has_gender_mismatch = true;
                issues.push(ValidationIssue::new(
                    ValidationIssueType::Profile,
                    format!(
                        "Gender mismatch: ID shows {}, profile shows {}",
                        gender, profile_gender
                    ),
                ));
            }
        }

        if let Some(date_of_birth) = &record.date_of_birth {
            if !profile_date_of_birth.is_empty() {
                let normalized = profile_date_of_birth.replace('/', "-");
                if normalized != *date_of_birth {
                    has_date_of_birth_mismatch = true;
                    issues.push(ValidationIssue::new(
                        ValidationIssueType::Profile,
                        format!(
                            "Date of birth mismatch: ID shows {}, profile shows {}",
                            date_of_birth, profile_date_of_birth
                        ),
                    ));
                }
            }
        }

        MismatchReport {
            has_gender_mismatch,
            has_date_of_birth_mismatch,
            issues,
        }
    }
}

impl Default for ProfileVerifier {
    fn default() -> Self {
        Self::new()
    }
}
