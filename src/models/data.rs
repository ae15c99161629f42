use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender encoded by the four-digit sequence number of an ID number.
/// 0000-4999 is female, 5000-9999 is male.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Citizenship class encoded by digit 11 of an ID number.
/// "0" is a citizen, "1" is a permanent resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Citizenship {
    SaCitizen,
    PermanentResident,
}

impl Citizenship {
    pub fn label(&self) -> &'static str {
        match self {
            Citizenship::SaCitizen => "SA Citizen",
            Citizenship::PermanentResident => "Permanent Resident",
        }
    }
}

impl fmt::Display for Citizenship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub issue_type: ValidationIssueType,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(issue_type: ValidationIssueType, message: impl Into<String>) -> Self {
        ValidationIssue {
            issue_type,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationIssueType {
    Format,
    Date,
    Gender,
    Citizenship,
    Checksum,
    Profile,
}

/// Decoded result of validating a claimed 13-digit ID number.
///
/// Decoded fields are populated independently of each other: a number that
/// fails the checksum still carries its decoded birth date and gender so an
/// operator can see what the number would mean if genuine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdNumberRecord {
    pub is_valid: bool,
    /// Birth date as "YYYY-MM-DD", present whenever month and day are in range.
    pub date_of_birth: Option<String>,
    /// Whole years since the decoded birth date, against the current date.
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub citizenship: Option<Citizenship>,
    /// Issues in detection order; empty means valid.
    pub errors: Vec<ValidationIssue>,
}

impl IdNumberRecord {
    /// A record with no decoded fields and the given issues.
    pub fn rejected(errors: Vec<ValidationIssue>) -> Self {
        IdNumberRecord {
            is_valid: false,
            date_of_birth: None,
            age: None,
            gender: None,
            citizenship: None,
            errors,
        }
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|issue| issue.message.as_str()).collect()
    }
}

/// Outcome of comparing a decoded ID number against profile claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MismatchReport {
    pub has_gender_mismatch: bool,
    pub has_date_of_birth_mismatch: bool,
    pub issues: Vec<ValidationIssue>,
}

impl MismatchReport {
    pub fn has_mismatch(&self) -> bool {
        self.has_gender_mismatch || self.has_date_of_birth_mismatch
    }
}
