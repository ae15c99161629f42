pub mod data;

pub use data::{
    Citizenship, Gender, IdNumberRecord, MismatchReport, ValidationIssue, ValidationIssueType,
};
