pub mod checksum;
pub mod date;
pub mod demographics;
pub mod format;

pub use checksum::ChecksumValidator;
pub use date::{DateValidationResult, DateValidator};
pub use demographics::{DemographicsValidationResult, DemographicsValidator};
pub use format::FormatValidator;
