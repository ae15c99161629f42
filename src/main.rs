// ID number validation CLI
// Decodes a claimed ID number and optionally checks it against profile claims

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use themba::models::{IdNumberRecord, MismatchReport};
use themba::utils::{mask_id_number, IdError};
use themba::{IdNumberValidator, ProfileVerifier};

#[derive(Parser)]
#[command(
    name = "themba",
    about = "Validate South African ID numbers and check them against profile claims"
)]
struct Cli {
    /// 13-digit ID number to validate
    #[arg(required_unless_present = "file")]
    id_number: Option<String>,

    /// Validate one ID number per line from a file instead
    #[arg(long, conflicts_with = "id_number")]
    file: Option<PathBuf>,

    /// Profile gender claim to compare against the decoded number
    #[arg(long)]
    gender: Option<String>,

    /// Profile date of birth claim (YYYY-MM-DD or YYYY/MM/DD)
    #[arg(long)]
    date_of_birth: Option<String>,

    /// Emit the decoded record as JSON instead of a report
    #[arg(long)]
    json: bool,
}

// Print a detailed validation report for one ID number
fn print_detailed_report(
    id_number: &str,
    record: &IdNumberRecord,
    mismatch: Option<&MismatchReport>,
) {
    println!("\n===============================================");
    println!("        ID NUMBER VALIDATION REPORT");
    println!("===============================================\n");

    println!("DECODED FIELDS for {}:", mask_id_number(id_number));
    println!(
        "  Date of Birth: {}",
        record.date_of_birth.as_deref().unwrap_or("-")
    );
    println!(
        "  Age: {}",
        record.age.map_or("-".to_string(), |age| age.to_string())
    );
    println!(
        "  Gender: {}",
        record.gender.map_or("-", |gender| gender.label())
    );
    println!(
        "  Citizenship: {}",
        record.citizenship.map_or("-", |citizenship| citizenship.label())
    );

    if !record.errors.is_empty() {
        println!("\nISSUES FOUND:");
        for issue in &record.errors {
            println!("  - {}", issue.message);
        }
    }

    if let Some(report) = mismatch {
        println!("\nPROFILE CONSISTENCY:");
        if report.issues.is_empty() {
            println!("  No mismatches detected");
        } else {
            for issue in &report.issues {
                println!("  - {}", issue.message);
            }
        }
    }

    println!(
        "\nID number validation result: {}",
        if record.is_valid { "VALID" } else { "INVALID" }
    );
}

fn run_single(cli: &Cli, id_number: &str) -> Result<(), IdError> {
    let validator = IdNumberValidator::new();
    let record = validator.validate(id_number);

    let mismatch = match (&cli.gender, &cli.date_of_birth) {
        (None, None) => None,
        (gender, date_of_birth) => Some(ProfileVerifier::new().compare(
            &record,
            gender.as_deref().unwrap_or(""),
            date_of_birth.as_deref().unwrap_or(""),
        )),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        if let Some(report) = &mismatch {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    } else {
        print_detailed_report(id_number, &record, mismatch.as_ref());
    }

    Ok(())
}

fn run_batch(cli: &Cli, path: &PathBuf) -> Result<(), IdError> {
    let contents = fs::read_to_string(path)?;
    let validator = IdNumberValidator::new();

    for line in contents.lines() {
        let id_number = line.trim();
        if id_number.is_empty() {
            continue;
        }

        let record = validator.validate(id_number);
        if cli.json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!(
                "{}  {}",
                mask_id_number(id_number),
                if record.is_valid {
                    "VALID".to_string()
                } else {
                    record.error_messages().join("; ")
                }
            );
        }
    }

    Ok(())
}

fn main() -> Result<(), IdError> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(path) = &cli.file {
        run_batch(&cli, path)
    } else if let Some(id_number) = &cli.id_number {
        run_single(&cli, id_number)
    } else {
        Ok(())
    }
}
