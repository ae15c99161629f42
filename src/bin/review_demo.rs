use themba::{IdNumberValidator, ProfileVerifier};

struct PendingReview {
    user_name: &'static str,
    id_number: &'static str,
    profile_gender: &'static str,
    profile_date_of_birth: &'static str,
}

fn main() {
    env_logger::init();

    println!("Document Review Demo");
    println!("--------------------");

    // Submissions as they would arrive from a review queue: one clean,
    // one with a claimed gender that contradicts the number, one fake.
    let reviews = [
        PendingReview {
            user_name: "Thabo Nkosi",
            id_number: "8001015009083",
            profile_gender: "Male",
            profile_date_of_birth: "1980-01-01",
        },
        PendingReview {
            user_name: "Lindiwe Dlamini",
            id_number: "9202204720086",
            profile_gender: "Male",
            profile_date_of_birth: "1992/02/20",
        },
        PendingReview {
            user_name: "Sipho Madonsela",
            id_number: "0301235489087",
            profile_gender: "Female",
            profile_date_of_birth: "2003-01-23",
        },
    ];

    let validator = IdNumberValidator::new();
    let verifier = ProfileVerifier::new();

    for review in &reviews {
        println!("\nReviewing submission from {}...", review.user_name);

        let record = validator.validate(review.id_number);
        let report = verifier.compare(
            &record,
            review.profile_gender,
            review.profile_date_of_birth,
        );

        println!(
            "  ID number is {}",
            if record.is_valid { "VALID" } else { "INVALID" }
        );

        for issue in &record.errors {
            println!("  - {}", issue.message);
        }

        if report.has_mismatch() {
            println!("  Profile does not match the ID number:");
            for issue in &report.issues {
                println!("  - {}", issue.message);
            }
        } else if record.is_valid {
            println!("  Profile matches the ID number");
        }
    }
}
