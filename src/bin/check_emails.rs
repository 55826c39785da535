use clap::Parser;
use email_validator::validation::syntax::is_valid_email;

const SAMPLE_EMAILS: &[&str] = &[
    "test@example.com",
    "user.name@domain.co.uk",
    "invalid-email",
    "test@",
    "@domain.com",
    "test@domain",
    "test..test@domain.com",
    "test@domain..com",
    "a@b.c",
    "very.long.email.address.that.exceeds.maximum.length@very.long.domain.name.that.also.exceeds.maximum.length.com",
];

/// Prints a syntax verdict for each address.
#[derive(Debug, Parser)]
#[command(name = "check-emails")]
#[command(about = "Check email addresses against the validator rules")]
struct Args {
    /// Addresses to check. A built-in sample list is used when none are given.
    emails: Vec<String>,

    /// Exit with status 1 if any address is invalid.
    #[arg(long)]
    strict: bool,
}

fn main() {
    let args = Args::parse();

    let emails: Vec<String> = if args.emails.is_empty() {
        SAMPLE_EMAILS.iter().map(|s| s.to_string()).collect()
    } else {
        args.emails
    };

    println!("Checking {} email address(es)\n", emails.len());

    let mut invalid = 0;
    for email in &emails {
        if is_valid_email(email) {
            println!("✅ {email} -> Valid");
        } else {
            invalid += 1;
            println!("❌ {email} -> Invalid");
        }
    }

    println!("\n{} valid, {} invalid", emails.len() - invalid, invalid);

    if args.strict && invalid > 0 {
        std::process::exit(1);
    }
}
