//! First Care 200 quote CLI
//!
//! Command-line interface for producing a single premium quote

use anyhow::Context;
use clap::Parser;
use firstcare_rating::{
    benefits, AgeBand, Applicant, Country, CoverageTier, PaymentFrequency, PremiumResolver,
    QuoteSession, RateTable,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "firstcare-quote")]
#[command(about = "Premium quote for the First Care 200 expatriate health plan")]
struct Args {
    /// Age in whole years (the form allows 0-100)
    #[arg(long, default_value_t = 30)]
    age: u8,

    /// Nationality, free text
    #[arg(long, default_value = "")]
    nationality: String,

    /// Country of residence, exact name (e.g. "Sri Lanka")
    #[arg(long)]
    country: Option<String>,

    /// Applicant declares a pre-existing condition
    #[arg(long)]
    pre_existing: bool,

    /// Coverage tier: IP or IP+OP
    #[arg(long, default_value = "IP")]
    tier: String,

    /// Payment frequency: annual or semi-annual
    #[arg(long, default_value = "annual")]
    frequency: String,

    /// Load the rate schedule from data/rates/ instead of the built-in table
    #[arg(long)]
    rates_from_csv: bool,

    /// Emit the quote as JSON instead of the formatted summary
    #[arg(long)]
    json: bool,
}

/// JSON shape of a full quote; amounts are display-rounded strings
#[derive(Debug, Serialize)]
struct QuoteOutput<'a> {
    quoted_on: String,
    input: &'a Applicant,
    age_band: &'static str,
    premium_usd: String,
    billing_period: &'static str,
    base_premium_usd: String,
    loading_usd: String,
    warnings: Vec<String>,
    surcharge_hospitals: &'static [&'static str],
    benefits: Vec<benefits::BenefitCategory>,
    key_facts: &'static [&'static str],
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let country_of_residence = match &args.country {
        Some(name) => Some(
            Country::from_name(name)
                .with_context(|| format!("unknown country of residence: {}", name))?,
        ),
        None => None,
    };

    let applicant = Applicant {
        age: args.age,
        nationality: args.nationality.clone(),
        country_of_residence,
        has_pre_existing_condition: args.pre_existing,
        coverage_tier: CoverageTier::from_code(&args.tier)?,
        payment_frequency: PaymentFrequency::from_code(&args.frequency)?,
    };

    let resolver = if args.rates_from_csv {
        PremiumResolver::new(RateTable::from_csv().context("failed to load rate schedule")?)
    } else {
        PremiumResolver::first_care_200()
    };

    let session = QuoteSession::new(resolver, applicant);
    let quoted_on = chrono::Local::now().date_naive();

    if args.json {
        let premium = session.premium();
        let output = QuoteOutput {
            quoted_on: quoted_on.to_string(),
            input: session.input(),
            age_band: AgeBand::for_age(session.input().age).label(),
            premium_usd: premium.final_display(),
            billing_period: premium.billing_period.as_str(),
            base_premium_usd: premium.base_display(),
            loading_usd: premium.loading_display(),
            warnings: session.warnings(),
            surcharge_hospitals: session.surcharge_hospitals(),
            benefits: session.benefits(),
            key_facts: benefits::KEY_FACTS,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_quote(&session, quoted_on);
    Ok(())
}

fn print_quote(session: &QuoteSession, quoted_on: chrono::NaiveDate) {
    let input = session.input();
    let premium = session.premium();

    println!("First Care 200 Premium Calculator");
    println!("=================================\n");

    println!("Applicant:");
    println!("  Age: {} (band {})", input.age, AgeBand::for_age(input.age));
    if !input.nationality.is_empty() {
        println!("  Nationality: {}", input.nationality);
    }
    if let Some(country) = input.country_of_residence {
        println!("  Country of Residence: {}", country);
    }
    println!("  Coverage: {}", input.coverage_tier.as_str());
    println!("  Billing: {}", input.payment_frequency.as_str());
    println!();

    println!("Premium Summary:");
    println!(
        "  ${} USD per {}",
        premium.final_display(),
        premium.billing_period.as_str()
    );
    println!("  Base Premium: ${} USD", premium.base_display());
    if premium.loading_amount > 0.0 {
        println!("  Loading (2%): ${} USD", premium.loading_display());
    }
    println!();

    let warnings = session.warnings();
    if !warnings.is_empty() {
        println!("Important Notices:");
        for warning in &warnings {
            println!("  - {}", warning);
        }
        println!();
    }

    let hospitals = session.surcharge_hospitals();
    if !hospitals.is_empty() {
        println!("Premium Hospital Network (40% co-payment applies):");
        for hospital in hospitals {
            println!("  - {}", hospital);
        }
        println!();
    }

    println!("Coverage Benefits:");
    for category in session.benefits() {
        println!("  {}:", category.title);
        for item in category.items {
            println!("    {}: {}", item.name, item.cover);
        }
    }
    println!();

    println!("Key Information:");
    for fact in benefits::KEY_FACTS {
        println!("  - {}", fact);
    }
    println!();

    println!("Quoted on: {}", quoted_on);
}
