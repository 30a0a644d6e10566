//! Rate an entire applicant census from data/applicants.csv
//!
//! Outputs one quote row per applicant for comparison with the published
//! rate schedule

use anyhow::Context;
use firstcare_rating::applicant::loader::{load_default_census, CensusEntry};
use firstcare_rating::{eligibility, network, PremiumResolver, PremiumResult};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// One rated census row ready for the output CSV
#[derive(Debug)]
struct RatedEntry {
    entry: CensusEntry,
    premium: PremiumResult,
    warning_count: usize,
    surcharge_hospital_count: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();
    println!("Loading applicants from data/applicants.csv...");

    let census = load_default_census().context("failed to load census")?;
    println!("Loaded {} applicants in {:?}", census.len(), start.elapsed());

    let resolver = PremiumResolver::first_care_200();

    println!("Rating census...");
    let rate_start = Instant::now();

    // Rate all applicants in parallel
    let rated: Vec<RatedEntry> = census
        .into_par_iter()
        .map(|entry| {
            let premium = resolver.resolve_for(&entry.applicant);
            let warning_count = eligibility::warnings_for(&entry.applicant).len();
            let surcharge_hospital_count = entry
                .applicant
                .country_of_residence
                .map(|c| network::surcharge_hospitals(c).len())
                .unwrap_or(0);
            RatedEntry {
                entry,
                premium,
                warning_count,
                surcharge_hospital_count,
            }
        })
        .collect();

    println!("Rated {} applicants in {:?}", rated.len(), rate_start.elapsed());

    // Write quotes to CSV
    let csv_path = "quotes.csv";
    let mut file = File::create(csv_path).context("unable to create quotes.csv")?;

    writeln!(
        file,
        "ApplicantID,Age,Band,Tier,Frequency,BasePremium,Loading,Premium,BillingPeriod,Warnings,SurchargeHospitals"
    )?;

    for row in &rated {
        let applicant = &row.entry.applicant;
        writeln!(
            file,
            "{},{},{},{},{},{:.2},{:.2},{:.2},{},{},{}",
            row.entry.applicant_id,
            applicant.age,
            firstcare_rating::AgeBand::for_age(applicant.age),
            applicant.coverage_tier.as_str(),
            applicant.payment_frequency.as_str(),
            row.premium.base_amount,
            row.premium.loading_amount,
            row.premium.final_amount,
            row.premium.billing_period.as_str(),
            row.warning_count,
            row.surcharge_hospital_count,
        )?;
    }

    println!("\nQuotes written to: {}", csv_path);

    // Print summary
    let total: f64 = rated.iter().map(|r| r.premium.final_amount).sum();
    let flagged = rated.iter().filter(|r| r.warning_count > 0).count();
    let min = rated
        .iter()
        .map(|r| r.premium.final_amount)
        .fold(f64::INFINITY, f64::min);
    let max = rated
        .iter()
        .map(|r| r.premium.final_amount)
        .fold(f64::NEG_INFINITY, f64::max);

    println!("\nSummary:");
    println!("  Applicants: {}", rated.len());
    println!("  Total Billed Premium: ${:.2}", total);
    println!("  Min Premium: ${:.2}", min);
    println!("  Max Premium: ${:.2}", max);
    println!("  Applicants With Notices: {}", flagged);
    println!(
        "  Run Completed: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    Ok(())
}
