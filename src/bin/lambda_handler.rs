//! AWS Lambda handler for premium quotes
//!
//! Accepts the quote form fields as JSON and returns the priced premium with
//! its breakdown, warnings, surcharge hospitals, and benefit schedule.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use firstcare_rating::{
    benefits::{self, BenefitCategory},
    eligibility, network, Applicant, Country, CoverageTier, PaymentFrequency, PremiumResolver,
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

/// Input fields for a quote; every field is optional with the form defaults
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Age in whole years (default: 30)
    #[serde(default = "default_age")]
    pub age: u8,

    /// Nationality, free text
    #[serde(default)]
    pub nationality: String,

    /// Country of residence, exact name (e.g. "Sri Lanka")
    #[serde(default)]
    pub country_of_residence: Option<String>,

    /// Declared pre-existing condition
    #[serde(default)]
    pub has_pre_existing_condition: bool,

    /// Coverage tier code: "IP" or "IP+OP" (default: "IP")
    #[serde(default = "default_tier")]
    pub coverage_tier: String,

    /// Payment frequency: "annual" or "semi-annual" (default: "annual")
    #[serde(default = "default_frequency")]
    pub payment_frequency: String,
}

fn default_age() -> u8 {
    30
}
fn default_tier() -> String {
    "IP".to_string()
}
fn default_frequency() -> String {
    "annual".to_string()
}

/// Output from the quote; amounts are display-rounded strings
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quoted_at: String,
    pub age_band: &'static str,
    pub premium_usd: String,
    pub billing_period: &'static str,
    pub base_premium_usd: String,
    pub loading_usd: String,
    pub warnings: Vec<String>,
    pub surcharge_hospitals: Vec<String>,
    pub benefits: Vec<BenefitCategory>,
    pub key_facts: &'static [&'static str],
    pub execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &QuoteResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: QuoteRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let coverage_tier = match CoverageTier::from_code(&request.coverage_tier) {
        Ok(t) => t,
        Err(e) => return Ok(error_response(400, &e.to_string())),
    };

    let payment_frequency = match PaymentFrequency::from_code(&request.payment_frequency) {
        Ok(f) => f,
        Err(e) => return Ok(error_response(400, &e.to_string())),
    };

    // Unknown residence is a client error; an omitted one is fine
    let country_of_residence = match request.country_of_residence.as_deref() {
        None | Some("") => None,
        Some(name) => match Country::from_name(name) {
            Some(country) => Some(country),
            None => return Ok(error_response(400, &format!("unknown country: {}", name))),
        },
    };

    let applicant = Applicant {
        age: request.age,
        nationality: request.nationality,
        country_of_residence,
        has_pre_existing_condition: request.has_pre_existing_condition,
        coverage_tier,
        payment_frequency,
    };

    let resolver = PremiumResolver::first_care_200();
    let premium = resolver.resolve_for(&applicant);
    let warnings = eligibility::warnings_for(&applicant);
    let surcharge_hospitals: Vec<String> = applicant
        .country_of_residence
        .map(|c| {
            network::surcharge_hospitals(c)
                .iter()
                .map(|h| h.to_string())
                .collect()
        })
        .unwrap_or_default();

    let response = QuoteResponse {
        quoted_at: chrono::Utc::now().to_rfc3339(),
        age_band: firstcare_rating::AgeBand::for_age(applicant.age).label(),
        premium_usd: premium.final_display(),
        billing_period: premium.billing_period.as_str(),
        base_premium_usd: premium.base_display(),
        loading_usd: premium.loading_display(),
        warnings,
        surcharge_hospitals,
        benefits: benefits::schedule_for(applicant.coverage_tier),
        key_facts: benefits::KEY_FACTS,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
