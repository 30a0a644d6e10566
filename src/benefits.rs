//! Static benefit schedule for the First Care 200 plan
//!
//! The schedule itself never varies with the applicant; only the outpatient
//! category is gated on the selected tier.

use crate::applicant::CoverageTier;
use serde::Serialize;

/// One line of the benefit schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenefitItem {
    pub name: &'static str,
    pub cover: &'static str,
}

/// A titled group of benefit lines
#[derive(Debug, Clone, Serialize)]
pub struct BenefitCategory {
    pub title: &'static str,
    pub items: &'static [BenefitItem],
}

const INPATIENT: BenefitCategory = BenefitCategory {
    title: "Inpatient Coverage",
    items: &[
        BenefitItem { name: "Room & Board", cover: "Private Room" },
        BenefitItem { name: "Surgery", cover: "Full Refund" },
        BenefitItem { name: "ICU", cover: "Full Refund" },
        BenefitItem { name: "Physician Fees", cover: "Full Refund" },
    ],
};

const OUTPATIENT: BenefitCategory = BenefitCategory {
    title: "Outpatient Coverage",
    items: &[
        BenefitItem { name: "Consultations", cover: "Full Refund" },
        BenefitItem { name: "Diagnostics", cover: "Full Refund" },
        BenefitItem { name: "Medications", cover: "Full Refund" },
        BenefitItem { name: "Annual Limit", cover: "$2,500" },
    ],
};

const ADDITIONAL: BenefitCategory = BenefitCategory {
    title: "Additional Benefits",
    items: &[
        BenefitItem { name: "Emergency Evacuation", cover: "Covered" },
        BenefitItem { name: "Cancer Treatment", cover: "Covered" },
        BenefitItem { name: "Organ Transplant", cover: "$100,000" },
        BenefitItem { name: "Emergency Dental", cover: "Covered" },
    ],
};

/// Key plan facts shown alongside every quote
pub const KEY_FACTS: &[&str] = &[
    "Maximum coverage: $200,000 USD per year",
    "Inpatient deductible: $100 USD",
    "30-day waiting period for non-emergency treatments",
    "14-day free look period",
    "24/7 emergency assistance included",
];

/// Benefit categories for a tier: inpatient and additional benefits always,
/// outpatient only when the tier includes it.
pub fn schedule_for(tier: CoverageTier) -> Vec<BenefitCategory> {
    let mut categories = vec![INPATIENT.clone()];
    if tier.includes_outpatient() {
        categories.push(OUTPATIENT.clone());
    }
    categories.push(ADDITIONAL.clone());
    categories
}
