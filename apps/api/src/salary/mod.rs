//! Salary Estimation — maps (role text, experience tier, region) to an
//! estimated annual compensation figure.
//!
//! Pipeline, applied in order: regional base → role-category multiplier →
//! experience multiplier → HCOL uplift → bounded random variance → global
//! saturation dampener → region-specific rounding → display formatting.
//!
//! The inputs are classified up front into tagged enums (`Region`,
//! `ExperienceTier`, `RoleCategory`) and the multipliers live in one lookup,
//! so every branch is enumerable in tests. The variance draw is the only
//! non-deterministic step and the RNG is injected: handlers pass
//! `thread_rng()`, tests pass a seeded `StdRng` or pin the variance directly.

pub mod handlers;

use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Tuning constants (post-2023 market correction levels)
// ────────────────────────────────────────────────────────────────────────────

/// Final downward adjustment applied to all estimates — employer's market bias.
const SATURATION_DAMPENER: f64 = 0.92;

/// Uplift for designated high-cost-of-living US markets (SF, NY).
const HCOL_UPLIFT: f64 = 1.5;

// ────────────────────────────────────────────────────────────────────────────
// Input classification
// ────────────────────────────────────────────────────────────────────────────

/// Coarse geographic/economic bucket that sets the compensation baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// India, Tier 1/2 average.
    India,
    /// Southeast Asia.
    Asia,
    /// United States outside HCOL metros.
    Us,
    /// Global remote — priced like the generic US market.
    Remote,
    /// Western Europe.
    Eu,
    /// United Kingdom.
    Uk,
    /// San Francisco Bay Area.
    SanFrancisco,
    /// New York metro.
    NewYork,
}

impl Region {
    /// Regional base in local currency units.
    fn base(&self) -> f64 {
        match self {
            // Mass recruiters offer 3.25-4.5 LPA; non-tech entry level often
            // starts at 2.4-3.0 LPA.
            Region::India => 240_000.0,
            // Roughly $1k/month for general SE Asia entry.
            Region::Asia => 12_000.0,
            Region::Eu | Region::Uk => 28_000.0,
            Region::Us | Region::Remote | Region::SanFrancisco | Region::NewYork => 42_000.0,
        }
    }

    pub fn currency(&self) -> &'static str {
        match self {
            Region::India => "₹",
            Region::Uk => "£",
            Region::Eu => "€",
            _ => "$",
        }
    }

    fn is_india(&self) -> bool {
        matches!(self, Region::India)
    }

    fn is_us_hcol(&self) -> bool {
        matches!(self, Region::SanFrancisco | Region::NewYork)
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "india" => Ok(Region::India),
            "asia" => Ok(Region::Asia),
            "us" => Ok(Region::Us),
            "remote" | "us/remote" => Ok(Region::Remote),
            "eu" => Ok(Region::Eu),
            "uk" => Ok(Region::Uk),
            "sf" => Ok(Region::SanFrancisco),
            "ny" => Ok(Region::NewYork),
            other => Err(format!(
                "unknown region '{other}' (expected india|asia|us|remote|eu|uk|sf|ny)"
            )),
        }
    }
}

/// Experience tier. Entry applies no multiplier; the curve above it is
/// deliberately flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExperienceTier {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceTier {
    fn multiplier(&self) -> f64 {
        match self {
            ExperienceTier::Entry => 1.0,
            ExperienceTier::Mid => 1.4,    // 3-5 years
            ExperienceTier::Senior => 2.2, // 5+ years
            ExperienceTier::Lead => 3.2,   // 8+ years
        }
    }
}

impl FromStr for ExperienceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "entry" => Ok(ExperienceTier::Entry),
            "mid" => Ok(ExperienceTier::Mid),
            "senior" => Ok(ExperienceTier::Senior),
            "lead" => Ok(ExperienceTier::Lead),
            other => Err(format!(
                "unknown experience tier '{other}' (expected entry|mid|senior|lead)"
            )),
        }
    }
}

/// Role family, resolved once from free text by ordered keyword groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleCategory {
    Technical,
    DataAi,
    Management,
    Creative,
    Internship,
    Operations,
    /// No keyword matched — base stays unmultiplied.
    General,
}

/// Keyword groups in priority order: the first group with a substring hit
/// wins. "Data Engineer" is Technical, not DataAi, because the technical
/// group is tested first — this matches the original tuning.
const ROLE_KEYWORD_GROUPS: &[(RoleCategory, &[&str])] = &[
    (
        RoleCategory::Technical,
        &["software", "developer", "engineer", "coder"],
    ),
    (RoleCategory::DataAi, &["data", "scientist", "ai", "ml"]),
    (RoleCategory::Management, &["manager", "head", "lead"]),
    (
        RoleCategory::Creative,
        &["design", "ui", "ux", "writer", "content"],
    ),
    (RoleCategory::Internship, &["intern", "trainee"]),
    (
        RoleCategory::Operations,
        &["support", "admin", "ops", "hr", "recruiter"],
    ),
];

/// Classifies free-text role input. Substring semantics on the lowercased text.
pub fn classify_role(role: &str) -> RoleCategory {
    let role = role.to_lowercase();
    for (category, keywords) in ROLE_KEYWORD_GROUPS {
        if keywords.iter().any(|kw| role.contains(kw)) {
            return *category;
        }
    }
    RoleCategory::General
}

/// Role multiplier lookup. India gets a distinct technical multiplier — the
/// fresher market there is saturated enough that the relative premium differs.
fn role_multiplier(category: RoleCategory, region: Region) -> f64 {
    match category {
        RoleCategory::Technical => {
            if region.is_india() {
                1.6
            } else {
                1.4
            }
        }
        RoleCategory::DataAi => 1.9,
        RoleCategory::Management => 1.5,
        RoleCategory::Creative => 1.1,
        RoleCategory::Internship => 0.4,
        RoleCategory::Operations => 0.9,
        RoleCategory::General => 1.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Estimation
// ────────────────────────────────────────────────────────────────────────────

/// A computed estimate: the rounded annual figure plus its display form.
#[derive(Debug, Clone, Serialize)]
pub struct SalaryEstimate {
    pub amount: i64,
    pub currency: &'static str,
    pub formatted: String,
}

/// Draws the bounded market-instability variance for a region.
/// India swings ±10% (Bangalore/Gurgaon vs Tier 2/3 spread); everywhere else ±7.5%.
fn draw_variance(region: Region, rng: &mut impl Rng) -> f64 {
    if region.is_india() {
        0.9 + rng.gen::<f64>() * 0.2
    } else {
        0.9 + rng.gen::<f64>() * 0.15
    }
}

/// Estimates annual compensation. The only randomness is the variance draw
/// from `rng`; everything else is a fixed multiplier chain.
pub fn estimate(
    role: &str,
    tier: ExperienceTier,
    region: Region,
    rng: &mut impl Rng,
) -> SalaryEstimate {
    let variance = draw_variance(region, rng);
    estimate_with_variance(role, tier, region, variance)
}

/// The deterministic core, with the variance factor supplied by the caller.
pub fn estimate_with_variance(
    role: &str,
    tier: ExperienceTier,
    region: Region,
    variance: f64,
) -> SalaryEstimate {
    let mut amount = region.base();

    amount *= role_multiplier(classify_role(role), region);
    amount *= tier.multiplier();

    if region.is_us_hcol() {
        amount *= HCOL_UPLIFT;
    }

    amount *= variance;
    amount *= SATURATION_DAMPENER;

    let rounded = round_for_region(amount, region);

    SalaryEstimate {
        amount: rounded,
        currency: region.currency(),
        formatted: format_amount(rounded, region),
    }
}

/// India rounds to the nearest 10,000; everywhere else to the nearest 500.
fn round_for_region(amount: f64, region: Region) -> i64 {
    let unit = if region.is_india() { 10_000.0 } else { 500.0 };
    ((amount / unit).round() * unit) as i64
}

/// India at or above one lakh renders in LPA notation; everything else gets
/// comma thousands separators.
fn format_amount(amount: i64, region: Region) -> String {
    if region.is_india() && amount >= 100_000 {
        return format!("{:.2} LPA", amount as f64 / 100_000.0);
    }
    group_thousands(amount)
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_region_bases_and_currencies() {
        let cases = [
            (Region::India, 240_000.0, "₹"),
            (Region::Asia, 12_000.0, "$"),
            (Region::Us, 42_000.0, "$"),
            (Region::Remote, 42_000.0, "$"),
            (Region::Eu, 28_000.0, "€"),
            (Region::Uk, 28_000.0, "£"),
            (Region::SanFrancisco, 42_000.0, "$"),
            (Region::NewYork, 42_000.0, "$"),
        ];
        for (region, base, currency) in cases {
            assert_eq!(region.base(), base, "base mismatch for {region:?}");
            assert_eq!(region.currency(), currency);
        }
    }

    #[test]
    fn test_region_parsing_is_strict() {
        assert_eq!("india".parse::<Region>().unwrap(), Region::India);
        assert_eq!(" UK ".parse::<Region>().unwrap(), Region::Uk);
        assert_eq!("us/remote".parse::<Region>().unwrap(), Region::Remote);
        assert!("mars".parse::<Region>().is_err());
        assert!("".parse::<Region>().is_err());
    }

    #[test]
    fn test_experience_tier_parsing_is_strict() {
        assert_eq!("entry".parse::<ExperienceTier>().unwrap(), ExperienceTier::Entry);
        assert_eq!("Lead".parse::<ExperienceTier>().unwrap(), ExperienceTier::Lead);
        assert!("principal".parse::<ExperienceTier>().is_err());
    }

    #[test]
    fn test_role_classification_first_group_wins() {
        assert_eq!(classify_role("Software Engineer"), RoleCategory::Technical);
        // "engineer" hits the technical group before "data" is tested.
        assert_eq!(classify_role("Data Engineer"), RoleCategory::Technical);
        assert_eq!(classify_role("Data Scientist"), RoleCategory::DataAi);
        assert_eq!(classify_role("Product Manager"), RoleCategory::Management);
        assert_eq!(classify_role("UX Designer"), RoleCategory::Creative);
        assert_eq!(classify_role("Marketing Intern"), RoleCategory::Internship);
        assert_eq!(classify_role("HR Recruiter"), RoleCategory::Operations);
        assert_eq!(classify_role("Astronaut"), RoleCategory::General);
        assert_eq!(classify_role(""), RoleCategory::General);
    }

    #[test]
    fn test_technical_multiplier_india_variant() {
        assert_eq!(role_multiplier(RoleCategory::Technical, Region::India), 1.6);
        assert_eq!(role_multiplier(RoleCategory::Technical, Region::Us), 1.4);
        assert_eq!(role_multiplier(RoleCategory::Technical, Region::Eu), 1.4);
        // Other categories do not vary by region.
        assert_eq!(role_multiplier(RoleCategory::DataAi, Region::India), 1.9);
        assert_eq!(role_multiplier(RoleCategory::DataAi, Region::Us), 1.9);
    }

    #[test]
    fn test_software_engineer_entry_india_example() {
        // 240000 * 1.6 (India technical) * 0.92 = 353280 → nearest 10k → 350000
        let est = estimate_with_variance(
            "Software Engineer",
            ExperienceTier::Entry,
            Region::India,
            1.0,
        );
        assert_eq!(est.amount, 350_000);
        assert_eq!(est.currency, "₹");
        assert_eq!(est.formatted, "3.50 LPA");
    }

    #[test]
    fn test_marketing_intern_entry_us_example() {
        // 42000 * 0.4 (internship) * 0.92 = 15456 → nearest 500 → 15500
        let est = estimate_with_variance(
            "Marketing Intern",
            ExperienceTier::Entry,
            Region::Us,
            1.0,
        );
        assert_eq!(est.amount, 15_500);
        assert_eq!(est.currency, "$");
        assert_eq!(est.formatted, "15,500");
    }

    #[test]
    fn test_empty_role_yields_unmultiplied_base() {
        // 42000 * 0.92 = 38640 → 38500
        let est = estimate_with_variance("", ExperienceTier::Entry, Region::Us, 1.0);
        assert_eq!(est.amount, 38_500);
    }

    #[test]
    fn test_experience_is_strictly_monotonic_at_fixed_variance() {
        for region in [Region::India, Region::Us, Region::Uk] {
            let amounts: Vec<i64> = [
                ExperienceTier::Entry,
                ExperienceTier::Mid,
                ExperienceTier::Senior,
                ExperienceTier::Lead,
            ]
            .into_iter()
            .map(|tier| estimate_with_variance("Software Engineer", tier, region, 1.0).amount)
            .collect();
            for pair in amounts.windows(2) {
                assert!(
                    pair[0] < pair[1],
                    "expected strictly increasing amounts in {region:?}, got {amounts:?}"
                );
            }
        }
    }

    #[test]
    fn test_hcol_uplift_applies_to_sf_and_ny_only() {
        let us = estimate_with_variance("Software Engineer", ExperienceTier::Senior, Region::Us, 1.0);
        let sf = estimate_with_variance(
            "Software Engineer",
            ExperienceTier::Senior,
            Region::SanFrancisco,
            1.0,
        );
        let ny = estimate_with_variance(
            "Software Engineer",
            ExperienceTier::Senior,
            Region::NewYork,
            1.0,
        );
        assert_eq!(sf.amount, ny.amount);
        assert!(sf.amount > us.amount);
        // 42000 * 1.4 * 2.2 * 1.5 * 0.92 = 178516.8 → 178500
        assert_eq!(sf.amount, 178_500);
    }

    #[test]
    fn test_rounding_moduli_hold_under_random_variance() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let india = estimate("Data Scientist", ExperienceTier::Mid, Region::India, &mut rng);
            assert_eq!(india.amount % 10_000, 0);
            let uk = estimate("Data Scientist", ExperienceTier::Mid, Region::Uk, &mut rng);
            assert_eq!(uk.amount % 500, 0);
        }
    }

    #[test]
    fn test_seeded_estimates_are_idempotent() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = estimate("Backend Developer", ExperienceTier::Senior, Region::Eu, &mut a);
        let second = estimate("Backend Developer", ExperienceTier::Senior, Region::Eu, &mut b);
        assert_eq!(first.amount, second.amount);
        assert_eq!(first.formatted, second.formatted);
    }

    #[test]
    fn test_variance_bounds_per_region() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let india = draw_variance(Region::India, &mut rng);
            assert!((0.9..1.1).contains(&india), "india variance {india}");
            let other = draw_variance(Region::Uk, &mut rng);
            assert!((0.9..1.05).contains(&other), "uk variance {other}");
        }
    }

    #[test]
    fn test_lpa_formatting_threshold() {
        assert_eq!(format_amount(350_000, Region::India), "3.50 LPA");
        assert_eq!(format_amount(100_000, Region::India), "1.00 LPA");
        assert_eq!(format_amount(90_000, Region::India), "90,000");
        assert_eq!(format_amount(350_000, Region::Us), "350,000");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(500), "500");
        assert_eq!(group_thousands(15_500), "15,500");
        assert_eq!(group_thousands(1_234_500), "1,234,500");
    }
}
