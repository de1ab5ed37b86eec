//! Synthetic patient roster generation.
//!
//! Produces the read-only patient fixture the dashboard runs on. Randomness
//! is non-seeded (`rand::thread_rng`), so every process start yields a fresh
//! roster; tests assert invariants, never exact values.

use chrono::{Duration, Months, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{ContactInfo, Gender, Patient, RiskDistribution, RiskLevel};

// ═══════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════

/// Fixed vocabulary of chronic conditions. Each patient carries 1–3 of
/// these, drawn without replacement.
pub const CONDITIONS: [&str; 10] = [
    "Hypertension",
    "Diabetes Type 2",
    "Obesity",
    "Heart Disease",
    "Asthma",
    "COPD",
    "Depression",
    "Anxiety",
    "Arthritis",
    "Chronic Kidney Disease",
];

/// Checkup dates fall inside this trailing window.
const CHECKUP_WINDOW_MONTHS: u32 = 6;

// ═══════════════════════════════════════════════════════════
// Generation
// ═══════════════════════════════════════════════════════════

/// Generate `count` synthetic patients with sequential display ids.
///
/// Risk assignment partitions a uniform draw: 25% high, 35% medium, 40% low
/// in expectation (law-of-large-numbers only; small rosters vary). The score
/// is drawn uniformly inside the band the level implies.
pub fn generate_patients(count: usize) -> Vec<Patient> {
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();

    (1..=count)
        .map(|i| {
            let (risk_level, risk_score) = draw_risk(&mut rng);
            Patient {
                id: format!("P{}", 1000 + i),
                name: format!("Patient {i}"),
                age: rng.gen_range(20..80),
                gender: if rng.gen_bool(0.5) {
                    Gender::Male
                } else {
                    Gender::Female
                },
                risk_level,
                risk_score,
                conditions: draw_conditions(&mut rng),
                last_checkup: draw_checkup_date(&mut rng, today),
                contact: ContactInfo {
                    email: format!("patient{i}@example.com"),
                    phone: format!(
                        "({}) {}-{}",
                        rng.gen_range(100..1000),
                        rng.gen_range(100..1000),
                        rng.gen_range(1000..10000)
                    ),
                },
            }
        })
        .collect()
}

/// Count patients per risk level. Recomputed from scratch on every call.
pub fn compute_risk_distribution(patients: &[Patient]) -> RiskDistribution {
    let mut distribution = RiskDistribution::default();
    for patient in patients {
        match patient.risk_level {
            RiskLevel::High => distribution.high += 1,
            RiskLevel::Medium => distribution.medium += 1,
            RiskLevel::Low => distribution.low += 1,
        }
    }
    distribution
}

// ═══════════════════════════════════════════════════════════
// Draw helpers
// ═══════════════════════════════════════════════════════════

fn draw_risk(rng: &mut impl Rng) -> (RiskLevel, u8) {
    let r: f64 = rng.gen();
    if r < 0.25 {
        (RiskLevel::High, rng.gen_range(80..=100))
    } else if r < 0.60 {
        (RiskLevel::Medium, rng.gen_range(50..=79))
    } else {
        (RiskLevel::Low, rng.gen_range(10..=49))
    }
}

/// 1–3 distinct conditions via an unbiased Fisher–Yates shuffle prefix.
fn draw_conditions(rng: &mut impl Rng) -> Vec<String> {
    let mut pool = CONDITIONS;
    pool.shuffle(rng);
    let take = rng.gen_range(1..=3);
    pool[..take].iter().map(|c| c.to_string()).collect()
}

fn draw_checkup_date(rng: &mut impl Rng, today: NaiveDate) -> NaiveDate {
    let window_start = today - Months::new(CHECKUP_WINDOW_MONTHS);
    let span_days = (today - window_start).num_days();
    window_start + Duration::days(rng.gen_range(0..=span_days))
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_stay_inside_their_band() {
        for patient in generate_patients(300) {
            let (lo, hi) = patient.risk_level.score_band();
            assert!(
                patient.risk_score >= lo && patient.risk_score <= hi,
                "{} score {} outside {:?} band",
                patient.id,
                patient.risk_score,
                patient.risk_level
            );
        }
    }

    #[test]
    fn conditions_are_one_to_three_and_distinct() {
        for patient in generate_patients(200) {
            assert!((1..=3).contains(&patient.conditions.len()));
            for (i, a) in patient.conditions.iter().enumerate() {
                assert!(CONDITIONS.contains(&a.as_str()));
                assert!(!patient.conditions[i + 1..].contains(a), "duplicate in {:?}", patient.conditions);
            }
        }
    }

    #[test]
    fn ids_are_sequential_from_p1001() {
        let patients = generate_patients(3);
        let ids: Vec<&str> = patients.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P1001", "P1002", "P1003"]);
    }

    #[test]
    fn ages_fall_in_generation_range() {
        for patient in generate_patients(200) {
            assert!((20..80).contains(&patient.age));
        }
    }

    #[test]
    fn generated_gender_is_binary() {
        // The Other variant exists in the vocabulary but is never drawn.
        for patient in generate_patients(100) {
            assert!(matches!(patient.gender, Gender::Male | Gender::Female));
        }
    }

    #[test]
    fn checkup_within_trailing_six_months() {
        let today = Utc::now().date_naive();
        let window_start = today - Months::new(CHECKUP_WINDOW_MONTHS);
        for patient in generate_patients(100) {
            assert!(patient.last_checkup >= window_start);
            assert!(patient.last_checkup <= today);
        }
    }

    #[test]
    fn distribution_counts_sum_to_roster_size() {
        let patients = generate_patients(73);
        let dist = compute_risk_distribution(&patients);
        assert_eq!(dist.total(), patients.len());
    }

    #[test]
    fn empty_roster_distribution_is_all_zero() {
        let dist = compute_risk_distribution(&[]);
        assert_eq!(dist, RiskDistribution::default());
        assert_eq!(dist.total(), 0);
    }

    #[test]
    fn zero_count_yields_empty_roster() {
        assert!(generate_patients(0).is_empty());
    }
}
