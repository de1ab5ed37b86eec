//! Per-patient detail views: risk timeline, contributing factors, and
//! intervention recommendations.
//!
//! Everything here is derived on demand from a single `Patient` record; the
//! timeline synthesizes a plausible 6-month trend around the patient's
//! current score (the roster keeps no history).

use chrono::{Months, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Patient, RiskLevel};

/// Lowest score the timeline will show.
const TIMELINE_SCORE_FLOOR: i32 = 10;
const TIMELINE_SCORE_CEIL: i32 = 100;

/// Months of history synthesized for the timeline, including the current
/// month.
const TIMELINE_MONTHS: u32 = 6;

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// One point on the 6-month risk timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Short month label for the chart axis, e.g. "Mar".
    pub month: String,
    pub date: NaiveDate,
    pub score: u8,
}

/// A condition or demographic trait contributing to the risk score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub impact: RiskLevel,
}

// ═══════════════════════════════════════════════════════════
// Risk timeline
// ═══════════════════════════════════════════════════════════

/// Synthesize the patient's 6-month score trend, oldest first.
///
/// Trend shape depends on the risk level (high trends toward the present,
/// medium fluctuates, low stays flat); the newest point always equals the
/// patient's current score, and every point is clamped to [10, 100].
pub fn risk_timeline(patient: &Patient) -> Vec<TimelinePoint> {
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();

    (0..TIMELINE_MONTHS)
        .rev()
        .map(|months_ago| {
            let date = today - Months::new(months_ago);
            let score = if months_ago == 0 {
                patient.risk_score
            } else {
                synth_score(&mut rng, &patient.risk_level, months_ago)
            };
            TimelinePoint {
                month: date.format("%b").to_string(),
                date,
                score,
            }
        })
        .collect()
}

fn synth_score(rng: &mut impl Rng, level: &RiskLevel, months_ago: u32) -> u8 {
    let (base, spread) = match level {
        RiskLevel::High => (60.0 + f64::from(months_ago) * 6.0, 5.0),
        RiskLevel::Medium => (50.0 + f64::from(months_ago).sin() * 10.0, 4.0),
        RiskLevel::Low => (30.0 + if months_ago < 3 { -2.0 } else { 2.0 }, 3.0),
    };
    let score = (base + rng.gen_range(-spread..spread)).round() as i32;
    score.clamp(TIMELINE_SCORE_FLOOR, TIMELINE_SCORE_CEIL) as u8
}

// ═══════════════════════════════════════════════════════════
// Risk factors
// ═══════════════════════════════════════════════════════════

/// Derive contributing factors from the patient's conditions and age.
pub fn risk_factors(patient: &Patient) -> Vec<RiskFactor> {
    let has_diabetes = patient.conditions.iter().any(|c| c == "Diabetes Type 2");

    let mut factors: Vec<RiskFactor> = patient
        .conditions
        .iter()
        .map(|condition| {
            let impact = match condition.as_str() {
                "Heart Disease" | "Chronic Kidney Disease" => RiskLevel::High,
                "Hypertension" if has_diabetes => RiskLevel::High,
                "Obesity" if patient.age > 50 => RiskLevel::Medium,
                "Asthma" | "Arthritis" => RiskLevel::Low,
                _ => RiskLevel::Medium,
            };
            RiskFactor {
                factor: condition.clone(),
                impact,
            }
        })
        .collect();

    if patient.age > 65 {
        factors.push(RiskFactor {
            factor: "Age above 65".into(),
            impact: if patient.age > 75 {
                RiskLevel::High
            } else {
                RiskLevel::Medium
            },
        });
    }

    factors
}

// ═══════════════════════════════════════════════════════════
// Recommendations
// ═══════════════════════════════════════════════════════════

/// Intervention recommendations from the patient's conditions and risk
/// level. Always returns at least two entries.
pub fn recommendations(patient: &Patient) -> Vec<String> {
    let has = |label: &str| patient.conditions.iter().any(|c| c == label);
    let mut recs: Vec<String> = Vec::new();

    if has("Hypertension") {
        recs.push("Regular blood pressure monitoring".into());
        recs.push("Dietary sodium reduction plan".into());
    }
    if has("Diabetes Type 2") {
        recs.push("HbA1c level check every 3 months".into());
        recs.push("Referral to diabetic education program".into());
    }
    if has("Heart Disease") {
        recs.push("Cardiology follow-up within 2 weeks".into());
        recs.push("Echocardiogram evaluation".into());
    }
    if has("Obesity") {
        recs.push("Nutritional counseling referral".into());
        recs.push("Structured weight management program".into());
    }
    if patient.risk_level == RiskLevel::High {
        recs.push("Weekly telehealth check-ins".into());
        recs.push("Comprehensive medication review".into());
    }

    if recs.len() < 2 {
        recs.push("Regular wellness check-ups".into());
        recs.push("Health education resources".into());
    }

    recs
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
