use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{Gender, RiskLevel};

/// A patient on the dashboard roster.
///
/// Records are generated once at startup and immutable afterwards; the
/// `risk_score` always lies inside the band implied by `risk_level`
/// (generator-enforced, no separate validation layer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Display id, sequential: "P1001", "P1002", ...
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub risk_level: RiskLevel,
    /// 0–100 severity metric underlying `risk_level`.
    pub risk_score: u8,
    /// 1–3 distinct labels from the fixed condition vocabulary.
    pub conditions: Vec<String>,
    pub last_checkup: NaiveDate,
    pub contact: ContactInfo,
}

/// Display-only contact details. Never validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

/// Counts of patients per risk level. Always recomputed from the roster,
/// never incrementally maintained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskDistribution {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}
