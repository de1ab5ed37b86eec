//! Alert generation and read-state transitions.
//!
//! Alerts are derived from the generated roster once at startup: subjects
//! are sampled with replacement from the high-risk patients plus a fixed
//! prefix of the medium-risk ones. `is_read` is the only field that ever
//! changes afterwards, and only false→true.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::models::{Alert, AlertType, Patient, RiskLevel};

// ═══════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════

/// Medium-risk patients eligible as alert subjects: a fixed prefix in
/// generation order, not a random sample.
const MEDIUM_POOL_LIMIT: usize = 5;

/// Alert timestamps fall inside this trailing window.
const ALERT_WINDOW_HOURS: i64 = 48;

/// Chance an alert is generated already read.
const PRE_READ_PROBABILITY: f64 = 0.3;

static ALERT_TYPES: [AlertType; 4] = [
    AlertType::RiskIncrease,
    AlertType::MissedAppointment,
    AlertType::NewCondition,
    AlertType::Medication,
];

// ═══════════════════════════════════════════════════════════
// Generation
// ═══════════════════════════════════════════════════════════

/// Generate `count` alerts over the roster, sorted newest-first.
///
/// Returns an empty list when no patient qualifies as a subject (empty
/// roster, or nobody at high/medium risk) rather than sampling from an
/// empty pool.
pub fn generate_alerts(patients: &[Patient], count: usize) -> Vec<Alert> {
    let pool: Vec<&Patient> = patients
        .iter()
        .filter(|p| p.risk_level == RiskLevel::High)
        .chain(
            patients
                .iter()
                .filter(|p| p.risk_level == RiskLevel::Medium)
                .take(MEDIUM_POOL_LIMIT),
        )
        .collect();

    if pool.is_empty() {
        tracing::debug!("no alert-eligible patients, returning empty alert list");
        return Vec::new();
    }

    let mut rng = rand::thread_rng();
    let now = Utc::now();

    let mut alerts: Vec<Alert> = (1..=count)
        .map(|i| {
            let subject = pool[rng.gen_range(0..pool.len())];
            let alert_type = ALERT_TYPES[rng.gen_range(0..ALERT_TYPES.len())].clone();
            let age_secs = rng.gen_range(0..ALERT_WINDOW_HOURS * 3600);
            Alert {
                id: format!("A{}", 1000 + i),
                patient_id: subject.id.clone(),
                patient_name: subject.name.clone(),
                message: alert_type.default_message().into(),
                alert_type,
                timestamp: now - Duration::seconds(age_secs),
                is_read: rng.gen_bool(PRE_READ_PROBABILITY),
            }
        })
        .collect();

    alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    alerts
}

// ═══════════════════════════════════════════════════════════
// Read-state transitions
// ═══════════════════════════════════════════════════════════

/// Return a new list with the matching alert marked read. Unknown ids are
/// a no-op; calling twice with the same id is idempotent.
pub fn mark_alert_read(alerts: &[Alert], alert_id: &str) -> Vec<Alert> {
    alerts
        .iter()
        .map(|alert| {
            let mut alert = alert.clone();
            if alert.id == alert_id {
                alert.is_read = true;
            }
            alert
        })
        .collect()
}

/// Return a new list with every alert marked read.
pub fn mark_all_alerts_read(alerts: &[Alert]) -> Vec<Alert> {
    alerts
        .iter()
        .map(|alert| {
            let mut alert = alert.clone();
            alert.is_read = true;
            alert
        })
        .collect()
}

/// Unread alerts, for the header badge.
pub fn unread_count(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|a| !a.is_read).count()
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
