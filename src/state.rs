//! Fixture construction and shared dashboard state.
//!
//! The fixture is generated once at process start and handed to the
//! presentation layer as an explicitly constructed value — no module-level
//! singletons. `DashboardState` owns it for the session: the roster and
//! distribution are immutable, the alert read flags are the only mutable
//! state.

use std::sync::RwLock;

use thiserror::Error;

use crate::alerts;
use crate::config;
use crate::models::{Alert, Patient, PatientFilter, PatientTab, RiskDistribution};
use crate::roster;
use crate::search;

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Internal lock error")]
    LockPoisoned,
}

// ═══════════════════════════════════════════════════════════
// Fixture
// ═══════════════════════════════════════════════════════════

/// The generated dataset, treated as ground truth for the session.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub patients: Vec<Patient>,
    pub distribution: RiskDistribution,
    pub alerts: Vec<Alert>,
}

impl Fixture {
    /// Generate a fresh fixture. Non-seeded: every call produces different
    /// data.
    pub fn generate(patient_count: usize, alert_count: usize) -> Self {
        let patients = roster::generate_patients(patient_count);
        let distribution = roster::compute_risk_distribution(&patients);
        let alerts = alerts::generate_alerts(&patients, alert_count);
        tracing::info!(
            "fixture generated: {} patients ({} high risk), {} alerts",
            patients.len(),
            distribution.high,
            alerts.len()
        );
        Self {
            patients,
            distribution,
            alerts,
        }
    }

    /// Fixture with the default demo counts.
    pub fn demo() -> Self {
        Self::generate(config::DEFAULT_PATIENT_COUNT, config::DEFAULT_ALERT_COUNT)
    }
}

// ═══════════════════════════════════════════════════════════
// DashboardState
// ═══════════════════════════════════════════════════════════

/// Session-lifetime dashboard state, shared behind an `Arc` by callers
/// that need it on more than one thread. Reads dominate; the alert list
/// is the single writer-mutable member.
pub struct DashboardState {
    patients: Vec<Patient>,
    distribution: RiskDistribution,
    alerts: RwLock<Vec<Alert>>,
}

impl DashboardState {
    pub fn new(fixture: Fixture) -> Self {
        Self {
            patients: fixture.patients,
            distribution: fixture.distribution,
            alerts: RwLock::new(fixture.alerts),
        }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn distribution(&self) -> &RiskDistribution {
        &self.distribution
    }

    /// Look up a roster entry by display id.
    pub fn patient(&self, patient_id: &str) -> Option<Patient> {
        self.patients.iter().find(|p| p.id == patient_id).cloned()
    }

    /// The visible roster subset for the current search state.
    pub fn search(&self, query: &str, filter: &PatientFilter, tab: PatientTab) -> Vec<Patient> {
        search::filter_patients(&self.patients, query, filter, tab)
    }

    /// Snapshot of the alert list, newest first.
    pub fn alerts(&self) -> Result<Vec<Alert>, StateError> {
        let guard = self.alerts.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(guard.clone())
    }

    pub fn unread_alert_count(&self) -> Result<usize, StateError> {
        let guard = self.alerts.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(alerts::unread_count(&guard))
    }

    /// Mark one alert read and return the updated snapshot. Unknown ids
    /// leave the list unchanged.
    pub fn mark_alert_read(&self, alert_id: &str) -> Result<Vec<Alert>, StateError> {
        let mut guard = self.alerts.write().map_err(|_| StateError::LockPoisoned)?;
        *guard = alerts::mark_alert_read(&guard, alert_id);
        Ok(guard.clone())
    }

    /// Mark every alert read and return the updated snapshot.
    pub fn mark_all_alerts_read(&self) -> Result<Vec<Alert>, StateError> {
        let mut guard = self.alerts.write().map_err(|_| StateError::LockPoisoned)?;
        *guard = alerts::mark_all_alerts_read(&guard);
        Ok(guard.clone())
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
