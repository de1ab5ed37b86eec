use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::AlertType;

/// A risk-relevant notification tied to a patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Display id, sequential: "A1001", "A1002", ...
    pub id: String,
    pub patient_id: String,
    /// Snapshot of the patient's name at generation time. Not re-synced;
    /// the roster is immutable after generation, so it cannot drift.
    pub patient_name: String,
    pub alert_type: AlertType,
    /// Fixed per-type message, see `AlertType::default_message`.
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// The only mutable field in the fixture. Transitions false→true via
    /// mark-as-read; never back.
    pub is_read: bool,
}

impl AlertType {
    /// The fixed notification message for this alert type.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::RiskIncrease => "Risk score increased significantly",
            Self::MissedAppointment => "Missed scheduled follow-up appointment",
            Self::NewCondition => "New condition detected in recent test results",
            Self::Medication => "Prescription refill needed within 7 days",
        }
    }
}
