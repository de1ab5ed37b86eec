//! Demo entry point: boots tracing, generates the session fixture, and logs
//! a dashboard summary. Stands in for the presentation layer, which is out
//! of scope for this crate.

use tracing_subscriber::EnvFilter;

use caresight::config;
use caresight::models::{PatientFilter, PatientTab};
use caresight::state::{DashboardState, Fixture};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let state = DashboardState::new(Fixture::demo());

    let distribution = state.distribution();
    tracing::info!(
        "roster ready: {} high / {} medium / {} low risk",
        distribution.high,
        distribution.medium,
        distribution.low
    );

    match state.unread_alert_count() {
        Ok(unread) => tracing::info!("{unread} unread alerts"),
        Err(e) => tracing::warn!("alert state unavailable: {e}"),
    }

    let high_risk = state.search("", &PatientFilter::default(), PatientTab::HighRisk);
    for patient in high_risk.iter().take(3) {
        tracing::info!(
            "high risk: {} ({}, score {})",
            patient.name,
            patient.id,
            patient.risk_score
        );
    }
}
