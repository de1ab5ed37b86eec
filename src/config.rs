/// Application-level constants
pub const APP_NAME: &str = "CareSight";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Roster size generated at startup.
pub const DEFAULT_PATIENT_COUNT: usize = 50;

/// Alerts derived from the roster at startup.
pub const DEFAULT_ALERT_COUNT: usize = 15;

/// Fallback tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "caresight=info"
}
