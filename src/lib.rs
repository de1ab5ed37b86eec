//! CareSight — in-process data core of a clinical risk dashboard demo.
//!
//! Generates a synthetic patient roster with computed risk levels, derives
//! alert notifications from it, answers multi-criteria roster searches, and
//! produces per-patient insight views. All data is synthetic and lives in
//! memory for the process lifetime; there is no backend, persistence layer,
//! or real authentication service.

pub mod alerts;
pub mod auth;
pub mod config;
pub mod insights;
pub mod models;
pub mod roster;
pub mod search;
pub mod state;
