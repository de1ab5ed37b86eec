//! Authentication provider boundary.
//!
//! The demo ships no real identity service. `MockAuthProvider` returns
//! canned results behind the same trait a real provider would implement,
//! so the presentation layer codes against a stable boundary and a future
//! real provider slots in without touching callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Demo credential accepted by the mock provider.
pub const DEMO_EMAIL: &str = "dr.rajput@example.com";
const DEMO_PASSWORD: &str = "password";
const DEMO_NAME: &str = "Dr. Rajput";

/// Verification codes are exactly this many ASCII digits.
const OTP_LENGTH: usize = 6;

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid verification code")]
    InvalidOtp,

    #[error("Verification code does not belong to this challenge")]
    ChallengeMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Doctor,
    Nurse,
    Admin,
}

/// An authenticated clinician account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// A pending second factor, issued after a successful credential check and
/// consumed by `verify_otp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpChallenge {
    pub id: Uuid,
    pub email: String,
    pub issued_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub authenticated_at: DateTime<Utc>,
}

// ═══════════════════════════════════════════════════════════
// Provider boundary
// ═══════════════════════════════════════════════════════════

/// Two-step authentication: credentials first, then a one-time code.
pub trait AuthProvider: Send + Sync {
    fn login(&self, email: &str, password: &str) -> Result<OtpChallenge, AuthError>;
    fn verify_otp(&self, challenge: &OtpChallenge, code: &str) -> Result<Session, AuthError>;
    fn resend_otp(&self, challenge: &OtpChallenge) -> Result<(), AuthError>;
}

/// Canned provider for the demo. Accepts the single demo credential and
/// any six-digit code.
pub struct MockAuthProvider;

impl AuthProvider for MockAuthProvider {
    fn login(&self, email: &str, password: &str) -> Result<OtpChallenge, AuthError> {
        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            tracing::info!("credentials accepted, issuing OTP challenge");
            Ok(OtpChallenge {
                id: Uuid::new_v4(),
                email: email.to_string(),
                issued_at: Utc::now(),
            })
        } else {
            tracing::debug!("rejected login attempt for {email}");
            Err(AuthError::InvalidCredentials)
        }
    }

    fn verify_otp(&self, challenge: &OtpChallenge, code: &str) -> Result<Session, AuthError> {
        if challenge.email != DEMO_EMAIL {
            return Err(AuthError::ChallengeMismatch);
        }
        if code.len() != OTP_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(AuthError::InvalidOtp);
        }
        Ok(Session {
            user: User {
                id: Uuid::new_v4(),
                name: DEMO_NAME.into(),
                email: DEMO_EMAIL.into(),
                role: UserRole::Doctor,
            },
            authenticated_at: Utc::now(),
        })
    }

    fn resend_otp(&self, challenge: &OtpChallenge) -> Result<(), AuthError> {
        tracing::info!("re-issuing OTP for challenge {}", challenge.id);
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
