//! Session model and the oracle capability the route guard consults.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosted auth backend owns sessions end to end. This crate only asks
//! "is there a current session?" through [`SessionOracle`] and never writes
//! session state back.


pub mod supabase;

use async_trait::async_trait;
use serde::Deserialize;

/// Seconds before `expires_at` at which a session is already treated as expired.
pub const EXPIRY_MARGIN_SECS: i64 = 30;

/// Identity attached to a session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionUser {
    /// Auth user identifier (UUID string).
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Point-in-time snapshot of an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Expiry as seconds since the Unix epoch.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

impl Session {
    /// Parse a session from the JSON document the auth SDK stores.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::Malformed`] if the payload is not a session.
    pub fn from_json(raw: &str) -> Result<Self, OracleError> {
        serde_json::from_str(raw).map_err(|e| OracleError::Malformed(e.to_string()))
    }

    /// Whether the session is past (or within the margin of) its expiry.
    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at
            .is_some_and(|exp| exp.saturating_sub(EXPIRY_MARGIN_SECS) <= now_secs)
    }
}

/// Failure talking to the session oracle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// The backend or the local session store could not be reached.
    #[error("session oracle unavailable: {0}")]
    Unavailable(String),
    /// A stored or returned payload could not be parsed.
    #[error("malformed session payload: {0}")]
    Malformed(String),
}

/// The single capability the guard needs from the auth backend.
///
/// Futures are `?Send` since browser fetches are bound to the JS thread.
#[async_trait(?Send)]
pub trait SessionOracle {
    /// Fetch the current session, or `None` when nobody is signed in.
    async fn current_session(&self) -> Result<Option<Session>, OracleError>;
}
