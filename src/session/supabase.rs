//! Supabase-backed [`SessionOracle`].
//!
//! ARCHITECTURE
//! ============
//! The hosted JS SDK keeps the signed-in session in `localStorage` under
//! `sb-<project-ref>-auth-token`. This oracle reads that entry, drops it if it
//! is expired, and confirms the access token with `GET /auth/v1/user` so a
//! revoked session is not trusted.
//!
//! Browser-side (csr): real storage + HTTP via `web-sys` and `gloo-net`.
//! Elsewhere: always reports no session, so protected views never render
//! outside the browser.

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use async_trait::async_trait;
use url::Url;

use super::{OracleError, Session, SessionOracle};

pub const URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required configuration value {var}")]
    Missing { var: &'static str },
    #[error("invalid {var} '{value}': {source}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Connection settings for the hosted auth backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: Url,
    pub anon_key: String,
}

impl SupabaseConfig {
    /// Build config from an arbitrary key lookup.
    ///
    /// Required:
    /// - `SUPABASE_URL`: project URL, e.g. `https://abcd.supabase.co`
    /// - `SUPABASE_ANON_KEY`: public anonymous API key
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for absent or blank values and
    /// [`ConfigError::InvalidUrl`] when the URL does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = required(&lookup, URL_VAR)?;
        let anon_key = required(&lookup, ANON_KEY_VAR)?;

        let trimmed = raw_url.trim_end_matches('/');
        let url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidUrl {
            var: URL_VAR,
            value: raw_url.clone(),
            source,
        })?;

        Ok(Self { url, anon_key })
    }

    /// Build config from values baked in at compile time.
    ///
    /// # Errors
    ///
    /// See [`SupabaseConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            URL_VAR => option_env!("SUPABASE_URL").map(str::to_owned),
            ANON_KEY_VAR => option_env!("SUPABASE_ANON_KEY").map(str::to_owned),
            _ => None,
        })
    }

    /// `localStorage` key the SDK persists the session under.
    #[must_use]
    pub fn storage_key(&self) -> String {
        let project_ref = self
            .url
            .host_str()
            .and_then(|host| host.split('.').next())
            .unwrap_or_default();
        format!("sb-{project_ref}-auth-token")
    }

    /// Endpoint that returns the user for a bearer access token.
    #[must_use]
    pub fn user_endpoint(&self) -> String {
        format!("{}/auth/v1/user", self.url.as_str().trim_end_matches('/'))
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing { var })
}

/// How a `/auth/v1/user` status maps onto the oracle's answer.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UserCheck {
    Valid,
    Rejected,
    Failed,
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn classify_user_status(status: u16) -> UserCheck {
    match status {
        200..=299 => UserCheck::Valid,
        401 | 403 => UserCheck::Rejected,
        _ => UserCheck::Failed,
    }
}

/// Session oracle backed by the browser's stored Supabase session.
#[derive(Debug, Clone)]
pub struct SupabaseAuth {
    config: SupabaseConfig,
}

impl SupabaseAuth {
    #[must_use]
    pub fn new(config: SupabaseConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }
}

/// Turn the raw storage entry into a session worth verifying.
///
/// Nothing stored or an expired session is `Ok(None)`; an unreadable payload
/// is [`OracleError::Malformed`].
#[cfg(any(test, feature = "csr"))]
pub(crate) fn usable_stored_session(raw: Option<&str>, now_secs: i64) -> Result<Option<Session>, OracleError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let session = Session::from_json(raw)?;
    if session.is_expired(now_secs) {
        log::debug!("stored session expired");
        return Ok(None);
    }
    Ok(Some(session))
}

#[async_trait(?Send)]
impl SessionOracle for SupabaseAuth {
    async fn current_session(&self) -> Result<Option<Session>, OracleError> {
        #[cfg(feature = "csr")]
        {
            let raw = read_stored_session(&self.config.storage_key())?;
            match usable_stored_session(raw.as_deref(), now_secs())? {
                Some(session) => self.verify(session).await,
                None => Ok(None),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }
}

#[cfg(feature = "csr")]
impl SupabaseAuth {
    /// Confirm the access token with the backend and refresh the user record.
    async fn verify(&self, session: Session) -> Result<Option<Session>, OracleError> {
        let resp = gloo_net::http::Request::get(&self.config.user_endpoint())
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", session.access_token))
            .send()
            .await
            .map_err(|e| OracleError::Unavailable(e.to_string()))?;

        match classify_user_status(resp.status()) {
            UserCheck::Valid => {
                let user = resp
                    .json::<super::SessionUser>()
                    .await
                    .map_err(|e| OracleError::Malformed(e.to_string()))?;
                Ok(Some(Session { user, ..session }))
            }
            UserCheck::Rejected => Ok(None),
            UserCheck::Failed => Err(OracleError::Unavailable(format!("user lookup failed: {}", resp.status()))),
        }
    }
}

#[cfg(feature = "csr")]
fn read_stored_session(key: &str) -> Result<Option<String>, OracleError> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| OracleError::Unavailable("local storage unavailable".to_owned()))?;
    storage
        .get_item(key)
        .map_err(|_| OracleError::Unavailable("local storage read failed".to_owned()))
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation)]
fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}
