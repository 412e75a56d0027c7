use super::*;
use crate::session::{OracleError, SessionOracle};
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

fn config() -> SupabaseConfig {
    SupabaseConfig::from_lookup(lookup_from(&[
        (URL_VAR, "https://abcdefgh.supabase.co"),
        (ANON_KEY_VAR, "anon-key"),
    ]))
    .unwrap()
}

// =============================================================
// SupabaseConfig::from_lookup
// =============================================================

#[test]
fn from_lookup_all_set() {
    let cfg = config();
    assert_eq!(cfg.url.as_str(), "https://abcdefgh.supabase.co/");
    assert_eq!(cfg.anon_key, "anon-key");
}

#[test]
fn from_lookup_missing_url() {
    let err = SupabaseConfig::from_lookup(lookup_from(&[(ANON_KEY_VAR, "k")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { var: URL_VAR }));
}

#[test]
fn from_lookup_missing_anon_key() {
    let err = SupabaseConfig::from_lookup(lookup_from(&[(URL_VAR, "https://x.supabase.co")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { var: ANON_KEY_VAR }));
}

#[test]
fn from_lookup_blank_counts_as_missing() {
    let err = SupabaseConfig::from_lookup(lookup_from(&[(URL_VAR, "https://x.supabase.co"), (ANON_KEY_VAR, "   ")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Missing { var: ANON_KEY_VAR }));
}

#[test]
fn from_lookup_all_missing_reports_url_first() {
    let err = SupabaseConfig::from_lookup(|_| None).unwrap_err();
    assert_eq!(err.to_string(), "missing required configuration value SUPABASE_URL");
}

#[test]
fn from_lookup_invalid_url() {
    let err = SupabaseConfig::from_lookup(lookup_from(&[(URL_VAR, "not a url"), (ANON_KEY_VAR, "k")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { var: URL_VAR, .. }));
}

#[test]
fn from_lookup_trims_trailing_slash() {
    let cfg = SupabaseConfig::from_lookup(lookup_from(&[
        (URL_VAR, "https://abcdefgh.supabase.co/"),
        (ANON_KEY_VAR, "k"),
    ]))
    .unwrap();
    assert_eq!(cfg.user_endpoint(), "https://abcdefgh.supabase.co/auth/v1/user");
}

// =============================================================
// Derived names
// =============================================================

#[test]
fn storage_key_uses_project_ref() {
    assert_eq!(config().storage_key(), "sb-abcdefgh-auth-token");
}

#[test]
fn storage_key_for_local_instance() {
    let cfg = SupabaseConfig::from_lookup(lookup_from(&[(URL_VAR, "http://127.0.0.1:54321"), (ANON_KEY_VAR, "k")]))
        .unwrap();
    assert_eq!(cfg.storage_key(), "sb-127-auth-token");
}

#[test]
fn user_endpoint_appends_auth_path() {
    assert_eq!(config().user_endpoint(), "https://abcdefgh.supabase.co/auth/v1/user");
}

#[test]
fn user_endpoint_keeps_base_path() {
    let cfg = SupabaseConfig::from_lookup(lookup_from(&[(URL_VAR, "https://proxy.example.com/sb"), (ANON_KEY_VAR, "k")]))
        .unwrap();
    assert_eq!(cfg.user_endpoint(), "https://proxy.example.com/sb/auth/v1/user");
}

// =============================================================
// classify_user_status
// =============================================================

#[test]
fn classify_success_statuses() {
    assert_eq!(classify_user_status(200), UserCheck::Valid);
    assert_eq!(classify_user_status(204), UserCheck::Valid);
}

#[test]
fn classify_auth_rejections() {
    assert_eq!(classify_user_status(401), UserCheck::Rejected);
    assert_eq!(classify_user_status(403), UserCheck::Rejected);
}

#[test]
fn classify_other_failures() {
    for status in [400, 404, 429, 500, 503] {
        assert_eq!(classify_user_status(status), UserCheck::Failed, "status {status}");
    }
}

// =============================================================
// SupabaseAuth outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn current_session_is_none_outside_browser() {
    let oracle = SupabaseAuth::new(config());
    let session = futures::executor::block_on(oracle.current_session()).unwrap();
    assert!(session.is_none());
}

// =============================================================
// usable_stored_session
// =============================================================

const STORED: &str = r#"{
    "access_token": "access",
    "token_type": "bearer",
    "expires_at": 1700003600,
    "refresh_token": "r-1",
    "user": { "id": "u1", "email": "u1@example.com" }
}"#;

#[test]
fn usable_stored_session_nothing_stored() {
    assert_eq!(usable_stored_session(None, 1_700_000_000), Ok(None));
}

#[test]
fn usable_stored_session_live_session() {
    let session = usable_stored_session(Some(STORED), 1_700_000_000).unwrap().unwrap();
    assert_eq!(session.access_token, "access");
    assert_eq!(session.user.id, "u1");
}

#[test]
fn usable_stored_session_expired_is_none() {
    assert_eq!(usable_stored_session(Some(STORED), 1_700_003_600), Ok(None));
}

#[test]
fn usable_stored_session_malformed() {
    let err = usable_stored_session(Some("{\"access_token\":"), 0).unwrap_err();
    assert!(matches!(err, OracleError::Malformed(_)));
}

#[test]
fn usable_stored_session_empty_entry_is_malformed() {
    assert!(matches!(usable_stored_session(Some(""), 0), Err(OracleError::Malformed(_))));
}
