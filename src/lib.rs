//! # predict-portal
//!
//! Leptos + WASM front-end for the health risk predictor. Feature pages sit
//! behind a navigation guard that asks the hosted auth backend (Supabase)
//! for the current session and redirects signed-out users to `/login`.
//!
//! The crate contains the route table and guard (`routing`), the session
//! oracle (`session`), placeholder pages, and the root `App` component.

pub mod app;
pub mod pages;
pub mod routing;
pub mod session;

/// Browser entry point: wire logging, build the oracle and guard, mount `App`.
///
/// Missing auth configuration is fatal; the app is not mounted.
#[cfg(feature = "csr")]
pub fn start() {
    use std::sync::Arc;

    use leptos::prelude::*;

    use crate::app::App;
    use crate::routing::{ROUTES, RouteName, guard::RouteGuard};
    use crate::session::supabase::{SupabaseAuth, SupabaseConfig};

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match SupabaseConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("auth backend not configured, refusing to start: {e}");
            return;
        }
    };
    let Some(login) = ROUTES.by_name(RouteName::Login) else {
        log::error!("route table has no login route, refusing to start");
        return;
    };
    let guard = match RouteGuard::new(SupabaseAuth::new(config), login) {
        Ok(guard) => Arc::new(guard),
        Err(e) => {
            log::error!("invalid route table: {e}");
            return;
        }
    };

    log::info!("mounting app");
    leptos::mount::mount_to_body(move || view! { <App guard=guard/> });
}
