//! Navigation guard that gates protected routes behind a session check.
//!
//! ARCHITECTURE
//! ============
//! Public destinations resolve immediately without touching the oracle.
//! Protected destinations await exactly one `current_session()` call per
//! navigation; nothing is cached between navigations.
//!
//! ERROR HANDLING
//! ==============
//! Oracle failures fail closed: the caller is sent to login and the error is
//! logged at warn level. The guard never surfaces an error to the router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::{NavigationIntent, RouteDescriptor};
use crate::session::SessionOracle;

/// Outcome of a single guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(RouteDescriptor),
}

impl GuardDecision {
    /// What the shell should do with this decision.
    #[must_use]
    pub fn followup(self) -> Followup {
        match self {
            Self::Proceed => Followup { render: true, redirect_to: None, replace: false },
            // Replace the committed entry so Back skips the guarded route.
            Self::Redirect(target) => Followup { render: false, redirect_to: Some(target.path), replace: true },
        }
    }
}

/// Router-side effect of a resolved decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Followup {
    /// Render the destination and record it as the next navigation's origin.
    pub render: bool,
    pub redirect_to: Option<&'static str>,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GuardError {
    #[error("login route {path} must not require auth")]
    ProtectedLoginRoute { path: &'static str },
}

/// Route guard bound to an injected session oracle.
#[derive(Debug)]
pub struct RouteGuard<O> {
    oracle: O,
    login: RouteDescriptor,
}

impl<O: SessionOracle> RouteGuard<O> {
    /// Build a guard that redirects unauthenticated callers to `login`.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::ProtectedLoginRoute`] if `login` itself requires
    /// auth, since every redirect would be guarded again.
    pub fn new(oracle: O, login: RouteDescriptor) -> Result<Self, GuardError> {
        if login.requires_auth {
            return Err(GuardError::ProtectedLoginRoute { path: login.path });
        }
        Ok(Self { oracle, login })
    }

    #[must_use]
    pub fn login(&self) -> RouteDescriptor {
        self.login
    }

    #[must_use]
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Decide whether `intent` may proceed.
    pub async fn check(&self, intent: &NavigationIntent) -> GuardDecision {
        let destination = intent.destination;
        if !destination.requires_auth {
            return GuardDecision::Proceed;
        }

        match self.oracle.current_session().await {
            Ok(Some(_)) => {
                log::debug!("session ok for {}", destination.path);
                GuardDecision::Proceed
            }
            Ok(None) => {
                log::info!("not signed in, redirecting {} -> {}", destination.path, self.login.path);
                GuardDecision::Redirect(self.login)
            }
            Err(e) => {
                log::warn!(
                    "session check failed for {}, redirecting to {}: {e}",
                    destination.path,
                    self.login.path
                );
                GuardDecision::Redirect(self.login)
            }
        }
    }
}
