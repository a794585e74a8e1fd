use tracing::debug;

use crate::auth::Session;

use super::ResolvedRoute;

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Continue to the requested route.
    Proceed,
    /// Send the visitor to the login route.
    RedirectToLogin,
    /// Send an already-authenticated visitor to the default route.
    RedirectToDefault,
}

/// Runs before every route transition. Stateless: the decision is
/// recomputed from the target and the session on each call.
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    login_route: String,
    default_route: String,
}

impl NavigationGuard {
    pub fn new(login_route: impl Into<String>, default_route: impl Into<String>) -> Self {
        Self {
            login_route: login_route.into(),
            default_route: default_route.into(),
        }
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    pub fn default_route(&self) -> &str {
        &self.default_route
    }

    /// Decide what to do with a navigation to `target`.
    ///
    /// Protected routes bounce unauthenticated visitors to login, and the
    /// login route bounces authenticated visitors to the default route.
    /// Everything else proceeds. No side effects beyond the decision.
    pub fn evaluate(&self, target: &ResolvedRoute, session: &Session) -> GuardDecision {
        let decision = if target.requires_auth && !session.is_authenticated() {
            GuardDecision::RedirectToLogin
        } else if target.name == self.login_route && session.is_authenticated() {
            GuardDecision::RedirectToDefault
        } else {
            GuardDecision::Proceed
        };

        debug!(target = %target.name, ?decision, "Navigation guard");
        decision
    }
}
