//! Route descriptors and the navigation guard.
//!
//! Routes form a static tree declared once at startup; children inherit
//! their parent's authentication requirement. The guard runs before every
//! navigation and decides whether to proceed or redirect, based only on
//! the target route and the current session.

pub mod guard;
pub mod route;

pub use guard::{GuardDecision, NavigationGuard};
pub use route::{ResolvedRoute, Route, RouteTable};
