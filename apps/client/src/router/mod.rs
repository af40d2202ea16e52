//! In-app routing: the canonical route table, the admission guard, and the
//! `Router` that carries the current location.

pub mod guard;
pub mod routes;

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::http::Navigator;
use crate::session::SessionStore;

pub use guard::{evaluate, Admission};
pub use routes::{resolve, Route, RouteMatch, RouteMeta, ROUTES};

/// Chained denials settle quickly (the longest real chain is three hops);
/// the bound only protects against a misconfigured table.
const MAX_REDIRECTS: usize = 8;

/// Holds the current location and applies the guard on every `navigate`,
/// re-evaluating after each redirect until the transition settles.
pub struct Router {
    session: Arc<SessionStore>,
    current: RwLock<String>,
}

impl Router {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Router {
            session,
            current: RwLock::new("/".to_string()),
        }
    }

    pub fn current_path(&self) -> String {
        self.current.read().clone()
    }

    /// Runs the full transition — alias redirects, then the guard, then any
    /// guard-issued redirects — and returns the settled path.
    pub fn navigate(&self, path: &str) -> String {
        let mut target = path.to_string();

        for _ in 0..MAX_REDIRECTS {
            let matched = resolve(&target);

            if let Some(alias_target) = matched.route.redirect {
                debug!("Route alias {} -> {}", target, alias_target);
                target = alias_target.to_string();
                continue;
            }

            let session = self.session.view();
            match evaluate(matched.route, &matched.full_path, &session) {
                Admission::Allow => {
                    debug!("Navigation settled at {}", matched.full_path);
                    *self.current.write() = matched.full_path;
                    return self.current_path();
                }
                Admission::Redirect { to } => {
                    debug!("Guard redirect {} -> {to}", matched.full_path);
                    target = to;
                }
            }
        }

        warn!("Navigation to {path} did not settle after {MAX_REDIRECTS} redirects");
        *self.current.write() = target;
        self.current_path()
    }
}

impl Navigator for Router {
    fn push(&self, path: &str) {
        self.navigate(path);
    }
}
