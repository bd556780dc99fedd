//! Screen and tab navigation.
//!
//! Destinations are a typed [`Route`] union, one variant per screen with
//! its required parameters. The [`Navigator`] tracks stacks per tree and
//! refuses routes from the tree the session does not allow.

mod navigator;
mod route;


pub use navigator::Navigator;
pub use route::{AuthRoute, PlayerRoute, Route, TabRoute};

use thiserror::Error;

use crate::services::session::SessionState;

/// Errors from parsing or following routes
#[derive(Error, Debug, PartialEq)]
pub enum NavigationError {
    /// The route name is not known
    #[error("unknown route '{0}'")]
    UnknownRoute(String),

    /// A route was given without its required parameter
    #[error("route '{route}' requires a {param}")]
    MissingParameter {
        /// Route name
        route: String,
        /// Missing parameter
        param: String,
    },

    /// The route belongs to the other navigation tree
    #[error("route '{route}' is not reachable while {session}")]
    Unreachable {
        /// Requested route
        route: Route,
        /// Session state at the time
        session: SessionState,
    },

    /// The session check has not settled yet
    #[error("session check still in progress")]
    SessionPending,
}
