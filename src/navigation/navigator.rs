use tracing::{debug, info};

use super::{AuthRoute, NavigationError, PlayerRoute, Route, TabRoute};
use crate::services::session::SessionState;

/// Screen flow for one session.
///
/// Signed out, only the auth stack is reachable. Signed in, one tab is
/// active with a stack of detail screens over it. Nothing is reachable
/// until the session check settles.
#[derive(Debug, Clone)]
pub struct Navigator {
    session: SessionState,
    auth_stack: Vec<AuthRoute>,
    tab: TabRoute,
    detail_stack: Vec<PlayerRoute>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Creates a navigator waiting on the session check.
    pub fn new() -> Self {
        Self {
            session: SessionState::Checking,
            auth_stack: vec![AuthRoute::Login],
            tab: TabRoute::Home,
            detail_stack: Vec::new(),
        }
    }

    /// Follows a session change, resetting to the root of the new tree.
    ///
    /// Returns whether the session differed from the one last seen.
    pub fn sync_session(&mut self, session: SessionState) -> bool {
        if session == self.session {
            return false;
        }

        info!(from = %self.session, to = %session, "Switching navigation tree");
        self.session = session;
        self.auth_stack = vec![AuthRoute::Login];
        self.tab = TabRoute::Home;
        self.detail_stack.clear();

        true
    }

    /// Moves to `route` and returns the route now visible.
    ///
    /// Auth routes already on the stack are returned to rather than pushed
    /// twice. Selecting a tab clears the detail stack.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::SessionPending` while the session check is
    /// running, and `NavigationError::Unreachable` for a route that belongs
    /// to the other tree.
    pub fn navigate(&mut self, route: Route) -> Result<Route, NavigationError> {
        match (self.session, route) {
            (SessionState::Checking, _) => return Err(NavigationError::SessionPending),
            (SessionState::Unauthenticated, Route::Auth(screen)) => {
                match self.auth_stack.iter().position(|s| *s == screen) {
                    Some(index) => self.auth_stack.truncate(index + 1),
                    None => self.auth_stack.push(screen),
                }
            }
            (SessionState::Authenticated, Route::Main(tab)) => {
                self.tab = tab;
                self.detail_stack.clear();
            }
            (SessionState::Authenticated, Route::Player(screen)) => {
                self.detail_stack.push(screen);
            }
            (session, route) => return Err(NavigationError::Unreachable { route, session }),
        }

        let current = self.current().ok_or(NavigationError::SessionPending)?;
        debug!(route = %current, "Navigated");
        Ok(current)
    }

    /// Pops one screen. Returns whether anything was popped.
    ///
    /// Never pops below the root of the active tree.
    pub fn go_back(&mut self) -> bool {
        match self.session {
            SessionState::Checking => false,
            SessionState::Unauthenticated => {
                if self.auth_stack.len() > 1 {
                    self.auth_stack.pop();
                    true
                } else {
                    false
                }
            }
            SessionState::Authenticated => self.detail_stack.pop().is_some(),
        }
    }

    /// The visible route, or `None` while the session check is running.
    pub fn current(&self) -> Option<Route> {
        match self.session {
            SessionState::Checking => None,
            SessionState::Unauthenticated => self.auth_stack.last().copied().map(Route::Auth),
            SessionState::Authenticated => Some(
                self.detail_stack
                    .last()
                    .cloned()
                    .map_or(Route::Main(self.tab), Route::Player),
            ),
        }
    }

    /// The active tab of the signed-in tree.
    pub fn tab(&self) -> TabRoute {
        self.tab
    }

    /// Number of screens stacked in the active tree, root included.
    pub fn depth(&self) -> usize {
        match self.session {
            SessionState::Checking => 0,
            SessionState::Unauthenticated => self.auth_stack.len(),
            SessionState::Authenticated => 1 + self.detail_stack.len(),
        }
    }

    /// Session state the navigator last followed.
    pub fn session(&self) -> SessionState {
        self.session
    }
}
