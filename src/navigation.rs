use crate::session::Session;

/// Screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Home,
}

impl Route {
    /// The screen group this route belongs to
    pub fn gate(self) -> Gate {
        match self {
            Route::Login | Route::Signup => Gate::Unauthenticated,
            Route::Home => Gate::Authenticated,
        }
    }
}

/// The two mutually exclusive screen groups chosen at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Unauthenticated,
    Authenticated,
}

impl Gate {
    pub fn from_session(session: &Session) -> Self {
        if session.is_logged_in() {
            Gate::Authenticated
        } else {
            Gate::Unauthenticated
        }
    }

    /// Route rendered when the stack top belongs to the other group
    pub fn entry_route(self) -> Route {
        match self {
            Gate::Unauthenticated => Route::Login,
            Gate::Authenticated => Route::Home,
        }
    }
}

/// Stack-based navigation between screens.
///
/// The stack is never empty; it starts at the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Login],
        }
    }

    /// Open a screen on top of the current one
    pub fn push(&mut self, route: Route) {
        // Pushing the current screen again is a no-op
        if self.current() == route {
            return;
        }
        tracing::debug!(from = ?self.current(), to = ?route, "Navigation push");
        self.stack.push(route);
    }

    /// Return to the previous screen. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        let from = self.stack.pop();
        tracing::debug!(?from, to = ?self.current(), "Navigation back");
        true
    }

    /// Replace the current screen.
    ///
    /// When the screen below is already `route`, the top is popped instead so
    /// repeated round trips do not grow the stack.
    pub fn replace(&mut self, route: Route) {
        tracing::debug!(from = ?self.current(), to = ?route, "Navigation replace");
        let len = self.stack.len();
        if len > 1 && self.stack[len - 2] == route {
            self.stack.pop();
        } else if let Some(top) = self.stack.last_mut() {
            *top = route;
        }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Login)
    }

    #[cfg(test)]
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// The route the root actually renders for `gate`.
    ///
    /// Routes outside the allowed group are never shown; the group's entry
    /// route is rendered instead.
    pub fn resolve(&self, gate: Gate) -> Route {
        let current = self.current();
        if current.gate() == gate {
            current
        } else {
            gate.entry_route()
        }
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
