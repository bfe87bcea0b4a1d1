/// Logged-in flag used for navigation gating.
///
/// There is no token, no expiry and no credential check. The mutators set
/// the flag unconditionally; readers see the new value immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Mark the session as authenticated. Any credentials are accepted.
    pub fn login(&mut self, _email: &str, _password: &str) {
        tracing::info!(was_logged_in = self.logged_in, "Session logged in");
        self.logged_in = true;
    }

    /// Register an account. Signup never logs in: the flag is reset to false
    /// so the user is routed back to the login screen.
    pub fn signup(&mut self, _name: &str, _email: &str, _password: &str) {
        tracing::info!(was_logged_in = self.logged_in, "Account created, session reset");
        self.logged_in = false;
    }

    pub fn logout(&mut self) {
        tracing::info!(was_logged_in = self.logged_in, "Session logged out");
        self.logged_in = false;
    }
}
