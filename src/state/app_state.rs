use dioxus::prelude::*;

use super::Shell;
use crate::forms::{LoginCredentials, SignupDetails, ValidationError};
use crate::hospitals::Hospital;
use crate::navigation::Route;
use crate::theme::Theme;

/// Application state provided at the root of the component tree.
///
/// # Copy Semantics
///
/// `shell` is a `Signal`, and `theme` is a plain `Copy` value fixed at startup
/// from the config, so `AppState` can be moved into event handlers and spawned
/// tasks without cloning.
///
/// The state lives exactly as long as the root `App` component that provides
/// it through `use_context_provider`; there is no module-level session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppState {
    pub shell: Signal<Shell>,
    pub theme: Theme,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            shell: Signal::new(Shell::default()),
            theme,
        }
    }

    pub fn visible_route(&self) -> Route {
        self.shell.read().visible_route()
    }

    pub fn push_route(&mut self, route: Route) {
        self.shell.write().navigator.push(route);
    }

    /// Go to the previous screen, or to login when there is none
    pub fn go_back(&mut self) {
        let mut shell = self.shell.write();
        if !shell.navigator.back() {
            shell.navigator.replace(Route::Login);
        }
    }

    pub fn complete_login(&mut self, credentials: &LoginCredentials) {
        self.shell.write().complete_login(credentials);
    }

    pub fn complete_signup(&mut self, details: &SignupDetails) {
        self.shell.write().complete_signup(details);
    }

    pub fn show_validation_error(&mut self, error: ValidationError) {
        self.shell.write().show_validation_error(error);
    }

    pub fn show_hospital_details(&mut self, hospital: &Hospital) {
        self.shell.write().show_hospital_details(hospital);
    }

    pub fn request_logout(&mut self) {
        self.shell.write().request_logout();
    }

    pub fn resolve_alert(&mut self, confirmed: bool) {
        self.shell.write().resolve_alert(confirmed);
    }
}
