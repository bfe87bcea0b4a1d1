use super::alert::{Alert, AlertAction};
use crate::forms::{LoginCredentials, SignupDetails, ValidationError};
use crate::hospitals::Hospital;
use crate::navigation::{Gate, Navigator, Route};
use crate::session::Session;

/// Session, navigation and the active alert, without reactivity.
///
/// Login, signup and logout each touch all three at once, so they are kept
/// together and updated as a unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shell {
    pub session: Session,
    pub navigator: Navigator,
    pub alert: Option<Alert>,
}

impl Shell {
    pub fn gate(&self) -> Gate {
        Gate::from_session(&self.session)
    }

    /// The screen the root renders
    pub fn visible_route(&self) -> Route {
        self.navigator.resolve(self.gate())
    }

    /// Apply a finished login: authenticate, announce, then navigate home
    pub fn complete_login(&mut self, credentials: &LoginCredentials) {
        self.session.login(&credentials.email, &credentials.password);
        self.alert = Some(Alert::info("Success", "Logged in successfully!"));
        self.navigator.replace(Route::Home);
    }

    /// Apply a finished signup: reset the session and return to login
    pub fn complete_signup(&mut self, details: &SignupDetails) {
        self.session
            .signup(&details.name, &details.email, &details.password);
        self.alert = Some(Alert::info("Success", "Account created successfully!"));
        self.navigator.replace(Route::Login);
    }

    pub fn show_validation_error(&mut self, error: ValidationError) {
        tracing::debug!(%error, "Form validation failed");
        self.alert = Some(Alert::validation(error));
    }

    pub fn show_hospital_details(&mut self, hospital: &Hospital) {
        self.alert = Some(Alert::hospital_details(hospital));
    }

    /// Ask for confirmation; the session is untouched until confirmed
    pub fn request_logout(&mut self) {
        self.alert = Some(Alert::confirm_logout());
    }

    /// Close the active alert, running its action if `confirmed`
    pub fn resolve_alert(&mut self, confirmed: bool) {
        let Some(alert) = self.alert.take() else {
            return;
        };
        if !confirmed {
            return;
        }
        match alert.action {
            AlertAction::Dismiss => {}
            AlertAction::Logout => {
                self.session.logout();
                self.navigator.replace(Route::Login);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{LoginForm, SignupForm};
    use crate::hospitals;
    use crate::request::{complete_after, RequestCancelled, RequestScope};
    use std::cell::RefCell;
    use std::time::Duration;

    const DELAY: Duration = Duration::from_millis(1000);

    fn credentials() -> LoginCredentials {
        LoginForm {
            email: "user@example.com".to_string(),
            password: "secret".to_string(),
        }
        .validate()
        .unwrap()
    }

    fn details() -> SignupDetails {
        SignupForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
        }
        .validate()
        .unwrap()
    }

    fn logged_in() -> Shell {
        let mut shell = Shell::default();
        shell.complete_login(&credentials());
        shell.resolve_alert(true);
        shell
    }

    #[test]
    fn test_initial_shell_shows_login() {
        let shell = Shell::default();
        assert_eq!(shell.gate(), Gate::Unauthenticated);
        assert_eq!(shell.visible_route(), Route::Login);
        assert!(shell.alert.is_none());
    }

    #[test]
    fn test_complete_login_navigates_home() {
        let mut shell = Shell::default();
        shell.complete_login(&credentials());

        assert!(shell.session.is_logged_in());
        assert_eq!(shell.visible_route(), Route::Home);
        assert_eq!(
            shell.alert.as_ref().map(|a| a.message.as_str()),
            Some("Logged in successfully!")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_applies_after_delay() {
        let shell = RefCell::new(Shell::default());
        let scope = RequestScope::default();
        let credentials = credentials();

        let result = complete_after(scope.begin(), DELAY, || {
            shell.borrow_mut().complete_login(&credentials)
        })
        .await;

        assert_eq!(result, Ok(()));
        let shell = shell.into_inner();
        assert!(shell.session.is_logged_in());
        assert_eq!(shell.visible_route(), Route::Home);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_dismissed_mid_delay_leaves_shell_untouched() {
        let shell = RefCell::new(Shell::default());
        let scope = RequestScope::default();
        let credentials = credentials();

        let login = complete_after(scope.begin(), DELAY, || {
            shell.borrow_mut().complete_login(&credentials)
        });
        // Unmounting the login screen cancels its scope
        let dismiss = async {
            tokio::time::sleep(DELAY / 2).await;
            scope.cancel();
        };
        let (result, ()) = tokio::join!(login, dismiss);

        assert_eq!(result, Err(RequestCancelled));
        let shell = shell.into_inner();
        assert_eq!(shell, Shell::default());
        assert!(!shell.session.is_logged_in());
        assert_eq!(shell.visible_route(), Route::Login);
    }

    #[tokio::test(start_paused = true)]
    async fn test_signup_dismissed_mid_delay_shows_no_alert() {
        let shell = RefCell::new(Shell::default());
        shell.borrow_mut().navigator.push(Route::Signup);
        let before = shell.borrow().clone();
        let scope = RequestScope::default();
        let details = details();

        let signup = complete_after(scope.begin(), DELAY, || {
            shell.borrow_mut().complete_signup(&details)
        });
        let dismiss = async {
            tokio::time::sleep(DELAY / 2).await;
            scope.cancel();
        };
        let (result, ()) = tokio::join!(signup, dismiss);

        assert_eq!(result, Err(RequestCancelled));
        assert_eq!(shell.into_inner(), before);
    }

    #[test]
    fn test_repeated_signup_cycles_keep_stack_shallow() {
        let mut shell = Shell::default();
        for _ in 0..3 {
            shell.navigator.push(Route::Signup);
            shell.complete_signup(&details());
            shell.resolve_alert(true);
        }
        assert_eq!(shell.navigator.depth(), 1);
        assert_eq!(shell.visible_route(), Route::Login);
    }

    #[test]
    fn test_complete_signup_returns_to_login() {
        let mut shell = Shell::default();
        shell.navigator.push(Route::Signup);
        shell.complete_signup(&details());

        assert!(!shell.session.is_logged_in());
        assert_eq!(shell.visible_route(), Route::Login);
        assert_eq!(
            shell.alert.as_ref().map(|a| a.message.as_str()),
            Some("Account created successfully!")
        );
    }

    #[test]
    fn test_validation_error_leaves_session_unchanged() {
        let mut shell = Shell::default();
        shell.show_validation_error(ValidationError::MissingFields);

        assert!(!shell.session.is_logged_in());
        assert_eq!(shell.visible_route(), Route::Login);
        assert_eq!(
            shell.alert.as_ref().map(|a| a.title.as_str()),
            Some("Error")
        );
    }

    #[test]
    fn test_logout_cancel_keeps_session() {
        let mut shell = logged_in();
        shell.request_logout();
        assert!(shell.session.is_logged_in());

        shell.resolve_alert(false);
        assert!(shell.alert.is_none());
        assert!(shell.session.is_logged_in());
        assert_eq!(shell.visible_route(), Route::Home);
    }

    #[test]
    fn test_logout_confirm_clears_session() {
        let mut shell = logged_in();
        shell.request_logout();
        shell.resolve_alert(true);

        assert!(shell.alert.is_none());
        assert!(!shell.session.is_logged_in());
        assert_eq!(shell.navigator.current(), Route::Login);
        assert_eq!(shell.visible_route(), Route::Login);
    }

    #[test]
    fn test_dismiss_info_alert_has_no_side_effect() {
        let mut shell = logged_in();
        shell.show_hospital_details(hospitals::find("1").unwrap());
        shell.resolve_alert(true);

        assert!(shell.alert.is_none());
        assert!(shell.session.is_logged_in());
        assert_eq!(shell.visible_route(), Route::Home);
    }

    #[test]
    fn test_resolve_without_alert_is_noop() {
        let mut shell = logged_in();
        let before = shell.clone();
        shell.resolve_alert(true);
        assert_eq!(shell, before);
    }
}
