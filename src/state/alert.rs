use crate::forms::ValidationError;
use crate::hospitals::Hospital;

/// What happens when the confirm button of an alert is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    /// Single button; closing the alert does nothing else
    Dismiss,
    /// Cancel/confirm pair; confirming logs the user out
    Logout,
}

/// A blocking modal message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub action: AlertAction,
}

impl Alert {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            action: AlertAction::Dismiss,
        }
    }

    pub fn validation(error: ValidationError) -> Self {
        Self::info("Error", error.to_string())
    }

    pub fn hospital_details(hospital: &Hospital) -> Self {
        Self::info(hospital.name, hospital.details_message())
    }

    pub fn confirm_logout() -> Self {
        Self {
            title: "Logout".to_string(),
            message: "Are you sure you want to logout?".to_string(),
            action: AlertAction::Logout,
        }
    }

    /// Label of the confirm button
    pub fn confirm_label(&self) -> &'static str {
        match self.action {
            AlertAction::Dismiss => "OK",
            AlertAction::Logout => "Logout",
        }
    }

    /// Whether a separate cancel button is shown
    pub fn has_cancel(&self) -> bool {
        self.action != AlertAction::Dismiss
    }
}
