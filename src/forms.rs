use std::fmt;
use thiserror::Error;

/// Client-side form validation failure.
///
/// The display text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

type ValidationResult<T> = Result<T, ValidationError>;

/// Raw values of the login screen inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Both fields must be non-empty. Whitespace counts as content.
    pub fn validate(&self) -> ValidationResult<LoginCredentials> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(LoginCredentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Validated login input
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Raw values of the signup screen inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// All fields must be non-empty, then the two passwords must match
    pub fn validate(&self) -> ValidationResult<SignupDetails> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(SignupDetails {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Validated signup input
#[derive(Clone, PartialEq, Eq)]
pub struct SignupDetails {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignupDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupDetails")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
