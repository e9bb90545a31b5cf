//! Cross-cutting error types.
//!
//! Domain crates define their own error enums (e.g. the weather client's);
//! this module holds the errors shared by more than one crate: the bounded
//! race timeout and the hosted backend collaborator errors.

use thiserror::Error;

/// Minimum accepted password length for sign-in/sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A bounded operation lost its race against the deadline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Timeout {
    pub message: String,
}

impl Timeout {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error reported by the hosted auth/database collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Backend error: {0}")]
pub struct BackendError(pub String);

/// Authentication flow errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please enter an email address.")]
    EmptyEmail,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error(transparent)]
    Timeout(#[from] Timeout),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl AuthError {
    /// User-friendly message for an inline UI banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Timeout(t) => t.message.clone(),
            Self::Backend(BackendError(msg)) => {
                let lowered = msg.to_lowercase();
                if lowered.contains("invalid login credentials") {
                    "Invalid email or password.".to_string()
                } else {
                    msg.clone()
                }
            }
            other => other.to_string(),
        }
    }
}
