//! Authentication flow: credential validation plus a deadline-bounded
//! backend call.

use std::time::Duration;

use cirrus_core::error::MIN_PASSWORD_LEN;
use cirrus_core::{race, AuthError};

use crate::backend::AuthBackend;

/// Deadline for one sign-in/sign-up attempt.
pub const AUTH_TIMEOUT: Duration = Duration::from_secs(30);

const AUTH_TIMEOUT_MESSAGE: &str =
    "Authentication timed out. Please check your internet connection.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// What the UI should do after a successful attempt: a sign-in navigates
/// home, a sign-up switches back to the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    SignedIn,
    AccountCreated,
}

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub struct AuthFlow<B> {
    backend: B,
    timeout: Duration,
}

impl<B: AuthBackend> AuthFlow<B> {
    pub fn new(backend: B) -> Self {
        Self::with_timeout(backend, AUTH_TIMEOUT)
    }

    pub fn with_timeout(backend: B, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// Validate credentials and run the backend call under the deadline.
    pub async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<AuthOutcome, AuthError> {
        let email = credentials.email.trim().to_lowercase();

        if email.is_empty() {
            return Err(AuthError::EmptyEmail);
        }
        if !email.contains('@') || !email.contains('.') {
            return Err(AuthError::InvalidEmail);
        }
        if credentials.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }
        if mode == AuthMode::SignUp && credentials.password != credentials.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        tracing::info!("Starting authentication for {}", email);

        match mode {
            AuthMode::SignIn => {
                race::with_timeout(self.timeout, AUTH_TIMEOUT_MESSAGE, async {
                    self.backend
                        .sign_in(&email, &credentials.password)
                        .await
                        .map_err(AuthError::from)
                })
                .await?;
                Ok(AuthOutcome::SignedIn)
            }
            AuthMode::SignUp => {
                race::with_timeout(self.timeout, AUTH_TIMEOUT_MESSAGE, async {
                    self.backend
                        .sign_up(&email, &credentials.password)
                        .await
                        .map_err(AuthError::from)
                })
                .await?;
                Ok(AuthOutcome::AccountCreated)
            }
        }
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.backend.sign_out().await.map_err(AuthError::from)
    }

    pub fn signed_in(&self) -> bool {
        self.backend.current_user_id().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::BackendError;
    use std::future::Future;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingBackend {
        sign_ins: Mutex<Vec<(String, String)>>,
        sign_ups: Mutex<Vec<(String, String)>>,
        user: Option<Uuid>,
        failure: Option<String>,
    }

    impl AuthBackend for RecordingBackend {
        async fn sign_in(&self, email: &str, password: &str) -> Result<(), BackendError> {
            self.sign_ins
                .lock()
                .expect("lock")
                .push((email.to_string(), password.to_string()));
            match &self.failure {
                Some(msg) => Err(BackendError(msg.clone())),
                None => Ok(()),
            }
        }

        async fn sign_up(&self, email: &str, password: &str) -> Result<(), BackendError> {
            self.sign_ups
                .lock()
                .expect("lock")
                .push((email.to_string(), password.to_string()));
            Ok(())
        }

        async fn sign_out(&self) -> Result<(), BackendError> {
            Ok(())
        }

        fn current_user_id(&self) -> Option<Uuid> {
            self.user
        }
    }

    /// Backend whose network call never settles.
    struct StalledBackend;

    impl AuthBackend for StalledBackend {
        fn sign_in(
            &self,
            _email: &str,
            _password: &str,
        ) -> impl Future<Output = Result<(), BackendError>> + Send {
            std::future::pending()
        }

        fn sign_up(
            &self,
            _email: &str,
            _password: &str,
        ) -> impl Future<Output = Result<(), BackendError>> + Send {
            std::future::pending()
        }

        async fn sign_out(&self) -> Result<(), BackendError> {
            Ok(())
        }

        fn current_user_id(&self) -> Option<Uuid> {
            None
        }
    }

    fn credentials(email: &str, password: &str, confirm: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn sign_in_normalizes_the_email() {
        let flow = AuthFlow::new(RecordingBackend::default());
        let outcome = flow
            .authenticate(
                AuthMode::SignIn,
                &credentials("  User@Example.COM ", "secret1", ""),
            )
            .await
            .expect("sign in");

        assert_eq!(outcome, AuthOutcome::SignedIn);
        let calls = flow.backend.sign_ins.lock().expect("lock");
        assert_eq!(calls.as_slice(), &[("user@example.com".to_string(), "secret1".to_string())]);
    }

    #[tokio::test]
    async fn sign_up_requires_matching_confirmation() {
        let flow = AuthFlow::new(RecordingBackend::default());
        let result = flow
            .authenticate(
                AuthMode::SignUp,
                &credentials("user@example.com", "secret1", "secret2"),
            )
            .await;
        assert!(matches!(result, Err(AuthError::PasswordMismatch)));
        assert!(flow.backend.sign_ups.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn sign_up_success_switches_back_to_login() {
        let flow = AuthFlow::new(RecordingBackend::default());
        let outcome = flow
            .authenticate(
                AuthMode::SignUp,
                &credentials("user@example.com", "secret1", "secret1"),
            )
            .await
            .expect("sign up");
        assert_eq!(outcome, AuthOutcome::AccountCreated);
    }

    #[tokio::test]
    async fn rejects_malformed_emails_before_any_backend_call() {
        let flow = AuthFlow::new(RecordingBackend::default());
        for (email, expected_empty) in [("", true), ("no-at-sign.com", false), ("no@dots", false)] {
            let result = flow
                .authenticate(AuthMode::SignIn, &credentials(email, "secret1", ""))
                .await;
            match (result, expected_empty) {
                (Err(AuthError::EmptyEmail), true) | (Err(AuthError::InvalidEmail), false) => {}
                (other, _) => panic!("unexpected result for {email:?}: {other:?}"),
            }
        }
        assert!(flow.backend.sign_ins.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn rejects_short_passwords() {
        let flow = AuthFlow::new(RecordingBackend::default());
        let result = flow
            .authenticate(AuthMode::SignIn, &credentials("user@example.com", "five!", ""))
            .await;
        assert!(matches!(result, Err(AuthError::PasswordTooShort)));
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_backend_times_out_after_thirty_seconds() {
        let flow = AuthFlow::new(StalledBackend);
        let started = tokio::time::Instant::now();
        let result = flow
            .authenticate(AuthMode::SignIn, &credentials("user@example.com", "secret1", ""))
            .await;

        match result {
            Err(AuthError::Timeout(t)) => {
                assert!(t.message.contains("timed out"));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
        assert_eq!(started.elapsed(), AUTH_TIMEOUT);
    }

    #[tokio::test]
    async fn backend_failures_surface_with_a_friendly_message() {
        let backend = RecordingBackend {
            failure: Some("Invalid login credentials".to_string()),
            ..RecordingBackend::default()
        };
        let flow = AuthFlow::new(backend);
        let err = flow
            .authenticate(AuthMode::SignIn, &credentials("user@example.com", "secret1", ""))
            .await
            .expect_err("should fail");
        assert_eq!(err.user_message(), "Invalid email or password.");
    }

    #[tokio::test]
    async fn signed_in_reflects_the_backend_session() {
        let flow = AuthFlow::new(RecordingBackend {
            user: Some(Uuid::new_v4()),
            ..RecordingBackend::default()
        });
        assert!(flow.signed_in());

        let flow = AuthFlow::new(RecordingBackend::default());
        assert!(!flow.signed_in());
    }
}
