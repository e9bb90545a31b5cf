//! Auth backend collaborator.
//!
//! The hosted auth service lives behind this trait; the flow never talks to
//! it directly. Tests substitute in-memory fakes.

use std::future::Future;

use uuid::Uuid;

use cirrus_core::BackendError;

pub trait AuthBackend {
    /// Sign an existing user in.
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;

    /// Register a new user.
    fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;

    /// End the current session.
    fn sign_out(&self) -> impl Future<Output = Result<(), BackendError>> + Send;

    /// Id of the signed-in user, if any.
    fn current_user_id(&self) -> Option<Uuid>;
}
