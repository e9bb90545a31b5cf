//! Authentication for Cirrus.
//!
//! The hosted auth service stays behind [`AuthBackend`]; this crate owns
//! credential validation and the 30-second bounded race around each
//! attempt.

pub mod backend;
pub mod flow;

pub use backend::AuthBackend;
pub use flow::{AuthFlow, AuthMode, AuthOutcome, Credentials, AUTH_TIMEOUT};
