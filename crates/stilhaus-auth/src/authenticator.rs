//! Mocked sign-in and registration.
//!
//! There is no credential store: any non-empty email/password pair signs
//! in a placeholder profile, and registration accepts whatever it is
//! given. This mirrors the simulated account backend of the storefront.

use crate::error::AuthError;
use crate::user::{User, UserId};
use tracing::debug;

/// Placeholder display name for the mocked sign-in profile.
const MOCK_PROFILE_NAME: &str = "Max Mustermann";

/// The mocked authentication backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Authenticator;

impl Authenticator {
    pub fn new() -> Self {
        Self
    }

    /// Sign in. Accepts any non-empty credentials and yields a placeholder
    /// profile carrying the given email.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        debug!(email, "mock sign-in");
        Ok(User {
            id: UserId::new("1"),
            name: MOCK_PROFILE_NAME.to_string(),
            email: email.to_string(),
        })
    }

    /// Register a new account. Accepts any non-empty input; the profile id
    /// is freshly generated.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        debug!(email, "mock registration");
        Ok(User {
            id: UserId::generate(),
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}
