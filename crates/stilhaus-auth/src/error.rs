//! Auth error types.

use thiserror::Error;

/// Errors from the account boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A required sign-in field was left empty.
    #[error("Email and password are required")]
    MissingCredentials,
}
