//! Account session state and the mocked sign-in flow for Stilhaus.
//!
//! The storefront has no real account backend: sign-in always succeeds
//! with a placeholder profile and nothing is persisted. This crate is the
//! account boundary the presentation layer talks to; the commerce core
//! never reads it.

pub mod authenticator;
pub mod error;
pub mod session;
pub mod user;

pub use authenticator::Authenticator;
pub use error::AuthError;
pub use session::Session;
pub use user::{User, UserId};
