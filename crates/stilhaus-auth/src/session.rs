//! Account session state.
//!
//! Holds the signed-in user, if any. The commerce core never consults
//! this; only account surfaces read it.

use crate::user::User;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The current account session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// A signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign a user in, replacing any previous user.
    pub fn login(&mut self, user: User) {
        info!(user_id = %user.id, "user signed in");
        self.user = Some(user);
    }

    /// Sign out. No-op if nobody is signed in.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "user signed out");
        }
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserId;

    fn user(name: &str) -> User {
        User {
            id: UserId::generate(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[test]
    fn test_login_populates_session() {
        let mut session = Session::new();
        assert!(!session.is_authenticated());

        session.login(user("Erika"));
        assert!(session.is_authenticated());
        assert_eq!(session.current_user().map(|u| u.name.as_str()), Some("Erika"));
    }

    #[test]
    fn test_login_replaces_previous_user() {
        let mut session = Session::new();
        session.login(user("Erika"));
        session.login(user("Max"));
        assert_eq!(session.current_user().map(|u| u.name.as_str()), Some("Max"));
    }

    #[test]
    fn test_logout_clears_session() {
        let mut session = Session::new();
        session.login(user("Erika"));
        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());

        // Logging out twice is fine.
        session.logout();
        assert!(!session.is_authenticated());
    }
}
