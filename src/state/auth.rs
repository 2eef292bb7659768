#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and the startup
/// revalidation status.
///
/// `loading` is true while the stored token is being revalidated against
/// `GET /me`; pages hold off on auth-based redirects until it clears.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Enter the authenticated state.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Return to the unauthenticated state.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
