//! User registry and session store.
//!
//! The session is a two-state machine {anonymous, authenticated}; only
//! `login` and `logout` transition it. Registration never touches the
//! session, and the cart is independent of both transitions.

use crate::repo::{load_json, save_json, StateRepository, SESSION_KEY, USERS_KEY};
use gs_types::User;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("this email address is already registered")]
    EmailTaken,
    #[error("unknown user or wrong password")]
    InvalidCredentials,
}

pub struct Auth<R: StateRepository> {
    users: Vec<User>,
    current: Option<User>,
    repo: R,
}

impl<R: StateRepository> Auth<R> {
    /// Open the store, restoring the user list and any persisted session.
    pub fn load(repo: R) -> Self {
        let users = load_json(&repo, USERS_KEY).unwrap_or_default();
        let current = load_json(&repo, SESSION_KEY);
        Self {
            users,
            current,
            repo,
        }
    }

    /// Register a new user. `now_ms` (epoch milliseconds) doubles as the
    /// user identifier. Does not log the user in.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        now_ms: u64,
    ) -> Result<(), AuthError> {
        if self.users.iter().any(|u| u.email == email) {
            return Err(AuthError::EmailTaken);
        }
        self.users.push(User {
            id: now_ms,
            name: name.to_owned(),
            email: email.to_owned(),
            password: Some(password.to_owned()),
        });
        save_json(&self.repo, USERS_KEY, &self.users);
        Ok(())
    }

    /// Authenticate by email and password. Records written by pre-password
    /// revisions carry no password and match the empty string.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .users
            .iter()
            .find(|u| u.email == email && u.password.as_deref().unwrap_or("") == password)
            .ok_or(AuthError::InvalidCredentials)?;
        let session = user.session_copy();
        save_json(&self.repo, SESSION_KEY, &session);
        self.current = Some(session.clone());
        Ok(session)
    }

    pub fn logout(&mut self) {
        self.current = None;
        self.repo.remove(SESSION_KEY);
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::{MemoryRepository, SESSION_KEY};

    fn store() -> Auth<MemoryRepository> {
        Auth::load(MemoryRepository::default())
    }

    #[test]
    fn duplicate_email_fails_and_leaves_user_list_unchanged() {
        let mut auth = store();
        auth.register("Ada", "ada@example.com", "pw", 1).unwrap();
        let err = auth.register("Imposter", "ada@example.com", "pw2", 2);
        assert_eq!(err, Err(AuthError::EmailTaken));
        assert_eq!(auth.users().len(), 1);
        assert_eq!(auth.users()[0].name, "Ada");
    }

    #[test]
    fn register_does_not_change_session_state() {
        let mut auth = store();
        auth.register("Ada", "ada@example.com", "pw", 1).unwrap();
        assert!(!auth.is_logged_in());
    }

    #[test]
    fn login_checks_password() {
        let mut auth = store();
        auth.register("Ada", "ada@example.com", "pw", 1).unwrap();
        assert_eq!(
            auth.login("ada@example.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            auth.login("nobody@example.com", "pw"),
            Err(AuthError::InvalidCredentials)
        );
        assert!(!auth.is_logged_in());

        let user = auth.login("ada@example.com", "pw").unwrap();
        assert!(auth.is_logged_in());
        assert_eq!(user.name, "Ada");
    }

    #[test]
    fn logout_clears_session_and_storage() {
        let repo = MemoryRepository::default();
        let mut auth = Auth::load(repo.clone());
        auth.register("Ada", "ada@example.com", "pw", 1).unwrap();
        auth.login("ada@example.com", "pw").unwrap();
        assert!(repo.load(SESSION_KEY).is_some());

        auth.logout();
        assert!(!auth.is_logged_in());
        assert_eq!(auth.current_user(), None);
        assert_eq!(repo.load(SESSION_KEY), None);
    }

    #[test]
    fn persisted_session_never_contains_a_password() {
        let repo = MemoryRepository::default();
        let mut auth = Auth::load(repo.clone());
        auth.register("Ada", "ada@example.com", "hunter2", 1).unwrap();
        auth.login("ada@example.com", "hunter2").unwrap();

        let raw = repo.load(SESSION_KEY).unwrap();
        assert!(!raw.contains("hunter2"));
        let reopened = Auth::load(repo);
        assert_eq!(reopened.current_user().unwrap().password, None);
    }

    #[test]
    fn session_survives_reopen() {
        let repo = MemoryRepository::default();
        {
            let mut auth = Auth::load(repo.clone());
            auth.register("Ada", "ada@example.com", "pw", 1).unwrap();
            auth.login("ada@example.com", "pw").unwrap();
        }
        let reopened = Auth::load(repo);
        assert!(reopened.is_logged_in());
        assert_eq!(reopened.current_user().unwrap().email, "ada@example.com");
    }

    #[test]
    fn legacy_user_without_password_logs_in_with_empty_string() {
        let repo = MemoryRepository::default();
        repo.save(
            USERS_KEY,
            r#"[{"id":1,"name":"Old","email":"old@example.com"}]"#,
        );
        let mut auth = Auth::load(repo);
        assert_eq!(
            auth.login("old@example.com", "anything"),
            Err(AuthError::InvalidCredentials)
        );
        assert!(auth.login("old@example.com", "").is_ok());
    }
}
