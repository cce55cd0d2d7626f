//! Authentication and session flow
//!
//! Simulated auth for a demo portal: exact-match plaintext credentials
//! against the accounts collection, an email-verification toggle instead
//! of real mail, and a bare-email token persisted so the session survives
//! a restart. Nothing here is suitable beyond a demo.

use crate::storage::{AUTH_TOKEN_KEY, PortalStorage, UNVERIFIED_EMAIL_KEY};
use crate::store::Store;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Account, AccountCreate, RegisterPayload, Role};
use validator::Validate;

/// The currently authenticated account, if any.
///
/// Owned by the [`AuthManager`]; the router consults it read-only for
/// guard checks. Never persisted as a whole -- only the email token is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl Session {
    fn from_account(account: &Account) -> Self {
        Self {
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            role: account.role,
        }
    }

    /// Display name for the nav bar, e.g. `"Admin (Admin)"`
    pub fn display_name(&self) -> String {
        format!("{} ({:?})", self.first_name, self.role)
    }
}

/// Owns the session and the persisted token/marker entries
pub struct AuthManager {
    storage: PortalStorage,
    session: Option<Session>,
}

impl AuthManager {
    pub fn new(storage: PortalStorage) -> Self {
        Self {
            storage,
            session: None,
        }
    }

    /// The active session, `None` when logged out
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Register a new unverified account and remember its email as
    /// pending verification.
    pub fn register(&mut self, store: &mut Store, payload: RegisterPayload) -> AppResult<()> {
        payload
            .validate()
            .map_err(|err| AppError::with_message(ErrorCode::ValidationFailed, err.to_string()))?;

        let email = payload.email.clone();
        store.create_account(AccountCreate {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            password: payload.password,
            role: Role::User,
            verified: false,
        })?;
        store.save()?;
        self.storage.put_string(UNVERIFIED_EMAIL_KEY, &email)?;

        tracing::info!(email = %email, "Account registered, verification pending");
        Ok(())
    }

    /// The email address waiting for verification, if any
    pub fn pending_verification(&self) -> AppResult<Option<String>> {
        Ok(self.storage.get_string(UNVERIFIED_EMAIL_KEY)?)
    }

    /// Flip the pending account to verified (the stand-in for clicking
    /// the link in a real verification mail).
    pub fn simulate_verify(&mut self, store: &mut Store) -> AppResult<()> {
        let Some(email) = self.storage.get_string(UNVERIFIED_EMAIL_KEY)? else {
            return Err(AppError::with_message(
                ErrorCode::NotFound,
                "No verification pending",
            ));
        };
        store.mark_verified(&email)?;
        store.save()?;

        tracing::info!(email = %email, "Email verified");
        Ok(())
    }

    /// Authenticate with exact-match credentials.
    ///
    /// Wrong email and wrong password are indistinguishable to the
    /// caller; an unverified account is reported separately.
    pub fn login(&mut self, store: &Store, email: &str, password: &str) -> AppResult<Session> {
        let account = store
            .find_account(email)
            .filter(|a| a.password == password)
            .ok_or_else(|| AppError::new(ErrorCode::InvalidCredentials))?;

        if !account.verified {
            return Err(AppError::new(ErrorCode::EmailNotVerified));
        }

        let session = Session::from_account(account);
        self.storage.put_string(AUTH_TOKEN_KEY, &session.email)?;
        self.session = Some(session.clone());

        tracing::info!(email = %session.email, "Login successful");
        Ok(session)
    }

    /// Restore the session from a persisted token at startup.
    ///
    /// A token whose account is gone or unverified is stale: it is
    /// removed and no session is restored.
    pub fn restore(&mut self, store: &Store) -> AppResult<Option<&Session>> {
        let Some(token) = self.storage.get_string(AUTH_TOKEN_KEY)? else {
            return Ok(None);
        };

        match store.find_account(&token) {
            Some(account) if account.verified => {
                tracing::debug!(email = %token, "Session restored");
                self.session = Some(Session::from_account(account));
            }
            _ => {
                tracing::debug!(email = %token, "Stale auth token cleared");
                self.storage.remove(AUTH_TOKEN_KEY)?;
                self.session = None;
            }
        }
        Ok(self.session.as_ref())
    }

    /// Clear the session and the persisted token
    pub fn logout(&mut self) -> AppResult<()> {
        self.storage.remove(AUTH_TOKEN_KEY)?;
        self.session = None;
        tracing::info!("Logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Store, AuthManager) {
        let storage = PortalStorage::open_in_memory().unwrap();
        let store = Store::load(storage.clone()).unwrap();
        (store, AuthManager::new(storage))
    }

    fn bob() -> RegisterPayload {
        RegisterPayload {
            first_name: "Bob".to_string(),
            last_name: "Jones".to_string(),
            email: "bob@x.com".to_string(),
            password: "hunter22".to_string(),
        }
    }

    #[test]
    fn test_register_creates_unverified_user() {
        let (mut store, mut auth) = setup();

        auth.register(&mut store, bob()).unwrap();

        let account = store.find_account("bob@x.com").unwrap();
        assert_eq!(account.role, Role::User);
        assert!(!account.verified);
        assert_eq!(
            auth.pending_verification().unwrap().as_deref(),
            Some("bob@x.com")
        );
    }

    #[test]
    fn test_register_rejects_invalid_payload() {
        let (mut store, mut auth) = setup();

        let err = auth
            .register(
                &mut store,
                RegisterPayload {
                    email: "not-an-email".to_string(),
                    ..bob()
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(store.find_account("not-an-email").is_none());
    }

    #[test]
    fn test_login_before_verification_rejected() {
        let (mut store, mut auth) = setup();
        auth.register(&mut store, bob()).unwrap();

        let err = auth.login(&store, "bob@x.com", "hunter22").unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailNotVerified);
        assert!(auth.session().is_none());
    }

    #[test]
    fn test_verify_then_login() {
        let (mut store, mut auth) = setup();
        auth.register(&mut store, bob()).unwrap();
        auth.simulate_verify(&mut store).unwrap();

        let session = auth.login(&store, "bob@x.com", "hunter22").unwrap();
        assert_eq!(session.role, Role::User);
        assert_eq!(auth.session().map(|s| s.email.as_str()), Some("bob@x.com"));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let (store, mut auth) = setup();

        let err = auth
            .login(&store, "admin@example.com", "wrong")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);

        // Credential comparison is case-sensitive
        let err = auth
            .login(&store, "admin@example.com", "password123!")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
    }

    #[test]
    fn test_restore_roundtrip() {
        let storage = PortalStorage::open_in_memory().unwrap();
        let store = Store::load(storage.clone()).unwrap();

        let mut auth = AuthManager::new(storage.clone());
        auth.login(&store, "admin@example.com", "Password123!").unwrap();

        // A fresh manager over the same storage picks the session back up
        let mut restored = AuthManager::new(storage);
        let session = restored.restore(&store).unwrap().cloned();
        assert_eq!(session.map(|s| s.email), Some("admin@example.com".to_string()));
    }

    #[test]
    fn test_restore_clears_stale_token() {
        let storage = PortalStorage::open_in_memory().unwrap();
        let store = Store::load(storage.clone()).unwrap();
        storage.put_string(AUTH_TOKEN_KEY, "ghost@x.com").unwrap();

        let mut auth = AuthManager::new(storage.clone());
        assert!(auth.restore(&store).unwrap().is_none());
        assert_eq!(storage.get_string(AUTH_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_restore_rejects_unverified_account() {
        let storage = PortalStorage::open_in_memory().unwrap();
        let mut store = Store::load(storage.clone()).unwrap();

        let mut auth = AuthManager::new(storage.clone());
        auth.register(&mut store, bob()).unwrap();
        storage.put_string(AUTH_TOKEN_KEY, "bob@x.com").unwrap();

        assert!(auth.restore(&store).unwrap().is_none());
        assert_eq!(storage.get_string(AUTH_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_logout_clears_token() {
        let (store, mut auth) = setup();
        auth.login(&store, "admin@example.com", "Password123!").unwrap();

        auth.logout().unwrap();
        assert!(auth.session().is_none());
        assert!(auth.restore(&store).unwrap().is_none());
    }
}
