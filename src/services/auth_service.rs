//! Authentication service - Handles account registration and login.
//!
//! Uses the domain Password value object for hashing and verification.
//! Login is a stateless, single-call confirmation: no session or token
//! is issued.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Account, Password};
use crate::errors::{AppError, AppResult};
use crate::infra::AccountRepository;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account
    async fn register(&self, username: String, email: String, password: String)
        -> AppResult<Account>;

    /// Verify credentials and return the authenticated account
    async fn login(&self, username: String, password: String) -> AppResult<Account>;
}

/// Concrete implementation of AuthService
pub struct Authenticator {
    accounts: Arc<dyn AccountRepository>,
}

impl Authenticator {
    /// Create new auth service instance with its account store
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<Account> {
        if username.is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        if email.is_empty() {
            return Err(AppError::validation("Email is required"));
        }
        if password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        if self.accounts.find_by_username(&username).await?.is_some() {
            return Err(AppError::DuplicateAccount);
        }

        // Two concurrent registrations can both pass the check above; the
        // store's unique constraint rejects the loser and the repository
        // reports that as DuplicateAccount as well.
        let password_hash = Password::new(&password)?.into_string();
        self.accounts.create(username, email, password_hash).await
    }

    async fn login(&self, username: String, password: String) -> AppResult<Account> {
        let account = self
            .accounts
            .find_by_username(&username)
            .await?
            .ok_or(AppError::AccountNotFound)?;

        let stored = Password::from_hash(account.password_hash.clone());
        if !stored.verify(&password) {
            return Err(AppError::InvalidCredentials);
        }

        Ok(account)
    }
}
