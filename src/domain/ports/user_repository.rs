//! Port for user account persistence.
//!
//! Profiles snapshot the owner's public identity from this store, and
//! account deletion removes the underlying user row.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
    }
}

/// Port for user account lookup and removal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Delete the user account.
    ///
    /// Returns `true` when a row was deleted and `false` when the account did
    /// not exist.
    async fn delete(&self, id: &UserId) -> Result<bool, UserRepositoryError>;
}

/// Fixture implementation for tests that do not exercise account storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(Some(User::new(
            id.clone(),
            "Ada Lovelace",
            "ada@example.com",
            None,
        )))
    }

    async fn delete(&self, _id: &UserId) -> Result<bool, UserRepositoryError> {
        Ok(true)
    }
}
