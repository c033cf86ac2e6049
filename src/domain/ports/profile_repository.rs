//! Port for developer profile persistence.
//!
//! A profile is stored whole: submissions, experience edits, and education
//! edits all persist through [`ProfileRepository::save`].

use async_trait::async_trait;

use crate::domain::{Profile, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by profile repository adapters.
    pub enum ProfileRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "profile repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "profile repository query failed: {message}",
    }
}

/// Port for profile persistence and lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Create or update the profile for its owner.
    async fn save(&self, profile: &Profile) -> Result<(), ProfileRepositoryError>;

    /// Find the profile owned by `owner_id`.
    async fn find_by_owner(
        &self,
        owner_id: &UserId,
    ) -> Result<Option<Profile>, ProfileRepositoryError>;

    /// List every stored profile, newest first.
    async fn list(&self) -> Result<Vec<Profile>, ProfileRepositoryError>;

    /// Delete the profile owned by `owner_id`.
    ///
    /// Returns `true` when a row was deleted and `false` when no profile
    /// existed.
    async fn delete_by_owner(&self, owner_id: &UserId) -> Result<bool, ProfileRepositoryError>;
}

/// Fixture implementation for tests that do not exercise profile persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProfileRepository;

#[async_trait]
impl ProfileRepository for FixtureProfileRepository {
    async fn save(&self, _profile: &Profile) -> Result<(), ProfileRepositoryError> {
        Ok(())
    }

    async fn find_by_owner(
        &self,
        _owner_id: &UserId,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        Ok(None)
    }

    async fn list(&self) -> Result<Vec<Profile>, ProfileRepositoryError> {
        Ok(Vec::new())
    }

    async fn delete_by_owner(&self, _owner_id: &UserId) -> Result<bool, ProfileRepositoryError> {
        Ok(false)
    }
}
