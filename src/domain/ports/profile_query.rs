//! Driving port for profile read operations.
//!
//! Inbound adapters use this port to fetch and list developer profiles
//! without importing persistence details.

use async_trait::async_trait;

use crate::domain::{Error, Profile, UserId};

/// Driving port for profile read operations.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), devfolio_backend::domain::Error> {
/// # use devfolio_backend::domain::ports::ProfileQuery;
/// let query = devfolio_backend::domain::ports::FixtureProfileQuery;
/// let profiles = query.list_profiles().await?;
/// assert!(profiles.is_empty());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// Fetch the profile owned by the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the user has no profile yet.
    async fn fetch_own_profile(&self, user_id: &UserId) -> Result<Profile, Error>;

    /// Fetch the profile owned by an arbitrary user.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no profile exists for `owner_id`.
    async fn fetch_profile_by_owner(&self, owner_id: &UserId) -> Result<Profile, Error>;

    /// List every profile, newest first.
    async fn list_profiles(&self) -> Result<Vec<Profile>, Error>;
}

/// Fixture query implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProfileQuery;

#[async_trait]
impl ProfileQuery for FixtureProfileQuery {
    async fn fetch_own_profile(&self, _user_id: &UserId) -> Result<Profile, Error> {
        Err(Error::not_found("there is no profile for this user"))
    }

    async fn fetch_profile_by_owner(&self, _owner_id: &UserId) -> Result<Profile, Error> {
        Err(Error::not_found("no profile found for this user"))
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, Error> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use crate::domain::ErrorCode;

    #[tokio::test]
    async fn fixture_list_returns_empty() {
        let query = FixtureProfileQuery;
        let profiles = query.list_profiles().await.expect("fixture list succeeds");
        assert!(profiles.is_empty());
    }

    #[tokio::test]
    async fn fixture_own_profile_is_missing() {
        let query = FixtureProfileQuery;
        let error = query
            .fetch_own_profile(&UserId::random())
            .await
            .expect_err("fixture has no profile");
        assert_eq!(error.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn fixture_lookup_by_owner_is_missing() {
        let query = FixtureProfileQuery;
        let error = query
            .fetch_profile_by_owner(&UserId::random())
            .await
            .expect_err("fixture has no profile");
        assert_eq!(error.code, ErrorCode::NotFound);
    }
}
