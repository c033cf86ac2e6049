//! Profile domain service implementing the command and query driving ports.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    AddEducationRequest, AddExperienceRequest, DeleteAccountRequest, ProfileCommand, ProfileQuery,
    ProfileRepository, ProfileRepositoryError, RemoveEducationRequest, RemoveExperienceRequest,
    SubmitProfileRequest, UserRepository, UserRepositoryError,
};
use crate::domain::{
    Education, Error, Experience, Profile, ProfileOwner, ProfileValidationError, UserId,
};

/// Profile service implementing both profile driving ports.
///
/// Submissions upsert the caller's single profile; experience and education
/// edits load the profile, mutate it, and persist the whole aggregate.
#[derive(Clone)]
pub struct ProfileService<P, U> {
    profiles: Arc<P>,
    users: Arc<U>,
}

impl<P, U> ProfileService<P, U> {
    /// Create a new service over profile and user repositories.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use devfolio_backend::domain::ports::{FixtureProfileRepository, FixtureUserRepository, ProfileQuery};
    /// # async fn example() -> Result<(), devfolio_backend::domain::Error> {
    /// let service = devfolio_backend::domain::ProfileService::new(
    ///     Arc::new(FixtureProfileRepository),
    ///     Arc::new(FixtureUserRepository),
    /// );
    /// let profiles = service.list_profiles().await?;
    /// assert!(profiles.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(profiles: Arc<P>, users: Arc<U>) -> Self {
        Self { profiles, users }
    }
}

impl<P, U> ProfileService<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    fn map_profile_error(error: ProfileRepositoryError) -> Error {
        match error {
            ProfileRepositoryError::Connection { message } => {
                Error::internal(format!("profile repository unavailable: {message}"))
            }
            ProfileRepositoryError::Query { message } => {
                Error::internal(format!("profile repository error: {message}"))
            }
        }
    }

    fn map_user_error(error: UserRepositoryError) -> Error {
        match error {
            UserRepositoryError::Connection { message } => {
                Error::internal(format!("user repository unavailable: {message}"))
            }
            UserRepositoryError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
        }
    }

    fn map_validation_error(error: ProfileValidationError) -> Error {
        Error::invalid_request(error.to_string())
    }

    async fn load_profile(
        &self,
        user_id: &UserId,
        missing: &'static str,
    ) -> Result<Profile, Error> {
        self.profiles
            .find_by_owner(user_id)
            .await
            .map_err(Self::map_profile_error)?
            .ok_or_else(|| Error::not_found(missing))
    }

    async fn persist(&self, profile: Profile) -> Result<Profile, Error> {
        self.profiles
            .save(&profile)
            .await
            .map_err(Self::map_profile_error)?;
        Ok(profile)
    }
}

#[async_trait]
impl<P, U> ProfileCommand for ProfileService<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    async fn submit_profile(&self, request: SubmitProfileRequest) -> Result<Profile, Error> {
        let SubmitProfileRequest { user_id, draft } = request;

        let existing = self
            .profiles
            .find_by_owner(&user_id)
            .await
            .map_err(Self::map_profile_error)?;

        let profile = match existing {
            Some(mut profile) => {
                profile.apply(draft).map_err(Self::map_validation_error)?;
                profile
            }
            None => {
                let user = self
                    .users
                    .find_by_id(&user_id)
                    .await
                    .map_err(Self::map_user_error)?
                    .ok_or_else(|| Error::not_found("user account not found"))?;
                let owner = ProfileOwner {
                    id: user.id().clone(),
                    name: user.name().to_owned(),
                    avatar: user.avatar().map(ToOwned::to_owned),
                };
                Profile::new(owner, draft).map_err(Self::map_validation_error)?
            }
        };

        self.persist(profile).await
    }

    async fn add_experience(&self, request: AddExperienceRequest) -> Result<Profile, Error> {
        let AddExperienceRequest { user_id, draft } = request;
        let entry = Experience::new(draft).map_err(Self::map_validation_error)?;
        let mut profile = self
            .load_profile(&user_id, "there is no profile for this user")
            .await?;
        profile.prepend_experience(entry);
        self.persist(profile).await
    }

    async fn remove_experience(
        &self,
        request: RemoveExperienceRequest,
    ) -> Result<Profile, Error> {
        let RemoveExperienceRequest {
            user_id,
            experience_id,
        } = request;
        let mut profile = self
            .load_profile(&user_id, "there is no profile for this user")
            .await?;
        if !profile.remove_experience(experience_id) {
            return Err(Error::not_found("experience entry not found"));
        }
        self.persist(profile).await
    }

    async fn add_education(&self, request: AddEducationRequest) -> Result<Profile, Error> {
        let AddEducationRequest { user_id, draft } = request;
        let entry = Education::new(draft).map_err(Self::map_validation_error)?;
        let mut profile = self
            .load_profile(&user_id, "there is no profile for this user")
            .await?;
        profile.prepend_education(entry);
        self.persist(profile).await
    }

    async fn remove_education(&self, request: RemoveEducationRequest) -> Result<Profile, Error> {
        let RemoveEducationRequest {
            user_id,
            education_id,
        } = request;
        let mut profile = self
            .load_profile(&user_id, "there is no profile for this user")
            .await?;
        if !profile.remove_education(education_id) {
            return Err(Error::not_found("education entry not found"));
        }
        self.persist(profile).await
    }

    async fn delete_account(&self, request: DeleteAccountRequest) -> Result<(), Error> {
        let DeleteAccountRequest { user_id } = request;

        // Profile rows reference the user row, so the profile goes first.
        self.profiles
            .delete_by_owner(&user_id)
            .await
            .map_err(Self::map_profile_error)?;
        self.users
            .delete(&user_id)
            .await
            .map_err(Self::map_user_error)?;
        Ok(())
    }
}

#[async_trait]
impl<P, U> ProfileQuery for ProfileService<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    async fn fetch_own_profile(&self, user_id: &UserId) -> Result<Profile, Error> {
        self.load_profile(user_id, "there is no profile for this user")
            .await
    }

    async fn fetch_profile_by_owner(&self, owner_id: &UserId) -> Result<Profile, Error> {
        self.load_profile(owner_id, "no profile found for this user")
            .await
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, Error> {
        self.profiles.list().await.map_err(Self::map_profile_error)
    }
}

#[cfg(test)]
#[path = "profile_service_tests.rs"]
mod tests;
