//! Driving port for profile write operations.
//!
//! The [`ProfileCommand`] trait defines the inbound contract for submitting
//! profiles, editing career history, and deleting accounts. HTTP handlers
//! call this port with validated payloads; implementations coordinate the
//! profile and user repositories.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    Education, EducationDraft, Error, Experience, ExperienceDraft, Profile, ProfileDraft,
    ProfileOwner, SocialLinks, UserId,
};

/// Request to create or update the caller's profile.
#[derive(Debug, Clone)]
pub struct SubmitProfileRequest {
    /// The authenticated owner of the profile.
    pub user_id: UserId,
    /// Validated profile fields to store.
    pub draft: ProfileDraft,
}

/// Request to add a work history entry to the caller's profile.
#[derive(Debug, Clone)]
pub struct AddExperienceRequest {
    /// The authenticated owner of the profile.
    pub user_id: UserId,
    /// Validated experience fields to store.
    pub draft: ExperienceDraft,
}

/// Request to remove a work history entry from the caller's profile.
#[derive(Debug, Clone)]
pub struct RemoveExperienceRequest {
    /// The authenticated owner of the profile.
    pub user_id: UserId,
    /// Identifier of the entry to remove.
    pub experience_id: Uuid,
}

/// Request to add an education entry to the caller's profile.
#[derive(Debug, Clone)]
pub struct AddEducationRequest {
    /// The authenticated owner of the profile.
    pub user_id: UserId,
    /// Validated education fields to store.
    pub draft: EducationDraft,
}

/// Request to remove an education entry from the caller's profile.
#[derive(Debug, Clone)]
pub struct RemoveEducationRequest {
    /// The authenticated owner of the profile.
    pub user_id: UserId,
    /// Identifier of the entry to remove.
    pub education_id: Uuid,
}

/// Request to delete the caller's account and profile.
#[derive(Debug, Clone)]
pub struct DeleteAccountRequest {
    /// The authenticated account to delete.
    pub user_id: UserId,
}

/// Driving port for profile write operations.
///
/// Mutations act on the caller's own profile only; ownership comes from the
/// session, never from the payload.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileCommand: Send + Sync {
    /// Create the caller's profile or merge a new submission into it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The submission fails validation.
    /// - No user account exists for the caller.
    /// - A database or connection error occurs.
    async fn submit_profile(&self, request: SubmitProfileRequest) -> Result<Profile, Error>;

    /// Add a work history entry to the front of the caller's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller has no profile or the entry fails
    /// validation.
    async fn add_experience(&self, request: AddExperienceRequest) -> Result<Profile, Error>;

    /// Remove a work history entry from the caller's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller has no profile or no entry matches the
    /// identifier.
    async fn remove_experience(&self, request: RemoveExperienceRequest)
    -> Result<Profile, Error>;

    /// Add an education entry to the front of the caller's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller has no profile or the entry fails
    /// validation.
    async fn add_education(&self, request: AddEducationRequest) -> Result<Profile, Error>;

    /// Remove an education entry from the caller's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller has no profile or no entry matches the
    /// identifier.
    async fn remove_education(&self, request: RemoveEducationRequest) -> Result<Profile, Error>;

    /// Delete the caller's profile and user account.
    ///
    /// Deletion is idempotent: missing rows are not an error.
    async fn delete_account(&self, request: DeleteAccountRequest) -> Result<(), Error>;
}

/// Fixture implementation for testing.
///
/// Echoes submissions back without persisting anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProfileCommand;

fn fixture_profile(owner_id: &UserId) -> Result<Profile, Error> {
    let owner = ProfileOwner {
        id: owner_id.clone(),
        name: "Ada Lovelace".to_owned(),
        avatar: None,
    };
    let draft = ProfileDraft {
        status: "Senior Developer".to_owned(),
        skills: vec!["Rust".to_owned()],
        company: None,
        location: None,
        website: None,
        bio: None,
        github_username: None,
        social: SocialLinks::default(),
    };
    Profile::new(owner, draft).map_err(|err| Error::invalid_request(err.to_string()))
}

#[async_trait]
impl ProfileCommand for FixtureProfileCommand {
    async fn submit_profile(&self, request: SubmitProfileRequest) -> Result<Profile, Error> {
        let owner = ProfileOwner {
            id: request.user_id,
            name: "Ada Lovelace".to_owned(),
            avatar: None,
        };
        Profile::new(owner, request.draft).map_err(|err| Error::invalid_request(err.to_string()))
    }

    async fn add_experience(&self, request: AddExperienceRequest) -> Result<Profile, Error> {
        let entry =
            Experience::new(request.draft).map_err(|err| Error::invalid_request(err.to_string()))?;
        let mut profile = fixture_profile(&request.user_id)?;
        profile.prepend_experience(entry);
        Ok(profile)
    }

    async fn remove_experience(
        &self,
        _request: RemoveExperienceRequest,
    ) -> Result<Profile, Error> {
        Err(Error::not_found("experience entry not found"))
    }

    async fn add_education(&self, request: AddEducationRequest) -> Result<Profile, Error> {
        let entry =
            Education::new(request.draft).map_err(|err| Error::invalid_request(err.to_string()))?;
        let mut profile = fixture_profile(&request.user_id)?;
        profile.prepend_education(entry);
        Ok(profile)
    }

    async fn remove_education(&self, _request: RemoveEducationRequest) -> Result<Profile, Error> {
        Err(Error::not_found("education entry not found"))
    }

    async fn delete_account(&self, _request: DeleteAccountRequest) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::ErrorCode;

    fn submit_request() -> SubmitProfileRequest {
        SubmitProfileRequest {
            user_id: UserId::random(),
            draft: ProfileDraft {
                status: "Senior Developer".to_owned(),
                skills: vec!["Rust".to_owned(), "SQL".to_owned()],
                company: Some("Initech".to_owned()),
                location: None,
                website: None,
                bio: None,
                github_username: None,
                social: SocialLinks::default(),
            },
        }
    }

    #[tokio::test]
    async fn fixture_command_echoes_submission() {
        let command = FixtureProfileCommand;
        let request = submit_request();
        let user_id = request.user_id.clone();

        let profile = command
            .submit_profile(request)
            .await
            .expect("fixture submit succeeds");

        assert_eq!(profile.owner().id, user_id);
        assert_eq!(profile.status(), "Senior Developer");
        assert_eq!(profile.skills(), ["Rust", "SQL"]);
    }

    #[tokio::test]
    async fn fixture_command_rejects_invalid_submission() {
        let command = FixtureProfileCommand;
        let mut request = submit_request();
        request.draft.skills.clear();

        let error = command
            .submit_profile(request)
            .await
            .expect_err("empty skills rejected");

        assert_eq!(error.code, ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn fixture_command_prepends_experience() {
        let command = FixtureProfileCommand;
        let request = AddExperienceRequest {
            user_id: UserId::random(),
            draft: ExperienceDraft {
                title: "Engineer".to_owned(),
                company: "Initech".to_owned(),
                location: None,
                from: Utc.with_ymd_and_hms(2020, 1, 6, 0, 0, 0).single().expect("valid date"),
                to: None,
                current: true,
                description: None,
            },
        };

        let profile = command
            .add_experience(request)
            .await
            .expect("fixture add succeeds");

        assert_eq!(profile.experience().len(), 1);
        assert_eq!(profile.experience()[0].title(), "Engineer");
    }

    #[tokio::test]
    async fn fixture_command_cannot_remove_entries() {
        let command = FixtureProfileCommand;
        let request = RemoveExperienceRequest {
            user_id: UserId::random(),
            experience_id: Uuid::new_v4(),
        };

        let error = command
            .remove_experience(request)
            .await
            .expect_err("nothing to remove");

        assert_eq!(error.code, ErrorCode::NotFound);
    }
}
