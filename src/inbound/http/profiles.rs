//! Profile HTTP handlers.
//!
//! ```text
//! GET    /api/v1/profile/me
//! POST   /api/v1/profile
//! GET    /api/v1/profile
//! GET    /api/v1/profile/user/{user_id}
//! DELETE /api/v1/profile
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::{DeleteAccountRequest, SubmitProfileRequest};
use crate::domain::{
    Education, Error, Experience, Profile, ProfileDraft, SocialLinks, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::AuthSession;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{RequiredFields, parse_skills, parse_uuid};

/// Request payload for `POST /api/v1/profile`.
///
/// `skills` arrives as a single comma-separated string, and social links sit
/// flat beside the profile fields; both match the shape profile editors
/// submit.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct ProfileRequest {
    pub status: Option<String>,
    /// Comma-separated list, e.g. `"Rust, SQL"`.
    pub skills: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

/// Owner identity attached to every profile response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOwnerResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Work history entry in a profile response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntryResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Experience> for ExperienceEntryResponse {
    fn from(entry: &Experience) -> Self {
        Self {
            id: entry.id().to_string(),
            title: entry.title().to_owned(),
            company: entry.company().to_owned(),
            location: entry.location().map(ToOwned::to_owned),
            from: entry.from().to_rfc3339(),
            to: entry.to().map(|to| to.to_rfc3339()),
            current: entry.current(),
            description: entry.description().map(ToOwned::to_owned),
        }
    }
}

/// Education entry in a profile response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntryResponse {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Education> for EducationEntryResponse {
    fn from(entry: &Education) -> Self {
        Self {
            id: entry.id().to_string(),
            school: entry.school().to_owned(),
            degree: entry.degree().to_owned(),
            field_of_study: entry.field_of_study().to_owned(),
            from: entry.from().to_rfc3339(),
            to: entry.to().map(|to| to.to_rfc3339()),
            current: entry.current(),
            description: entry.description().map(ToOwned::to_owned),
        }
    }
}

/// Social links in a profile response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinksResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl From<&SocialLinks> for SocialLinksResponse {
    fn from(links: &SocialLinks) -> Self {
        Self {
            youtube: links.youtube.clone(),
            twitter: links.twitter.clone(),
            facebook: links.facebook.clone(),
            linkedin: links.linkedin.clone(),
            instagram: links.instagram.clone(),
        }
    }
}

/// Response payload for a developer profile.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user: ProfileOwnerResponse,
    pub status: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    pub social: SocialLinksResponse,
    pub experience: Vec<ExperienceEntryResponse>,
    pub education: Vec<EducationEntryResponse>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            user: ProfileOwnerResponse {
                id: profile.owner().id.to_string(),
                name: profile.owner().name.clone(),
                avatar: profile.owner().avatar.clone(),
            },
            status: profile.status().to_owned(),
            skills: profile.skills().to_vec(),
            company: profile.company().map(ToOwned::to_owned),
            location: profile.location().map(ToOwned::to_owned),
            website: profile.website().map(ToOwned::to_owned),
            bio: profile.bio().map(ToOwned::to_owned),
            github_username: profile.github_username().map(ToOwned::to_owned),
            social: SocialLinksResponse::from(profile.social()),
            experience: profile
                .experience()
                .iter()
                .map(ExperienceEntryResponse::from)
                .collect(),
            education: profile
                .education()
                .iter()
                .map(EducationEntryResponse::from)
                .collect(),
        }
    }
}

/// Drop values the submitter left blank so they read as omitted.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

fn empty_skills_error() -> Error {
    Error::invalid_request("skills must contain at least one entry").with_details(json!({
        "field": "skills",
        "code": "empty",
    }))
}

pub(crate) fn parse_profile_request(payload: ProfileRequest) -> Result<ProfileDraft, Error> {
    let mut required = RequiredFields::new();
    let status = required.take("status", non_blank(payload.status));
    let skills = required.take("skills", non_blank(payload.skills));
    required.finish()?;

    // `finish` returned above unless both fields were present.
    let (Some(status), Some(skills)) = (status, skills) else {
        return Err(Error::internal("required fields vanished after validation"));
    };
    let skills = parse_skills(&skills);
    if skills.is_empty() {
        return Err(empty_skills_error());
    }

    Ok(ProfileDraft {
        status,
        skills,
        company: non_blank(payload.company),
        location: non_blank(payload.location),
        website: non_blank(payload.website),
        bio: non_blank(payload.bio),
        github_username: non_blank(payload.github_username),
        social: SocialLinks {
            youtube: non_blank(payload.youtube),
            twitter: non_blank(payload.twitter),
            facebook: non_blank(payload.facebook),
            linkedin: non_blank(payload.linkedin),
            instagram: non_blank(payload.instagram),
        },
    })
}

/// Fetch the authenticated user's profile.
#[utoipa::path(
    get,
    path = "/api/v1/profile/me",
    responses(
        (status = 200, description = "The caller's profile", body = ProfileResponse),
        (status = 400, description = "The caller has no profile", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "getMyProfile"
)]
#[get("/profile/me")]
pub async fn get_my_profile(
    state: web::Data<HttpState>,
    session: AuthSession,
) -> ApiResult<web::Json<ProfileResponse>> {
    let user_id = session.require_owner()?;
    let profile = state.profiles.fetch_own_profile(&user_id).await?;
    Ok(web::Json(ProfileResponse::from(profile)))
}

/// Create the caller's profile or merge a submission into it.
#[utoipa::path(
    post,
    path = "/api/v1/profile",
    request_body = ProfileRequest,
    responses(
        (status = 200, description = "The stored profile", body = ProfileResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "submitProfile"
)]
#[post("/profile")]
pub async fn submit_profile(
    state: web::Data<HttpState>,
    session: AuthSession,
    payload: web::Json<ProfileRequest>,
) -> ApiResult<web::Json<ProfileResponse>> {
    let user_id = session.require_owner()?;
    let draft = parse_profile_request(payload.into_inner())?;
    let profile = state
        .profile_commands
        .submit_profile(SubmitProfileRequest { user_id, draft })
        .await?;
    Ok(web::Json(ProfileResponse::from(profile)))
}

/// List every developer profile.
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    responses(
        (status = 200, description = "All profiles", body = [ProfileResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "listProfiles",
    security([])
)]
#[get("/profile")]
pub async fn list_profiles(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ProfileResponse>>> {
    let profiles = state.profiles.list_profiles().await?;
    Ok(web::Json(
        profiles.into_iter().map(ProfileResponse::from).collect(),
    ))
}

/// Fetch the profile owned by an arbitrary user.
#[utoipa::path(
    get,
    path = "/api/v1/profile/user/{user_id}",
    params(
        ("user_id" = String, Path, description = "Identifier of the profile owner")
    ),
    responses(
        (status = 200, description = "That user's profile", body = ProfileResponse),
        (status = 400, description = "No profile or malformed identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "getProfileByUser",
    security([])
)]
#[get("/profile/user/{user_id}")]
pub async fn get_profile_by_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ProfileResponse>> {
    let owner_id = UserId::from_uuid(parse_uuid(&path.into_inner(), "user_id")?);
    let profile = state.profiles.fetch_profile_by_owner(&owner_id).await?;
    Ok(web::Json(ProfileResponse::from(profile)))
}

/// Delete the caller's profile and user account.
#[utoipa::path(
    delete,
    path = "/api/v1/profile",
    responses(
        (status = 200, description = "Account and profile removed"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "deleteAccount"
)]
#[delete("/profile")]
pub async fn delete_account(
    state: web::Data<HttpState>,
    session: AuthSession,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_owner()?;
    state
        .profile_commands
        .delete_account(DeleteAccountRequest { user_id })
        .await?;
    // The account is gone, so the session ends with it.
    session.purge();
    Ok(HttpResponse::Ok().json(json!({ "message": "account deleted" })))
}

#[cfg(test)]
#[path = "profiles_tests.rs"]
mod tests;
