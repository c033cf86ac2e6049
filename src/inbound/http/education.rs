//! Education history HTTP handlers.
//!
//! ```text
//! PUT    /api/v1/profile/education
//! DELETE /api/v1/profile/education/{edu_id}
//! ```

use actix_web::{delete, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::EducationDraft;
use crate::domain::Error;
use crate::domain::ports::{AddEducationRequest, RemoveEducationRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::profiles::ProfileResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::AuthSession;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    RequiredFields, parse_optional_rfc3339_timestamp, parse_rfc3339_timestamp, parse_uuid,
};

/// Request payload for `PUT /api/v1/profile/education`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct EducationRequest {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    /// RFC 3339 start date.
    pub from: Option<String>,
    /// RFC 3339 end date; omit while the programme is ongoing.
    pub to: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

pub(crate) fn parse_education_request(payload: EducationRequest) -> Result<EducationDraft, Error> {
    let mut required = RequiredFields::new();
    let school = required.take("school", payload.school);
    let degree = required.take("degree", payload.degree);
    let field_of_study = required.take("fieldOfStudy", payload.field_of_study);
    let from = required.take("from", payload.from);
    required.finish()?;

    let (Some(school), Some(degree), Some(field_of_study), Some(from)) =
        (school, degree, field_of_study, from)
    else {
        return Err(Error::internal("required fields vanished after validation"));
    };

    Ok(EducationDraft {
        school,
        degree,
        field_of_study,
        from: parse_rfc3339_timestamp(&from, "from")?,
        to: parse_optional_rfc3339_timestamp(payload.to, "to")?,
        current: payload.current.unwrap_or(false),
        description: payload.description,
    })
}

/// Add an education entry to the front of the caller's profile.
#[utoipa::path(
    put,
    path = "/api/v1/profile/education",
    request_body = EducationRequest,
    responses(
        (status = 200, description = "The updated profile", body = ProfileResponse),
        (status = 400, description = "Invalid request or no profile", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "addEducation"
)]
#[put("/profile/education")]
pub async fn add_education(
    state: web::Data<HttpState>,
    session: AuthSession,
    payload: web::Json<EducationRequest>,
) -> ApiResult<web::Json<ProfileResponse>> {
    let user_id = session.require_owner()?;
    let draft = parse_education_request(payload.into_inner())?;
    let profile = state
        .profile_commands
        .add_education(AddEducationRequest { user_id, draft })
        .await?;
    Ok(web::Json(ProfileResponse::from(profile)))
}

/// Remove an education entry from the caller's profile.
#[utoipa::path(
    delete,
    path = "/api/v1/profile/education/{edu_id}",
    params(
        ("edu_id" = String, Path, description = "Identifier of the entry to remove")
    ),
    responses(
        (status = 200, description = "The updated profile", body = ProfileResponse),
        (status = 400, description = "Unknown entry or malformed identifier", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "removeEducation"
)]
#[delete("/profile/education/{edu_id}")]
pub async fn remove_education(
    state: web::Data<HttpState>,
    session: AuthSession,
    path: web::Path<String>,
) -> ApiResult<web::Json<ProfileResponse>> {
    let user_id = session.require_owner()?;
    let education_id = parse_uuid(&path.into_inner(), "edu_id")?;
    let profile = state
        .profile_commands
        .remove_education(RemoveEducationRequest {
            user_id,
            education_id,
        })
        .await?;
    Ok(web::Json(ProfileResponse::from(profile)))
}
