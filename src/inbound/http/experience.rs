//! Work history HTTP handlers.
//!
//! ```text
//! PUT    /api/v1/profile/experience
//! DELETE /api/v1/profile/experience/{exp_id}
//! ```

use actix_web::{delete, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ExperienceDraft;
use crate::domain::ports::{AddExperienceRequest, RemoveExperienceRequest};
use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::profiles::ProfileResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::AuthSession;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    RequiredFields, parse_optional_rfc3339_timestamp, parse_rfc3339_timestamp, parse_uuid,
};

/// Request payload for `PUT /api/v1/profile/experience`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct ExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    /// RFC 3339 start date.
    pub from: Option<String>,
    /// RFC 3339 end date; omit for a current position.
    pub to: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

pub(crate) fn parse_experience_request(
    payload: ExperienceRequest,
) -> Result<ExperienceDraft, Error> {
    let mut required = RequiredFields::new();
    let title = required.take("title", payload.title);
    let company = required.take("company", payload.company);
    let from = required.take("from", payload.from);
    required.finish()?;

    let (Some(title), Some(company), Some(from)) = (title, company, from) else {
        return Err(Error::internal("required fields vanished after validation"));
    };

    Ok(ExperienceDraft {
        title,
        company,
        location: payload.location,
        from: parse_rfc3339_timestamp(&from, "from")?,
        to: parse_optional_rfc3339_timestamp(payload.to, "to")?,
        current: payload.current.unwrap_or(false),
        description: payload.description,
    })
}

/// Add a work history entry to the front of the caller's profile.
#[utoipa::path(
    put,
    path = "/api/v1/profile/experience",
    request_body = ExperienceRequest,
    responses(
        (status = 200, description = "The updated profile", body = ProfileResponse),
        (status = 400, description = "Invalid request or no profile", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "addExperience"
)]
#[put("/profile/experience")]
pub async fn add_experience(
    state: web::Data<HttpState>,
    session: AuthSession,
    payload: web::Json<ExperienceRequest>,
) -> ApiResult<web::Json<ProfileResponse>> {
    let user_id = session.require_owner()?;
    let draft = parse_experience_request(payload.into_inner())?;
    let profile = state
        .profile_commands
        .add_experience(AddExperienceRequest { user_id, draft })
        .await?;
    Ok(web::Json(ProfileResponse::from(profile)))
}

/// Remove a work history entry from the caller's profile.
#[utoipa::path(
    delete,
    path = "/api/v1/profile/experience/{exp_id}",
    params(
        ("exp_id" = String, Path, description = "Identifier of the entry to remove")
    ),
    responses(
        (status = 200, description = "The updated profile", body = ProfileResponse),
        (status = 400, description = "Unknown entry or malformed identifier", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "removeExperience"
)]
#[delete("/profile/experience/{exp_id}")]
pub async fn remove_experience(
    state: web::Data<HttpState>,
    session: AuthSession,
    path: web::Path<String>,
) -> ApiResult<web::Json<ProfileResponse>> {
    let user_id = session.require_owner()?;
    let experience_id = parse_uuid(&path.into_inner(), "exp_id")?;
    let profile = state
        .profile_commands
        .remove_experience(RemoveExperienceRequest {
            user_id,
            experience_id,
        })
        .await?;
    Ok(web::Json(ProfileResponse::from(profile)))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for request parsing; handler flows are covered by
    //! the HTTP tests in `profiles_tests.rs` and the integration suite.
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    fn full_payload() -> ExperienceRequest {
        ExperienceRequest {
            title: Some("Engineer".to_owned()),
            company: Some("Initech".to_owned()),
            location: Some("Edinburgh".to_owned()),
            from: Some("2020-01-06T00:00:00Z".to_owned()),
            to: Some("2022-06-30T00:00:00Z".to_owned()),
            current: Some(false),
            description: Some("Built things".to_owned()),
        }
    }

    #[test]
    fn parses_a_full_payload() {
        let draft = parse_experience_request(full_payload()).expect("valid payload");
        assert_eq!(draft.title, "Engineer");
        assert_eq!(draft.company, "Initech");
        assert_eq!(draft.from.to_rfc3339(), "2020-01-06T00:00:00+00:00");
        assert!(draft.to.is_some());
        assert!(!draft.current);
    }

    #[test]
    fn current_defaults_to_false_when_omitted() {
        let mut payload = full_payload();
        payload.current = None;
        let draft = parse_experience_request(payload).expect("valid payload");
        assert!(!draft.current);
    }

    #[rstest]
    #[case(ExperienceRequest { title: None, ..full_payload() }, "title")]
    #[case(ExperienceRequest { company: None, ..full_payload() }, "company")]
    #[case(ExperienceRequest { from: None, ..full_payload() }, "from")]
    fn rejects_missing_required_fields(
        #[case] payload: ExperienceRequest,
        #[case] field: &str,
    ) {
        let error = parse_experience_request(payload).expect_err("field missing");
        assert_eq!(error.code, ErrorCode::InvalidRequest);
        let errors = error
            .details
            .as_ref()
            .and_then(|details| details["errors"].as_array())
            .expect("errors array");
        assert_eq!(errors[0]["field"], field);
    }

    #[test]
    fn rejects_unparseable_start_date() {
        let mut payload = full_payload();
        payload.from = Some("January 2020".to_owned());
        let error = parse_experience_request(payload).expect_err("bad timestamp");
        assert_eq!(error.details.expect("details")["code"], "invalid_timestamp");
    }
}
