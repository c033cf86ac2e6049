//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: every profile and health endpoint, the schema wrappers for
//! the error envelope, and the session cookie security scheme. The document
//! feeds Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::education::EducationRequest;
use crate::inbound::http::experience::ExperienceRequest;
use crate::inbound::http::profiles::{
    EducationEntryResponse, ExperienceEntryResponse, ProfileOwnerResponse, ProfileRequest,
    ProfileResponse, SocialLinksResponse,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie established by the external identity flow.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Devfolio backend API",
        description = "HTTP interface for developer profile management."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::profiles::get_my_profile,
        crate::inbound::http::profiles::submit_profile,
        crate::inbound::http::profiles::list_profiles,
        crate::inbound::http::profiles::get_profile_by_user,
        crate::inbound::http::profiles::delete_account,
        crate::inbound::http::experience::add_experience,
        crate::inbound::http::experience::remove_experience,
        crate::inbound::http::education::add_education,
        crate::inbound::http::education::remove_education,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ProfileRequest,
        ProfileResponse,
        ProfileOwnerResponse,
        SocialLinksResponse,
        ExperienceRequest,
        ExperienceEntryResponse,
        EducationRequest,
        EducationEntryResponse,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "profiles", description = "Developer profile management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
