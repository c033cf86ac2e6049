//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ProfileService;
use crate::domain::ports::{
    FixtureProfileCommand, FixtureProfileQuery, ProfileCommand, ProfileQuery,
};
use crate::inbound::http::education::{add_education, remove_education};
use crate::inbound::http::experience::{add_experience, remove_experience};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::profiles::{
    delete_account, get_my_profile, get_profile_by_user, list_profiles, submit_profile,
};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::persistence::{DieselProfileRepository, DieselUserRepository};

/// Build the profile ports based on configuration.
///
/// Uses the Diesel-backed service when a pool is available, otherwise falls
/// back to the fixtures for tests.
fn build_profile_ports(config: &ServerConfig) -> (Arc<dyn ProfileQuery>, Arc<dyn ProfileCommand>) {
    match &config.db_pool {
        Some(pool) => {
            let service = Arc::new(ProfileService::new(
                Arc::new(DieselProfileRepository::new(pool.clone())),
                Arc::new(DieselUserRepository::new(pool.clone())),
            ));
            (service.clone(), service)
        }
        None => (Arc::new(FixtureProfileQuery), Arc::new(FixtureProfileCommand)),
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(get_my_profile)
        .service(submit_profile)
        .service(list_profiles)
        .service(get_profile_by_user)
        .service(delete_account)
        .service(add_experience)
        .service(remove_experience)
        .service(add_education)
        .service(remove_education);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let (profiles, profile_commands) = build_profile_ports(&config);
    let http_state = web::Data::new(HttpState::new(profiles, profile_commands));
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
