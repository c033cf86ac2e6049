//! Shared fixtures for handler tests.

use actix_session::config::CookieContentSecurity;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};

/// Session middleware matching the deployed configuration, minus transport
/// security: the `session` cookie stays private and lax, but `Secure` is off
/// so plain-HTTP test requests can carry it, and the key is throwaway.
pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .cookie_secure(false)
        .build()
}
