//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ProfileCommand, ProfileQuery};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use devfolio_backend::domain::ports::{FixtureProfileCommand, FixtureProfileQuery};
/// use devfolio_backend::inbound::http::state::HttpState;
///
/// let state = HttpState::new(
///     Arc::new(FixtureProfileQuery),
///     Arc::new(FixtureProfileCommand),
/// );
/// let _query = state.profiles.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Read side of the profile service.
    pub profiles: Arc<dyn ProfileQuery>,
    /// Write side of the profile service.
    pub profile_commands: Arc<dyn ProfileCommand>,
}

impl HttpState {
    /// Bundle the profile ports for handler injection.
    pub fn new(profiles: Arc<dyn ProfileQuery>, profile_commands: Arc<dyn ProfileCommand>) -> Self {
        Self {
            profiles,
            profile_commands,
        }
    }
}
