//! Authenticated-owner session backed by the private session cookie.
//!
//! Handlers never touch Actix sessions directly; they extract [`AuthSession`]
//! and ask it for the profile owner the cookie identifies. Identity itself is
//! established outside this service, which only records and checks the owner
//! id.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, UserId};

const OWNER_KEY: &str = "user_id";

/// The caller's session, read and written in terms of profile owners.
#[derive(Clone)]
pub struct AuthSession {
    inner: Session,
}

impl AuthSession {
    fn new(inner: Session) -> Self {
        Self { inner }
    }

    /// Record `owner` as the authenticated caller.
    pub fn persist_owner(&self, owner: &UserId) -> Result<(), Error> {
        self.inner
            .insert(OWNER_KEY, owner.as_ref())
            .map_err(|error| Error::internal(format!("could not write session cookie: {error}")))
    }

    /// The owner id stored in the session, if any.
    ///
    /// A stored value that no longer parses as a [`UserId`] is treated as an
    /// anonymous caller rather than an error; the cookie is authenticated, so
    /// this only happens when the signing key rotated over incompatible data.
    pub fn owner_id(&self) -> Result<Option<UserId>, Error> {
        let stored = self
            .inner
            .get::<String>(OWNER_KEY)
            .map_err(|error| Error::internal(format!("could not read session cookie: {error}")))?;
        let Some(raw) = stored else {
            return Ok(None);
        };
        match UserId::new(raw) {
            Ok(owner) => Ok(Some(owner)),
            Err(error) => {
                tracing::warn!(%error, "session carried an unusable owner id");
                Ok(None)
            }
        }
    }

    /// The authenticated owner, or `401 Unauthorized` for anonymous callers.
    pub fn require_owner(&self) -> Result<UserId, Error> {
        self.owner_id()?
            .ok_or_else(|| Error::unauthorized("authentication required"))
    }

    /// End the session; the response instructs the client to drop the cookie.
    pub fn purge(&self) {
        self.inner.purge();
    }
}

impl FromRequest for AuthSession {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session = Session::from_request(req, payload);
        Box::pin(async move { session.await.map(AuthSession::new) })
    }
}
