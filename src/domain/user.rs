//! User account primitives: identifiers and the account entity owning a
//! profile.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation failures raised when parsing user identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier was not a canonical UUID.
    #[error("user id must be a valid UUID: {0}")]
    InvalidId(String),
}

/// Identifier of a user account.
///
/// Stores both the parsed UUID and the original string so lookups and
/// serialisation preserve the caller's representation.
///
/// # Examples
/// ```
/// use devfolio_backend::domain::UserId;
///
/// let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
/// assert_eq!(id.as_ref(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Parse an identifier from its string representation.
    ///
    /// # Errors
    /// Returns [`UserValidationError`] when the value is empty, carries
    /// surrounding whitespace, or is not a valid UUID.
    pub fn new(value: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(value.as_ref().to_owned())
    }

    /// Construct an identifier from an already-parsed UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, uuid.to_string())
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Access the parsed UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    fn from_owned(value: String) -> Result<Self, UserValidationError> {
        if value.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if value.trim() != value {
            return Err(UserValidationError::InvalidId(value));
        }
        let uuid = Uuid::parse_str(&value).map_err(|_| UserValidationError::InvalidId(value.clone()))?;
        Ok(Self(uuid, value))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.1
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.1)
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.1
    }
}

/// A user account as read from the identity store.
///
/// Accounts are created and authenticated by the identity service; this
/// service only reads them for profile ownership and deletes them when the
/// owner removes their account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    avatar: Option<String>,
}

impl User {
    /// Assemble an account from stored fields.
    #[must_use]
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        avatar: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            avatar,
        }
    }

    /// The account identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name shown alongside the profile.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Avatar URL, when the user has one.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    #[test]
    fn new_accepts_canonical_uuid() {
        let id = UserId::new(VALID_ID).expect("valid id");
        assert_eq!(id.as_ref(), VALID_ID);
        assert_eq!(id.as_uuid().to_string(), VALID_ID);
    }

    #[rstest]
    #[case("")]
    #[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    #[case("not-a-uuid")]
    fn new_rejects_invalid_values(#[case] raw: &str) {
        assert!(UserId::new(raw).is_err());
    }

    #[test]
    fn from_uuid_round_trips() {
        let uuid = Uuid::new_v4();
        let id = UserId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn random_ids_differ() {
        assert_ne!(UserId::random(), UserId::random());
    }

    #[test]
    fn serde_round_trips_as_string() {
        let id = UserId::new(VALID_ID).expect("valid id");
        let json = serde_json::to_string(&id).expect("serialise id");
        assert_eq!(json, format!("\"{VALID_ID}\""));
        let back: UserId = serde_json::from_str(&json).expect("deserialise id");
        assert_eq!(back, id);
    }

    #[test]
    fn user_exposes_fields() {
        let id = UserId::new(VALID_ID).expect("valid id");
        let user = User::new(id.clone(), "Ada Lovelace", "ada@example.com", None);
        assert_eq!(user.id(), &id);
        assert_eq!(user.name(), "Ada Lovelace");
        assert_eq!(user.email(), "ada@example.com");
        assert!(user.avatar().is_none());
    }
}
