//! Diesel row structs for the persistence adapters.
//!
//! Read rows derive `Queryable + Selectable`; write rows borrow from the
//! domain aggregate so upserts do not clone field data. Row structs never
//! leave this module's parent.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use super::schema::{profiles, users};

/// A user account row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(super) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[expect(dead_code, reason = "credential hashes never leave the identity flow")]
    pub password_hash: String,
    pub avatar: Option<String>,
    #[expect(dead_code, reason = "audit column selected for schema parity")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "audit column selected for schema parity")]
    pub updated_at: DateTime<Utc>,
}

/// A profile row joined with its owner's public identity.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(super) struct ProfileRow {
    pub owner_id: Uuid,
    pub status: String,
    pub skills: Vec<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: Value,
    pub experience: Value,
    pub education: Value,
}

/// Owner columns selected alongside a profile row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(super) struct OwnerColumns {
    pub id: Uuid,
    pub name: String,
    pub avatar: Option<String>,
}

/// Borrowed insert row for a new profile.
#[derive(Debug, Insertable)]
#[diesel(table_name = profiles)]
pub(super) struct NewProfileRow<'a> {
    pub owner_id: Uuid,
    pub status: &'a str,
    pub skills: &'a [String],
    pub company: Option<&'a str>,
    pub location: Option<&'a str>,
    pub website: Option<&'a str>,
    pub bio: Option<&'a str>,
    pub github_username: Option<&'a str>,
    pub social: &'a Value,
    pub experience: &'a Value,
    pub education: &'a Value,
}

/// Borrowed changeset applied when the owner already has a profile.
///
/// Every column is set: partial-merge semantics are resolved in the domain
/// before the aggregate reaches this adapter.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = profiles)]
pub(super) struct ProfileChangeset<'a> {
    pub status: &'a str,
    pub skills: &'a [String],
    pub company: Option<Option<&'a str>>,
    pub location: Option<Option<&'a str>>,
    pub website: Option<Option<&'a str>>,
    pub bio: Option<Option<&'a str>>,
    pub github_username: Option<Option<&'a str>>,
    pub social: &'a Value,
    pub experience: &'a Value,
    pub education: &'a Value,
    pub updated_at: DateTime<Utc>,
}
