//! PostgreSQL-backed `ProfileRepository` implementation using Diesel ORM.
//!
//! Profiles persist as one row per owner with JSONB columns for the social
//! links and the two sub-record histories. Reads join `users` so every
//! profile carries its owner's public identity; decoding goes through domain
//! constructors so corrupt rows surface as query errors rather than panics.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::ports::{ProfileRepository, ProfileRepositoryError};
use crate::domain::{
    Education, Experience, Profile, ProfileDraft, ProfileOwner, SocialLinks, UserId,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewProfileRow, OwnerColumns, ProfileChangeset, ProfileRow};
use super::pool::{DbPool, PoolError};
use super::schema::{profiles, users};

/// Diesel-backed implementation of the `ProfileRepository` port.
#[derive(Clone)]
pub struct DieselProfileRepository {
    pool: DbPool,
}

impl DieselProfileRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ProfileRepositoryError {
    map_basic_pool_error(error, ProfileRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ProfileRepositoryError {
    map_basic_diesel_error(
        error,
        ProfileRepositoryError::query,
        ProfileRepositoryError::connection,
    )
}

fn corrupt_row_error(owner_id: Uuid, context: &str, detail: impl std::fmt::Display) -> ProfileRepositoryError {
    ProfileRepositoryError::query(format!(
        "profile row for {owner_id} has corrupt {context}: {detail}"
    ))
}

/// Encode a domain value into a JSONB column value.
fn encode_json<T: serde::Serialize>(
    value: &T,
    context: &str,
) -> Result<Value, ProfileRepositoryError> {
    serde_json::to_value(value)
        .map_err(|err| ProfileRepositoryError::query(format!("cannot encode {context}: {err}")))
}

/// Rebuild the domain aggregate from a profile row and its owner columns.
fn decode_profile(
    row: ProfileRow,
    owner: OwnerColumns,
) -> Result<Profile, ProfileRepositoryError> {
    let owner_id = row.owner_id;
    let social: SocialLinks = serde_json::from_value(row.social)
        .map_err(|err| corrupt_row_error(owner_id, "social links", err))?;
    let experience: Vec<Experience> = serde_json::from_value(row.experience)
        .map_err(|err| corrupt_row_error(owner_id, "experience history", err))?;
    let education: Vec<Education> = serde_json::from_value(row.education)
        .map_err(|err| corrupt_row_error(owner_id, "education history", err))?;

    let profile_owner = ProfileOwner {
        id: UserId::from_uuid(owner.id),
        name: owner.name,
        avatar: owner.avatar,
    };
    let draft = ProfileDraft {
        status: row.status,
        skills: row.skills,
        company: row.company,
        location: row.location,
        website: row.website,
        bio: row.bio,
        github_username: row.github_username,
        social,
    };
    let profile = Profile::new(profile_owner, draft)
        .map_err(|err| corrupt_row_error(owner_id, "profile fields", err))?;
    Ok(profile.with_experience(experience).with_education(education))
}

#[async_trait]
impl ProfileRepository for DieselProfileRepository {
    async fn save(&self, profile: &Profile) -> Result<(), ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let social = encode_json(profile.social(), "social links")?;
        let experience = encode_json(&profile.experience(), "experience history")?;
        let education = encode_json(&profile.education(), "education history")?;

        let new_row = NewProfileRow {
            owner_id: *profile.owner().id.as_uuid(),
            status: profile.status(),
            skills: profile.skills(),
            company: profile.company(),
            location: profile.location(),
            website: profile.website(),
            bio: profile.bio(),
            github_username: profile.github_username(),
            social: &social,
            experience: &experience,
            education: &education,
        };
        let changeset = ProfileChangeset {
            status: profile.status(),
            skills: profile.skills(),
            company: Some(profile.company()),
            location: Some(profile.location()),
            website: Some(profile.website()),
            bio: Some(profile.bio()),
            github_username: Some(profile.github_username()),
            social: &social,
            experience: &experience,
            education: &education,
            updated_at: Utc::now(),
        };

        diesel::insert_into(profiles::table)
            .values(&new_row)
            .on_conflict(profiles::owner_id)
            .do_update()
            .set(&changeset)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_owner(
        &self,
        owner_id: &UserId,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<(ProfileRow, OwnerColumns)> = profiles::table
            .inner_join(users::table)
            .filter(profiles::owner_id.eq(owner_id.as_uuid()))
            .select((ProfileRow::as_select(), OwnerColumns::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(|(profile, owner)| decode_profile(profile, owner))
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Profile>, ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(ProfileRow, OwnerColumns)> = profiles::table
            .inner_join(users::table)
            .order(profiles::created_at.desc())
            .select((ProfileRow::as_select(), OwnerColumns::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|(profile, owner)| decode_profile(profile, owner))
            .collect()
    }

    async fn delete_by_owner(&self, owner_id: &UserId) -> Result<bool, ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(
            profiles::table.filter(profiles::owner_id.eq(owner_id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the pure row conversion helpers.
    use rstest::rstest;

    use super::*;
    use crate::domain::ExperienceDraft;

    fn sample_row(owner_id: Uuid) -> ProfileRow {
        ProfileRow {
            owner_id,
            status: "Senior Developer".to_owned(),
            skills: vec!["Rust".to_owned(), "SQL".to_owned()],
            company: Some("Initech".to_owned()),
            location: None,
            website: None,
            bio: None,
            github_username: Some("ada".to_owned()),
            social: serde_json::json!({"twitter": "https://x.com/ada"}),
            experience: serde_json::json!([]),
            education: serde_json::json!([]),
        }
    }

    fn sample_owner(owner_id: Uuid) -> OwnerColumns {
        OwnerColumns {
            id: owner_id,
            name: "Ada Lovelace".to_owned(),
            avatar: None,
        }
    }

    #[test]
    fn decode_profile_rebuilds_the_aggregate() {
        let owner_id = Uuid::new_v4();
        let entry = Experience::new(ExperienceDraft {
            title: "Engineer".to_owned(),
            company: "Initech".to_owned(),
            location: None,
            from: Utc::now(),
            to: None,
            current: true,
            description: None,
        })
        .expect("valid entry");
        let mut row = sample_row(owner_id);
        row.experience = serde_json::to_value(vec![entry.clone()]).expect("encode entry");

        let profile =
            decode_profile(row, sample_owner(owner_id)).expect("row decodes");
        assert_eq!(profile.owner().id.as_uuid(), &owner_id);
        assert_eq!(profile.status(), "Senior Developer");
        assert_eq!(profile.social().twitter.as_deref(), Some("https://x.com/ada"));
        assert_eq!(profile.experience(), [entry]);
    }

    #[test]
    fn decode_profile_rejects_corrupt_history() {
        let owner_id = Uuid::new_v4();
        let mut row = sample_row(owner_id);
        row.experience = serde_json::json!([{"id": "nope"}]);

        let error = decode_profile(row, sample_owner(owner_id)).expect_err("corrupt row");
        assert!(matches!(error, ProfileRepositoryError::Query { .. }));
        assert!(error.to_string().contains("experience history"));
    }

    #[rstest]
    #[case(serde_json::json!("not-an-object"))]
    #[case(serde_json::json!(42))]
    fn decode_profile_rejects_malformed_social_links(#[case] social: Value) {
        let owner_id = Uuid::new_v4();
        let mut row = sample_row(owner_id);
        row.social = social;

        let error = decode_profile(row, sample_owner(owner_id)).expect_err("corrupt row");
        assert!(error.to_string().contains("social links"));
    }

    #[test]
    fn decode_profile_rejects_blank_stored_status() {
        let owner_id = Uuid::new_v4();
        let mut row = sample_row(owner_id);
        row.status = "  ".to_owned();

        let error = decode_profile(row, sample_owner(owner_id)).expect_err("corrupt row");
        assert!(error.to_string().contains("profile fields"));
    }

    #[test]
    fn encode_json_round_trips_social_links() {
        let links = SocialLinks {
            youtube: Some("https://youtube.com/@ada".to_owned()),
            ..SocialLinks::default()
        };
        let value = encode_json(&links, "social links").expect("encodes");
        let back: SocialLinks = serde_json::from_value(value).expect("decodes");
        assert_eq!(back, links);
    }
}
