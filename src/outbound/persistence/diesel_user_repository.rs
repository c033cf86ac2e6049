//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Accounts are written by the external identity flow; this adapter only
//! reads them for profile ownership and removes them on account deletion.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::UserRow;
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    map_basic_pool_error(error, UserRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    map_basic_diesel_error(
        error,
        UserRepositoryError::query,
        UserRepositoryError::connection,
    )
}

fn row_to_user(row: UserRow) -> User {
    User::new(UserId::from_uuid(row.id), row.name, row.email, row.avatar)
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_user))
    }

    async fn delete(&self, id: &UserId) -> Result<bool, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(users::table.filter(users::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use chrono::Utc;
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;

    #[rstest]
    fn row_to_user_maps_every_field() {
        let id = Uuid::new_v4();
        let row = UserRow {
            id,
            name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            password_hash: "hash".to_owned(),
            avatar: Some("https://example.com/ada.png".to_owned()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let user = row_to_user(row);
        assert_eq!(user.id().as_uuid(), &id);
        assert_eq!(user.name(), "Ada Lovelace");
        assert_eq!(user.email(), "ada@example.com");
        assert_eq!(user.avatar(), Some("https://example.com/ada.png"));
    }

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert!(matches!(mapped, UserRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn diesel_not_found_maps_to_query_error() {
        let mapped = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(mapped, UserRepositoryError::Query { .. }));
    }
}
