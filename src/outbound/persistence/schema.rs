//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation. Regenerate with `diesel print-schema` when migrations change.

diesel::table! {
    /// User accounts table.
    ///
    /// Accounts are provisioned by the external identity flow; this service
    /// reads them for profile ownership and deletes them on account removal.
    users (id) {
        /// Primary key: UUID identifier.
        id -> Uuid,
        /// Display name shown alongside the profile.
        name -> Varchar,
        /// Registered email address (unique).
        email -> Varchar,
        /// Credential hash managed by the identity flow.
        password_hash -> Varchar,
        /// Avatar URL, when set.
        avatar -> Nullable<Varchar>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Developer profiles table, one row per owning user.
    profiles (owner_id) {
        /// Primary key and foreign key to `users.id`.
        owner_id -> Uuid,
        /// Professional status, e.g. "Senior Developer".
        status -> Varchar,
        /// Ordered skill list.
        skills -> Array<Text>,
        company -> Nullable<Varchar>,
        location -> Nullable<Varchar>,
        website -> Nullable<Varchar>,
        bio -> Nullable<Text>,
        github_username -> Nullable<Varchar>,
        /// Social links object, replaced as a unit on every submission.
        social -> Jsonb,
        /// Work history entries, newest first.
        experience -> Jsonb,
        /// Education entries, newest first.
        education -> Jsonb,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(profiles -> users (owner_id));
diesel::allow_tables_to_appear_in_same_query!(profiles, users);
