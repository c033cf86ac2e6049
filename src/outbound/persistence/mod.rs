//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the profile and user repository ports backed
//! by PostgreSQL via Diesel, with async execution through `diesel-async` and
//! `bb8` connection pooling.
//!
//! The adapters stay thin: row structs and schema definitions are internal
//! implementation details, every database error maps onto a typed port
//! error, and no business logic lives here. Experience and education
//! histories persist as JSONB arrays on the profile row and are re-validated
//! through domain constructors when read back.

mod diesel_basic_error_mapping;
mod diesel_profile_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_profile_repository::DieselProfileRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

/// Embedded migrations run at startup before the server binds.
pub const MIGRATIONS: diesel_migrations::EmbeddedMigrations =
    diesel_migrations::embed_migrations!("migrations");
