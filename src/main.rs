//! Backend entry-point: reads configuration from the environment, runs
//! pending migrations, and starts the HTTP server.

use std::env;
use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use diesel::Connection;
use diesel_migrations::MigrationHarness;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use devfolio_backend::inbound::http::health::HealthState;
use devfolio_backend::outbound::persistence::{DbPool, MIGRATIONS, PoolConfig};
use devfolio_backend::server::{ServerConfig, create_server};

fn load_session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}

fn run_migrations(database_url: &str) -> std::io::Result<()> {
    let mut conn = diesel::pg::PgConnection::establish(database_url)
        .map_err(|e| std::io::Error::other(format!("failed to connect for migrations: {e}")))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| std::io::Error::other(format!("failed to run migrations: {e}")))?;
    info!(count = applied.len(), "applied pending migrations");
    Ok(())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| std::io::Error::other("DATABASE_URL must be set"))?;

    let key = load_session_key()?;

    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
        .unwrap_or(true);

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    {
        let database_url = database_url.clone();
        tokio::task::spawn_blocking(move || run_migrations(&database_url))
            .await
            .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))??;
    }

    let pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let health_state = web::Data::new(HealthState::new());
    let config =
        ServerConfig::new(key, cookie_secure, SameSite::Lax, bind_addr).with_db_pool(pool);

    let server = create_server(health_state, config)?;
    info!(%bind_addr, "server listening");
    server.await
}
