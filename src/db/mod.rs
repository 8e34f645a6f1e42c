//! Database module: models and schema for persistent storage.

pub mod models;
pub mod schema;
pub mod sqlite;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use sqlite::{RestrictionStorage, RestrictionSummary};

use crate::error::VaultError;

/// Open (creating if missing) the restriction database, run the DDL and seed
/// the reserved policies.
pub async fn spawn(database_url: &str) -> Result<RestrictionStorage, VaultError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    let storage = RestrictionStorage::new(pool);
    storage.init_schema().await?;
    storage.seed_builtin().await?;
    Ok(storage)
}
