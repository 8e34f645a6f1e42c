use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};

use crate::db::models::DbRestriction;
use crate::db::schema::SQLITE_INIT;
use crate::error::VaultError;
use crate::service::restriction::{Restriction, RestrictionId};

pub type SqlitePool = Pool<Sqlite>;

/// Summary line for listing policies without loading their full rulesets.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RestrictionSummary {
    pub id: String,
    pub name: String,
}

#[derive(Clone)]
pub struct RestrictionStorage {
    pool: SqlitePool,
}

impl RestrictionStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), VaultError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Create the reserved login/migrated policies when absent.
    pub async fn seed_builtin(&self) -> Result<(), VaultError> {
        let builtin = [
            Restriction {
                id: RestrictionId::login(),
                name: "Login passwords".to_string(),
                min_numeric: 0,
                min_lower: 0,
                min_upper: 0,
                min_special: 0,
                min_length: 8,
                max_length: 24,
                special: String::new(),
                lifetime: 0,
            },
            Restriction {
                id: RestrictionId::migrated(),
                name: "Migrated passwords".to_string(),
                min_numeric: 0,
                min_lower: 0,
                min_upper: 0,
                min_special: 0,
                min_length: 0,
                max_length: 16,
                special: String::new(),
                lifetime: 0,
            },
        ];

        for restriction in &builtin {
            if self.get_by_id(restriction.id.as_str()).await?.is_none() {
                self.store(restriction).await?;
            }
        }
        Ok(())
    }

    pub async fn store(&self, restriction: &Restriction) -> Result<(), VaultError> {
        let row = DbRestriction::from(restriction);
        sqlx::query(
            r#"
            INSERT INTO password_restrictions (
                restriction_id, name, min_numeric, min_lower, min_upper,
                min_special, min_length, max_length, special, lifetime
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(row.restriction_id)
        .bind(row.name)
        .bind(row.min_numeric)
        .bind(row.min_lower)
        .bind(row.min_upper)
        .bind(row.min_special)
        .bind(row.min_length)
        .bind(row.max_length)
        .bind(row.special)
        .bind(row.lifetime)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Update every field of an existing policy. Returns false when no row
    /// carries the id.
    pub async fn update(&self, restriction: &Restriction) -> Result<bool, VaultError> {
        let row = DbRestriction::from(restriction);
        let result = sqlx::query(
            r#"
            UPDATE password_restrictions SET
                name = ?,
                min_numeric = ?,
                min_lower = ?,
                min_upper = ?,
                min_special = ?,
                min_length = ?,
                max_length = ?,
                special = ?,
                lifetime = ?
              WHERE restriction_id = ?
            "#,
        )
        .bind(row.name)
        .bind(row.min_numeric)
        .bind(row.min_lower)
        .bind(row.min_upper)
        .bind(row.min_special)
        .bind(row.min_length)
        .bind(row.max_length)
        .bind(row.special)
        .bind(row.lifetime)
        .bind(row.restriction_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Restriction>, VaultError> {
        let row = sqlx::query(
            r#"SELECT restriction_id, name, min_numeric, min_lower, min_upper,
               min_special, min_length, max_length, special, lifetime
               FROM password_restrictions WHERE restriction_id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_model).transpose()
    }

    pub async fn summaries(&self) -> Result<Vec<RestrictionSummary>, VaultError> {
        let rows = sqlx::query(
            "SELECT restriction_id, name FROM password_restrictions ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(|row| {
                Ok(RestrictionSummary {
                    id: row.try_get("restriction_id")?,
                    name: row.try_get("name")?,
                })
            })
            .collect()
    }

    /// Returns false when no row carries the id.
    pub async fn delete(&self, id: &str) -> Result<bool, VaultError> {
        let result = sqlx::query("DELETE FROM password_restrictions WHERE restriction_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    fn row_to_model(row: SqliteRow) -> Result<Restriction, VaultError> {
        let db_row = DbRestriction {
            restriction_id: row.try_get("restriction_id")?,
            name: row.try_get("name")?,
            min_numeric: row.try_get("min_numeric")?,
            min_lower: row.try_get("min_lower")?,
            min_upper: row.try_get("min_upper")?,
            min_special: row.try_get("min_special")?,
            min_length: row.try_get("min_length")?,
            max_length: row.try_get("max_length")?,
            special: row.try_get("special")?,
            lifetime: row.try_get("lifetime")?,
        };
        Ok(db_row.into())
    }
}
