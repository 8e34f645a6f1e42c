//! SQL DDL for the password restriction storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema:
/// - `restriction_id` TEXT PRIMARY KEY (ids are minted by the application)
/// - Per-class minimums and length bounds mirrored from `Restriction`
/// - `max_length` nullable; rows migrated from old installations default it
///   to `min_length + 16` on read
/// - `lifetime` nullable, read as 0 when absent
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS password_restrictions (
    restriction_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    min_numeric INTEGER NOT NULL DEFAULT 0,
    min_lower INTEGER NOT NULL DEFAULT 0,
    min_upper INTEGER NOT NULL DEFAULT 0,
    min_special INTEGER NOT NULL DEFAULT 0,
    min_length INTEGER NOT NULL DEFAULT 0,
    max_length INTEGER NULL,
    special TEXT NOT NULL DEFAULT '',
    lifetime INTEGER NULL
);

CREATE INDEX IF NOT EXISTS idx_password_restrictions_name ON password_restrictions(name);
"#;
