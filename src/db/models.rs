use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::service::restriction::{Restriction, RestrictionId};

/// Row shape of the `password_restrictions` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbRestriction {
    pub restriction_id: String,
    pub name: String,
    pub min_numeric: i64,
    pub min_lower: i64,
    pub min_upper: i64,
    pub min_special: i64,
    pub min_length: i64,
    pub max_length: Option<i64>,
    pub special: String,
    pub lifetime: Option<i64>,
}

impl From<&Restriction> for DbRestriction {
    fn from(r: &Restriction) -> Self {
        Self {
            restriction_id: r.id.as_str().to_string(),
            name: r.name.clone(),
            min_numeric: i64::from(r.min_numeric),
            min_lower: i64::from(r.min_lower),
            min_upper: i64::from(r.min_upper),
            min_special: i64::from(r.min_special),
            min_length: i64::from(r.min_length),
            max_length: Some(i64::from(r.max_length)),
            special: r.special.clone(),
            lifetime: Some(i64::from(r.lifetime)),
        }
    }
}

impl From<DbRestriction> for Restriction {
    fn from(row: DbRestriction) -> Self {
        let min_length = row.min_length as u32;
        Restriction {
            id: RestrictionId::new(row.restriction_id),
            name: row.name,
            min_numeric: row.min_numeric as u32,
            min_lower: row.min_lower as u32,
            min_upper: row.min_upper as u32,
            min_special: row.min_special as u32,
            min_length,
            // Rows from old installations carry no maximum.
            max_length: row.max_length.map(|v| v as u32).unwrap_or(min_length + 16),
            special: row.special,
            lifetime: row.lifetime.map(|v| v as u32).unwrap_or(0),
        }
    }
}
