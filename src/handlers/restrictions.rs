use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::info;

use crate::db::RestrictionSummary;
use crate::middleware::auth::RequireKeyAuth;
use crate::router::VaultState;
use crate::service::restriction::{Restriction, RestrictionId};
use crate::VaultError;

/// Ruleset fields accepted on create and update; the id is never
/// client-supplied.
#[derive(Debug, Deserialize)]
pub struct RestrictionPayload {
    pub name: String,
    #[serde(default)]
    pub min_numeric: u32,
    #[serde(default)]
    pub min_lower: u32,
    #[serde(default)]
    pub min_upper: u32,
    #[serde(default)]
    pub min_special: u32,
    #[serde(default)]
    pub min_length: u32,
    pub max_length: u32,
    #[serde(default)]
    pub special: String,
    #[serde(default)]
    pub lifetime: u32,
}

impl RestrictionPayload {
    fn into_restriction(self, id: RestrictionId) -> Restriction {
        Restriction {
            id,
            name: self.name,
            min_numeric: self.min_numeric,
            min_lower: self.min_lower,
            min_upper: self.min_upper,
            min_special: self.min_special,
            min_length: self.min_length,
            max_length: self.max_length,
            special: self.special,
            lifetime: self.lifetime,
        }
    }
}

pub async fn list_restrictions(
    _auth: RequireKeyAuth,
    State(state): State<VaultState>,
) -> Result<Json<Vec<RestrictionSummary>>, VaultError> {
    Ok(Json(state.storage.summaries().await?))
}

pub async fn get_restriction(
    _auth: RequireKeyAuth,
    State(state): State<VaultState>,
    Path(id): Path<String>,
) -> Result<Json<Restriction>, VaultError> {
    state
        .storage
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or(VaultError::UnknownRestriction(id))
}

pub async fn create_restriction(
    _auth: RequireKeyAuth,
    State(state): State<VaultState>,
    Json(payload): Json<RestrictionPayload>,
) -> Result<(StatusCode, Json<Restriction>), VaultError> {
    let restriction = payload.into_restriction(RestrictionId::generate());
    state.storage.store(&restriction).await?;
    info!(id = %restriction.id, name = %restriction.name, "created password restriction");
    Ok((StatusCode::CREATED, Json(restriction)))
}

pub async fn update_restriction(
    _auth: RequireKeyAuth,
    State(state): State<VaultState>,
    Path(id): Path<String>,
    Json(payload): Json<RestrictionPayload>,
) -> Result<Json<Restriction>, VaultError> {
    let restriction = payload.into_restriction(RestrictionId::new(id.clone()));
    if !state.storage.update(&restriction).await? {
        return Err(VaultError::UnknownRestriction(id));
    }
    info!(id = %restriction.id, "updated password restriction");
    Ok(Json(restriction))
}

pub async fn delete_restriction(
    _auth: RequireKeyAuth,
    State(state): State<VaultState>,
    Path(id): Path<String>,
) -> Result<StatusCode, VaultError> {
    if RestrictionId::new(id.clone()).is_builtin() {
        return Err(VaultError::ProtectedRestriction(id));
    }
    if !state.storage.delete(&id).await? {
        return Err(VaultError::UnknownRestriction(id));
    }
    info!(id = %id, "deleted password restriction");
    Ok(StatusCode::NO_CONTENT)
}
