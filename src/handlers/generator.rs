use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::debug;

use crate::router::VaultState;
use crate::service::generator;
use crate::{Restriction, VaultError};

#[derive(Debug, Deserialize)]
pub struct GeneratorQuery {
    /// Restriction policy id. Absent, empty, or unknown ids all fall back to
    /// the default generation characteristics.
    pub rid: Option<String>,
}

/// GET /support/PasswordGenerator?rid=<id> -> plaintext generated password.
pub async fn generate_password(
    State(state): State<VaultState>,
    Query(query): Query<GeneratorQuery>,
) -> Result<String, VaultError> {
    let restriction: Option<Restriction> = match query.rid.as_deref() {
        Some(rid) if !rid.is_empty() => state.storage.get_by_id(rid).await?,
        _ => None,
    };

    debug!(
        rid = query.rid.as_deref().unwrap_or(""),
        policy = restriction.as_ref().map(|r| r.name.as_str()).unwrap_or("<default>"),
        "generating password"
    );

    let password = match &restriction {
        Some(r) => generator::from_restriction(r, false),
        None => generator::generate_default(),
    };
    Ok(password)
}
