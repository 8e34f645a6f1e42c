use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, StatusCode, request::Parts};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use subtle::ConstantTimeEq;

use crate::router::VaultState;

/// Ensure the inbound request carries the service key.
/// Accepts either:
/// - Header: `x-vault-key: ...`
/// - Header: `Authorization: Bearer <key>`
/// - Query string: `?key=...`
///
/// An empty configured key rejects everything; the administration surface is
/// disabled until one is set.
pub fn ensure_authorized(expected: &str, headers: &HeaderMap, query: Option<&str>) -> Result<(), Response> {
    if !expected.is_empty() {
        // 1) header: x-vault-key
        if let Some(hv) = headers.get("x-vault-key").and_then(|v| v.to_str().ok())
            && key_matches(expected, hv)
        {
            return Ok(());
        }

        // 2) header: Authorization: Bearer <key>
        if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
            let auth = auth.trim();
            if let Some(token) = auth
                .strip_prefix("Bearer ")
                .or_else(|| auth.strip_prefix("bearer "))
                && key_matches(expected, token)
            {
                return Ok(());
            }
        }

        // 3) query: key=...
        if let Some(qs) = query {
            for (k, v) in url::form_urlencoded::parse(qs.as_bytes()) {
                if k == "key" && key_matches(expected, &v) {
                    return Ok(());
                }
            }
        }
    }

    Err((
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "unauthorized", "reason": "invalid or missing key"})),
    )
        .into_response())
}

fn key_matches(expected: &str, provided: &str) -> bool {
    bool::from(provided.as_bytes().ct_eq(expected.as_bytes()))
}

#[derive(Debug, Clone, Copy)]
pub struct RequireKeyAuth;

impl FromRequestParts<VaultState> for RequireKeyAuth {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &VaultState,
    ) -> Result<Self, Self::Rejection> {
        let headers = &parts.headers;
        let query = parts.uri.query();
        ensure_authorized(&state.key, headers, query)?;
        Ok(Self)
    }
}
