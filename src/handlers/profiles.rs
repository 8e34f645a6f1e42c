use axum::Json;
use serde::Serialize;

use crate::service::profiles::{CONNECTION_PROFILES, requires_separate_driver};

/// One catalog entry as served to the configuration form. Ordinal order is
/// the form contract; the client indexes these by position.
#[derive(Debug, Serialize)]
pub struct ProfileEntry {
    pub ordinal: usize,
    pub label: &'static str,
    pub driver: &'static str,
    pub url: &'static str,
    pub separate_driver: bool,
}

/// GET /support/ConnectionProfiles -> the ordered driver/URL catalog.
pub async fn list_profiles() -> Json<Vec<ProfileEntry>> {
    let entries = CONNECTION_PROFILES
        .iter()
        .enumerate()
        .map(|(ordinal, profile)| ProfileEntry {
            ordinal,
            label: profile.label,
            driver: profile.driver,
            url: profile.url,
            separate_driver: requires_separate_driver(ordinal),
        })
        .collect();
    Json(entries)
}
