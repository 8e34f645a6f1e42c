use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::db::RestrictionStorage;
use crate::handlers;

/// Shared state for the HTTP surface: the restriction storage plus the
/// service key guarding administrative routes.
#[derive(Clone)]
pub struct VaultState {
    pub storage: RestrictionStorage,
    pub key: Arc<str>,
}

impl VaultState {
    pub fn new(storage: RestrictionStorage, key: Arc<str>) -> Self {
        Self { storage, key }
    }
}

pub fn vault_router(state: VaultState) -> Router {
    Router::new()
        // Pre-login support surface used by the configuration pages.
        .route(
            "/support/PasswordGenerator",
            get(handlers::generator::generate_password),
        )
        .route(
            "/support/ConnectionProfiles",
            get(handlers::profiles::list_profiles),
        )
        // Administration surface, gated by the service key.
        .route(
            "/restrictions",
            get(handlers::restrictions::list_restrictions)
                .post(handlers::restrictions::create_restriction),
        )
        .route(
            "/restrictions/{id}",
            get(handlers::restrictions::get_restriction)
                .put(handlers::restrictions::update_restriction)
                .delete(handlers::restrictions::delete_restriction),
        )
        .with_state(state)
}
