use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

use passvault::router::{VaultState, vault_router};
use passvault::{Restriction, RestrictionId};

async fn test_state(tag: &str) -> (VaultState, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "passvault-{}-{}-{}.sqlite",
        tag,
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let storage = passvault::db::spawn(&database_url)
        .await
        .expect("database setup failed");
    (VaultState::new(storage, "pwd".into()), temp_path)
}

fn restrictive_policy(id: &str) -> Restriction {
    Restriction {
        id: RestrictionId::new(id),
        name: "Unix hosts".to_string(),
        min_numeric: 2,
        min_lower: 2,
        min_upper: 2,
        min_special: 1,
        min_length: 10,
        max_length: 14,
        special: "!#%&".to_string(),
        lifetime: 0,
    }
}

async fn get_text(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let text = String::from_utf8(body.to_vec()).expect("response body was not utf-8");
    (status, text)
}

#[tokio::test]
async fn generator_without_a_policy_uses_the_defaults() {
    let (state, temp_path) = test_state("gen-default").await;
    let app = vault_router(state);

    let (status, password) = get_text(app, "/support/PasswordGenerator").await;
    assert_eq!(status, StatusCode::OK);
    assert!((8..=16).contains(&password.chars().count()));
    assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn generator_honours_the_selected_policy() {
    let (state, temp_path) = test_state("gen-policy").await;
    let policy = restrictive_policy("unix-1");
    state
        .storage
        .store(&policy)
        .await
        .expect("failed to store policy");
    let app = vault_router(state);

    for _ in 0..20 {
        let (status, password) =
            get_text(app.clone(), "/support/PasswordGenerator?rid=unix-1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(policy.verify(&password), "policy rejected {password:?}");
    }

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn generator_falls_back_on_an_unknown_policy() {
    let (state, temp_path) = test_state("gen-unknown").await;
    let app = vault_router(state);

    let (status, password) = get_text(app, "/support/PasswordGenerator?rid=no-such-id").await;
    assert_eq!(status, StatusCode::OK);
    assert!((8..=16).contains(&password.chars().count()));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn profile_catalog_is_served_in_ordinal_order() {
    let (state, temp_path) = test_state("profiles").await;
    let app = vault_router(state);

    let (status, body) = get_text(app, "/support/ConnectionProfiles").await;
    assert_eq!(status, StatusCode::OK);

    let entries: serde_json::Value = serde_json::from_str(&body).expect("invalid JSON body");
    let entries = entries.as_array().expect("expected a JSON array");
    assert_eq!(
        entries.len(),
        passvault::service::profiles::CONNECTION_PROFILES.len()
    );

    for (ordinal, entry) in entries.iter().enumerate() {
        assert_eq!(entry["ordinal"], ordinal);
        assert_eq!(entry["separate_driver"], ordinal > 3);
    }

    assert_eq!(entries[0]["driver"], "org.apache.derby.jdbc.EmbeddedDriver");
    let sentinel = entries.last().expect("empty catalog");
    assert_eq!(sentinel["driver"], "");
    assert_eq!(sentinel["url"], "");

    let _ = fs::remove_file(&temp_path);
}
