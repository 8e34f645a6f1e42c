use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use tokio::net::TcpListener;
use url::Url;

use passvault::router::{VaultState, vault_router};
use passvault::{CredentialForm, GeneratorClient, Restriction, RestrictionId};

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

#[tokio::test]
async fn generation_handshake_fills_the_credential_form() {
    let (state, temp_path) = test_state("handshake").await;

    let policy = Restriction {
        id: RestrictionId::new("unix-1"),
        name: "Unix hosts".to_string(),
        min_numeric: 2,
        min_lower: 2,
        min_upper: 2,
        min_special: 1,
        min_length: 10,
        max_length: 14,
        special: "!#%&".to_string(),
        lifetime: 0,
    };
    state
        .storage
        .store(&policy)
        .await
        .expect("failed to store policy");

    let app = vault_router(state);
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind listener");
    let addr = listener.local_addr().expect("no local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let base = Url::parse(&format!("http://{addr}/")).expect("valid base url");
    let client = GeneratorClient::new(reqwest::Client::new(), base);

    let mut form = CredentialForm::default();
    let rid = RestrictionId::new("unix-1");
    client
        .generate_into(&mut form, Some(&rid))
        .await
        .expect("generation request failed");

    assert!(form.modal_visible());
    let displayed = form.displayed().expect("nothing on display").to_string();
    assert!(policy.verify(&displayed), "policy rejected {displayed:?}");

    form.use_generated().expect("password on display");
    assert_eq!(form.password_1, displayed);
    assert_eq!(form.password_2, displayed);
    assert!(!form.modal_visible());

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn display_matches_the_response_body_exactly() {
    let app = axum::Router::new().route(
        "/support/PasswordGenerator",
        axum::routing::get(|| async { "Xk9!mQ2z" }),
    );
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind listener");
    let addr = listener.local_addr().expect("no local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let base = Url::parse(&format!("http://{addr}/")).expect("valid base url");
    let client = GeneratorClient::new(reqwest::Client::new(), base);

    let mut form = CredentialForm::default();
    let rid = RestrictionId::new("2");
    client
        .generate_into(&mut form, Some(&rid))
        .await
        .expect("generation request failed");

    assert_eq!(form.displayed(), Some("Xk9!mQ2z"));
    assert!(form.modal_visible());

    form.use_generated().expect("password on display");
    assert_eq!(form.password_1, "Xk9!mQ2z");
    assert_eq!(form.password_2, "Xk9!mQ2z");
    assert!(!form.modal_visible());
}

#[tokio::test]
async fn failed_generation_leaves_the_form_unchanged() {
    // Nothing is listening on this port; the request itself fails.
    let base = Url::parse("http://127.0.0.1:1/").expect("valid base url");
    let client = GeneratorClient::new(reqwest::Client::new(), base);

    let mut form = CredentialForm::default();
    let result = client.generate_into(&mut form, None).await;

    assert!(result.is_err());
    assert!(!form.modal_visible());
    assert!(form.displayed().is_none());
}
