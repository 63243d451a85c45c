use payloads::services::{
    create_user, get_current_user, sign_in, sign_out, submit_sign_in,
    submit_sign_up,
};
use payloads::{AccountId, DocumentId, requests};
use reqwest::StatusCode;
use test_helpers::{
    TestApp, USER_COLLECTION_ID, assert_status_code, mock, spawn_app,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

async fn mount_session(app: &TestApp, account_id: &str) {
    app.mount_json(
        "POST",
        "/v1/account/sessions/email",
        201,
        mock::session(account_id),
    )
    .await;
}

#[tokio::test]
async fn session_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_json(
        "POST",
        "/v1/account/sessions/email",
        401,
        mock::error_body("Invalid credentials.", 401),
    )
    .await;

    let result = app
        .client
        .create_email_password_session(&requests::EmailPasswordSession {
            email: "alice@example.com".into(),
            password: "password1".into(),
        })
        .await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    // the backend's message reaches the sign-in screen unchanged
    let result = sign_in(&app.client, "alice@example.com", "password1").await;
    assert_eq!(result, Err("Invalid credentials.".to_string()));

    Ok(())
}

#[tokio::test]
async fn no_session_means_no_user() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_json(
        "GET",
        "/v1/account",
        401,
        mock::error_body("User (role: guests) missing scope (account)", 401),
    )
    .await;

    assert_eq!(app.client.get_account().await?, None);
    assert_eq!(get_current_user(&app.client).await, None);

    Ok(())
}

#[tokio::test]
async fn sign_in_loads_profile() -> anyhow::Result<()> {
    let app = spawn_app().await;
    mount_session(&app, "acc1").await;

    Mock::given(method("GET"))
        .and(path(TestApp::documents_path(USER_COLLECTION_ID)))
        .and(query_param(
            "queries[0]",
            r#"{"method":"equal","attribute":"accountId","values":["acc1"]}"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            mock::document_list(vec![mock::user_document(
                "u1", "acc1", "Alice",
            )]),
        ))
        .mount(&app.server)
        .await;

    let user = sign_in(&app.client, "alice@example.com", "password1")
        .await
        .unwrap();
    assert_eq!(user.id, DocumentId("u1".into()));
    assert_eq!(user.account_id, AccountId("acc1".into()));
    assert_eq!(user.name, "Alice");

    Ok(())
}

#[tokio::test]
async fn sign_in_without_profile() -> anyhow::Result<()> {
    let app = spawn_app().await;
    mount_session(&app, "acc1").await;
    app.mount_json(
        "GET",
        TestApp::documents_path(USER_COLLECTION_ID),
        200,
        mock::document_list(vec![]),
    )
    .await;

    let result = sign_in(&app.client, "alice@example.com", "password1").await;
    assert_eq!(
        result,
        Err("An error occurred while signing in".to_string())
    );

    Ok(())
}

#[tokio::test]
async fn invalid_forms_send_nothing() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result =
        submit_sign_up(&app.client, "", "alice@example.com", "password1")
            .await;
    assert_eq!(
        result,
        Err("Name should be between 1 to 128 characters long".to_string())
    );

    let result = submit_sign_in(&app.client, "not-an-email", "short").await;
    assert_eq!(
        result,
        Err("· Invalid email provided\n\n\
             · Password should be between 8 to 12 characters long"
            .to_string())
    );

    assert_eq!(app.request_count().await, 0);

    Ok(())
}

#[tokio::test]
async fn sign_up_creates_profile() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_json(
        "POST",
        "/v1/account",
        201,
        mock::account("acc2", "Bob", "bob@example.com"),
    )
    .await;
    mount_session(&app, "acc2").await;
    app.mount_json(
        "POST",
        TestApp::documents_path(USER_COLLECTION_ID),
        201,
        mock::created_document("u2"),
    )
    .await;

    let user = create_user(&app.client, "bob@example.com", "password1", "Bob")
        .await
        .unwrap();
    assert_eq!(user.id, DocumentId("u2".into()));
    assert_eq!(user.account_id, AccountId("acc2".into()));
    assert_eq!(user.avatar_url, app.client.avatar_initials_url("Bob"));

    // account, session and profile document
    assert_eq!(app.request_count().await, 3);

    Ok(())
}

#[tokio::test]
async fn sign_up_rejected_by_backend() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_json(
        "POST",
        "/v1/account",
        409,
        mock::error_body(
            "A user with the same id, email, or phone already exists.",
            409,
        ),
    )
    .await;

    let result =
        submit_sign_up(&app.client, "Bob", "bob@example.com", "password1")
            .await;
    assert_eq!(
        result,
        Err("A user with the same id, email, or phone already exists."
            .to_string())
    );

    // no session attempt after the account was refused
    assert_eq!(app.request_count().await, 1);

    Ok(())
}

#[tokio::test]
async fn sign_out_failure_is_swallowed() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_empty("DELETE", "/v1/account/sessions/current", 500)
        .await;

    sign_out(&app.client).await;
    assert_eq!(app.request_count().await, 1);

    Ok(())
}
