mod auth;
mod posts;
mod storage;

use test_helpers::{PROJECT_ID, mock, spawn_app};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn requests_carry_project_header() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/v1/account"))
        .and(header("X-Appwrite-Project", PROJECT_ID))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock::account("acc1", "Alice", "a@b.c")),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let account = app.client.get_account().await?;
    assert_eq!(account.map(|a| a.name), Some("Alice".to_string()));

    Ok(())
}
