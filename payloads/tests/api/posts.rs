use payloads::responses::PostDocument;
use payloads::services::{
    delete_post, get_all_posts, get_latest_posts, get_user_posts,
    search_posts,
};
use payloads::{DocumentId, Post};
use test_helpers::{POST_COLLECTION_ID, TestApp, mock, spawn_app};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, ResponseTemplate};

const ORDER_NEWEST: &str = r#"{"method":"orderDesc","attribute":"$createdAt"}"#;

fn post(app: &TestApp, id: &str, creator_id: &str) -> Post {
    let json = mock::post_document(id, creator_id, "Sunset", &app.endpoint());
    serde_json::from_value::<PostDocument>(json).unwrap().into()
}

#[tokio::test]
async fn all_posts_newest_first() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let endpoint = app.endpoint();

    Mock::given(method("GET"))
        .and(path(TestApp::documents_path(POST_COLLECTION_ID)))
        .and(query_param("queries[0]", ORDER_NEWEST))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            mock::document_list(vec![
                mock::post_document("p2", "u1", "Second", &endpoint),
                mock::post_document("p1", "u1", "First", &endpoint),
            ]),
        ))
        .mount(&app.server)
        .await;

    let posts = get_all_posts(&app.client).await.unwrap();
    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Second", "First"]);
    assert_eq!(posts[0].creator.id, DocumentId("u1".into()));

    Ok(())
}

#[tokio::test]
async fn latest_posts_are_limited() -> anyhow::Result<()> {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path(TestApp::documents_path(POST_COLLECTION_ID)))
        .and(query_param("queries[0]", ORDER_NEWEST))
        .and(query_param("queries[1]", r#"{"method":"limit","values":[7]}"#))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock::document_list(vec![])),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    assert_eq!(get_latest_posts(&app.client).await, Ok(vec![]));

    Ok(())
}

#[tokio::test]
async fn search_and_user_posts_queries() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let endpoint = app.endpoint();

    Mock::given(method("GET"))
        .and(path(TestApp::documents_path(POST_COLLECTION_ID)))
        .and(query_param(
            "queries[0]",
            r#"{"method":"search","attribute":"title","values":["sun"]}"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            mock::document_list(vec![mock::post_document(
                "p1", "u1", "Sunset", &endpoint,
            )]),
        ))
        .mount(&app.server)
        .await;

    Mock::given(method("GET"))
        .and(path(TestApp::documents_path(POST_COLLECTION_ID)))
        .and(query_param(
            "queries[0]",
            r#"{"method":"equal","attribute":"creator","values":["u7"]}"#,
        ))
        .and(query_param("queries[1]", ORDER_NEWEST))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock::document_list(vec![])),
        )
        .mount(&app.server)
        .await;

    let found = search_posts(&app.client, "sun").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Sunset");

    let mine = get_user_posts(&app.client, &DocumentId("u7".into()))
        .await
        .unwrap();
    assert!(mine.is_empty());

    Ok(())
}

#[tokio::test]
async fn listing_errors_become_messages() -> anyhow::Result<()> {
    let app = spawn_app().await;

    // no message from the backend: the generic sentence is used
    app.mount_empty("GET", TestApp::documents_path(POST_COLLECTION_ID), 500)
        .await;
    assert_eq!(
        get_all_posts(&app.client).await,
        Err("An error occurred while retrieving posts".to_string())
    );

    app.server.reset().await;
    app.mount_json(
        "GET",
        TestApp::documents_path(POST_COLLECTION_ID),
        400,
        mock::error_body("Index not found: title", 400),
    )
    .await;
    assert_eq!(
        search_posts(&app.client, "sun").await,
        Err("Index not found: title".to_string())
    );

    Ok(())
}

#[tokio::test]
async fn only_creator_can_delete() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let post = post(&app, "p1", "u1");

    let deleted =
        delete_post(&app.client, &post, &DocumentId("someone-else".into()))
            .await;
    assert_eq!(deleted, Ok(false));
    assert_eq!(app.request_count().await, 0);

    Ok(())
}

#[tokio::test]
async fn delete_removes_files_and_document() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let post = post(&app, "p1", "u1");

    Mock::given(method("DELETE"))
        .and(path_regex(r"^/v1/storage/buckets/media/files/(video|thumb)-p1$"))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&app.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!(
            "{}/p1",
            TestApp::documents_path(POST_COLLECTION_ID)
        )))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&app.server)
        .await;

    let deleted =
        delete_post(&app.client, &post, &DocumentId("u1".into())).await;
    assert_eq!(deleted, Ok(true));

    Ok(())
}

#[tokio::test]
async fn failed_delete_keeps_document() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let post = post(&app, "p1", "u1");

    app.mount_json(
        "DELETE",
        "/v1/storage/buckets/media/files/video-p1",
        404,
        mock::error_body("File not found", 404),
    )
    .await;

    let deleted =
        delete_post(&app.client, &post, &DocumentId("u1".into())).await;
    assert_eq!(deleted, Err("File not found".to_string()));
    assert_eq!(app.request_count().await, 1);

    Ok(())
}
