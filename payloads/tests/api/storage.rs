use payloads::api_client::UPLOAD_CHUNK_SIZE;
use payloads::services::{create_post, upload_file};
use payloads::{
    DocumentId, FileCategory, FileId, MediaAsset, NewPost, PreviewOptions,
};
use test_helpers::{POST_COLLECTION_ID, TestApp, mock, spawn_app};

fn asset(mime_type: &str, size: usize) -> MediaAsset {
    MediaAsset {
        file_name: Some("clip".into()),
        mime_type: Some(mime_type.into()),
        data: vec![7; size],
    }
}

#[tokio::test]
async fn bad_files_are_not_uploaded() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result =
        upload_file(&app.client, &asset("image/png", 0), FileCategory::Image)
            .await;
    assert_eq!(result, Err("image file seems to be empty".to_string()));

    let result =
        upload_file(&app.client, &asset("image/png", 10), FileCategory::Video)
            .await;
    assert_eq!(result, Err("mimetype of video not recognized".to_string()));

    let untyped = MediaAsset {
        mime_type: None,
        ..asset("video/mp4", 10)
    };
    let result =
        upload_file(&app.client, &untyped, FileCategory::Video).await;
    assert_eq!(result, Err("mimetype of video not recognized".to_string()));

    assert_eq!(app.request_count().await, 0);

    Ok(())
}

#[tokio::test]
async fn upload_returns_display_url() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_json(
        "POST",
        TestApp::files_path(),
        201,
        mock::stored_file("f1", "image/png", 10),
    )
    .await;

    let url =
        upload_file(&app.client, &asset("image/png", 10), FileCategory::Image)
            .await
            .unwrap();
    assert_eq!(
        url,
        app.client
            .file_preview_url(&FileId("f1".into()), &PreviewOptions::default())
    );

    let url =
        upload_file(&app.client, &asset("video/mp4", 10), FileCategory::Video)
            .await
            .unwrap();
    assert_eq!(url, app.client.file_view_url(&FileId("f1".into())));

    Ok(())
}

#[tokio::test]
async fn large_files_upload_in_chunks() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_json(
        "POST",
        TestApp::files_path(),
        201,
        mock::stored_file("big", "video/mp4", 0),
    )
    .await;

    let size = UPLOAD_CHUNK_SIZE + 1024;
    upload_file(&app.client, &asset("video/mp4", size), FileCategory::Video)
        .await
        .unwrap();

    let requests = app.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let range = |i: usize| {
        requests[i]
            .headers
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    assert_eq!(
        range(0),
        Some(format!("bytes 0-{}/{size}", UPLOAD_CHUNK_SIZE - 1))
    );
    assert_eq!(
        range(1),
        Some(format!("bytes {UPLOAD_CHUNK_SIZE}-{}/{size}", size - 1))
    );
    assert!(requests[0].headers.get("x-appwrite-id").is_none());
    assert!(requests[1].headers.get("x-appwrite-id").is_some());

    Ok(())
}

#[tokio::test]
async fn post_needs_both_files() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let form = NewPost {
        title: "Sunset".into(),
        prompt: "A sunset".into(),
        video: Some(asset("video/mp4", 10)),
        thumbnail: None,
    };

    let result = create_post(&app.client, &form, &DocumentId("u1".into())).await;
    assert_eq!(
        result,
        Err("Video and thumbnails are both required!".to_string())
    );
    assert_eq!(app.request_count().await, 0);

    Ok(())
}

#[tokio::test]
async fn upload_errors_are_combined() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let form = NewPost {
        title: "Sunset".into(),
        prompt: "A sunset".into(),
        video: Some(asset("video/mp4", 0)),
        thumbnail: Some(asset("text/plain", 10)),
    };

    let result = create_post(&app.client, &form, &DocumentId("u1".into())).await;
    assert_eq!(
        result,
        Err("mimetype of image not recognized and video file seems to be \
             empty"
            .to_string())
    );

    // a single failure is reported alone
    let form = NewPost {
        thumbnail: Some(asset("image/png", 10)),
        ..form
    };
    app.mount_json(
        "POST",
        TestApp::files_path(),
        201,
        mock::stored_file("t1", "image/png", 10),
    )
    .await;
    let result = create_post(&app.client, &form, &DocumentId("u1".into())).await;
    assert_eq!(result, Err("video file seems to be empty".to_string()));

    // the post document is never written
    assert_eq!(app.request_count().await, 1);

    Ok(())
}

#[tokio::test]
async fn post_is_created_after_uploads() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_json(
        "POST",
        TestApp::files_path(),
        201,
        mock::stored_file("f1", "video/mp4", 10),
    )
    .await;
    app.mount_json(
        "POST",
        TestApp::documents_path(POST_COLLECTION_ID),
        201,
        mock::created_document("p9"),
    )
    .await;

    let form = NewPost {
        title: "Sunset".into(),
        prompt: "A sunset".into(),
        video: Some(asset("video/mp4", 10)),
        thumbnail: Some(asset("image/jpeg", 10)),
    };
    let id = create_post(&app.client, &form, &DocumentId("u1".into()))
        .await
        .unwrap();
    assert_eq!(id, DocumentId("p9".into()));

    let requests = app.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    let body: serde_json::Value = serde_json::from_slice(&requests[2].body)?;
    assert_eq!(body["data"]["title"], "Sunset");
    assert_eq!(body["data"]["creator"], "u1");
    assert_eq!(
        body["data"]["videoUrl"],
        app.client.file_view_url(&FileId("f1".into()))
    );

    Ok(())
}
