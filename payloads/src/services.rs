//! Product operations built from backend calls.
//!
//! Nothing here panics or hands a [`ClientError`] to the caller: every
//! failure is logged and turned into a displayable message by [`recover`],
//! so screens only ever branch on `Ok`/`Err(message)`.

use crate::api_client::{PreviewOptions, file_id_from_url};
use crate::responses::{CreatedDocument, PostDocument, UserDocument};
use crate::validation::{validate_sign_in, validate_sign_up};
use crate::{
    APIClient, AccountId, ClientError, DocumentId, FileCategory, FileId,
    MediaAsset, NewPost, Post, Query, User, requests, unique_id,
};

/// How many posts the "latest videos" strip shows.
pub const LATEST_POSTS_LIMIT: u32 = 7;

const CREATED_AT: &str = "$createdAt";

/// Convert a backend failure into the message shown to the user.
///
/// The backend's own message is used when it sent one, otherwise a generic
/// sentence naming the attempted action, e.g. "An error occurred while
/// signing in".
pub fn recover<T>(
    action: &str,
    result: Result<T, ClientError>,
) -> Result<T, String> {
    result.map_err(|e| {
        tracing::error!("Error while {action}: {e:?}");
        e.backend_message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("An error occurred while {action}"))
    })
}

async fn get_user_for_account(
    client: &APIClient,
    account_id: &AccountId,
) -> Result<Option<User>, ClientError> {
    let users = client
        .list_documents::<UserDocument>(
            &client.config.user_collection_id,
            &[Query::equal("accountId", account_id.0.as_str())],
        )
        .await?;

    Ok(users.documents.into_iter().next().map(User::from))
}

/// Create an account, sign into it and store its profile document.
pub async fn create_user(
    client: &APIClient,
    email: &str,
    password: &str,
    name: &str,
) -> Result<User, String> {
    const ACTION: &str = "signing up";

    let account = recover(
        ACTION,
        client
            .create_account(&requests::CreateAccount {
                user_id: unique_id(),
                email: email.to_string(),
                password: password.to_string(),
                name: name.to_string(),
            })
            .await,
    )?;

    recover(
        ACTION,
        client
            .create_email_password_session(&requests::EmailPasswordSession {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await,
    )?;

    let avatar_url = client.avatar_initials_url(name);
    let created: CreatedDocument = recover(
        ACTION,
        client
            .create_document(
                &client.config.user_collection_id,
                &requests::CreateDocument {
                    document_id: unique_id(),
                    data: requests::UserData {
                        account_id: account.id.clone(),
                        email: email.to_string(),
                        name: name.to_string(),
                        avatar_url: avatar_url.clone(),
                    },
                },
            )
            .await,
    )?;

    tracing::info!("Created account {}", account.id);

    Ok(User {
        id: created.id,
        account_id: account.id,
        name: name.to_string(),
        email: email.to_string(),
        avatar_url,
    })
}

/// Validate the sign-up form and create the user. Nothing is sent to the
/// backend when validation fails.
pub async fn submit_sign_up(
    client: &APIClient,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, String> {
    if let Some(message) = validate_sign_up(name, email, password) {
        return Err(message);
    }
    create_user(client, email, password, name).await
}

pub async fn sign_in(
    client: &APIClient,
    email: &str,
    password: &str,
) -> Result<User, String> {
    const ACTION: &str = "signing in";

    let session = recover(
        ACTION,
        client
            .create_email_password_session(&requests::EmailPasswordSession {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await,
    )?;

    recover(ACTION, get_user_for_account(client, &session.user_id).await)?
        .ok_or_else(|| format!("An error occurred while {ACTION}"))
}

/// Validate the sign-in form and sign in. Nothing is sent to the backend
/// when validation fails.
pub async fn submit_sign_in(
    client: &APIClient,
    email: &str,
    password: &str,
) -> Result<User, String> {
    if let Some(message) = validate_sign_in(email, password) {
        return Err(message);
    }
    sign_in(client, email, password).await
}

/// End the current session. Failures are only logged.
pub async fn sign_out(client: &APIClient) {
    if let Err(e) = client.delete_current_session().await {
        tracing::error!("Error occurred while signing out: {e:?}");
    }
}

/// The profile of the signed-in user, or `None` without a session or when
/// the lookup fails.
pub async fn get_current_user(client: &APIClient) -> Option<User> {
    let account = match client.get_account().await {
        Ok(Some(account)) => account,
        Ok(None) => return None,
        Err(e) => {
            tracing::error!("Error occurred while getting logged in user: {e:?}");
            return None;
        }
    };

    match get_user_for_account(client, &account.id).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Error occurred while loading profile: {e:?}");
            None
        }
    }
}

async fn list_posts(
    client: &APIClient,
    action: &str,
    queries: &[Query],
) -> Result<Vec<Post>, String> {
    let posts = recover(
        action,
        client
            .list_documents::<PostDocument>(
                &client.config.post_collection_id,
                queries,
            )
            .await,
    )?;

    Ok(posts.documents.into_iter().map(Post::from).collect())
}

/// Every post, newest first.
pub async fn get_all_posts(client: &APIClient) -> Result<Vec<Post>, String> {
    list_posts(client, "retrieving posts", &[Query::order_desc(CREATED_AT)])
        .await
}

pub async fn get_latest_posts(
    client: &APIClient,
) -> Result<Vec<Post>, String> {
    list_posts(
        client,
        "retrieving latest posts",
        &[
            Query::order_desc(CREATED_AT),
            Query::limit(LATEST_POSTS_LIMIT),
        ],
    )
    .await
}

/// Full-text search on post titles.
pub async fn search_posts(
    client: &APIClient,
    query: &str,
) -> Result<Vec<Post>, String> {
    list_posts(client, "searching posts", &[Query::search("title", query)])
        .await
}

/// Posts created by the given profile, newest first.
pub async fn get_user_posts(
    client: &APIClient,
    user_id: &DocumentId,
) -> Result<Vec<Post>, String> {
    list_posts(
        client,
        "fetching posts",
        &[
            Query::equal("creator", user_id.0.as_str()),
            Query::order_desc(CREATED_AT),
        ],
    )
    .await
}

/// The url a stored file is displayed from: the raw file for videos, a
/// resized preview for images.
pub fn file_url(
    client: &APIClient,
    file_id: &FileId,
    category: FileCategory,
) -> String {
    match category {
        FileCategory::Video => client.file_view_url(file_id),
        FileCategory::Image => {
            client.file_preview_url(file_id, &PreviewOptions::default())
        }
    }
}

/// Upload a picked file and return the url it is served from.
///
/// Files without a mime type of the expected category, and empty files, are
/// rejected before any request is made.
pub async fn upload_file(
    client: &APIClient,
    asset: &MediaAsset,
    category: FileCategory,
) -> Result<String, String> {
    let mime_type = match asset.mime_type.as_deref() {
        Some(mime_type) if category.accepts(mime_type) => mime_type,
        _ => return Err(format!("mimetype of {category} not recognized")),
    };
    if asset.size() == 0 {
        return Err(format!("{category} file seems to be empty"));
    }

    let file_name = asset
        .file_name
        .clone()
        .unwrap_or_else(|| format!("{category}-{}", unique_id()));

    let stored = recover(
        &format!("uploading {category}"),
        client
            .create_file(&unique_id(), &file_name, mime_type, asset)
            .await,
    )?;

    Ok(file_url(client, &stored.id, category))
}

/// Upload the thumbnail and video concurrently, then store the post.
///
/// The post document is only created when both uploads succeed.
pub async fn create_post(
    client: &APIClient,
    form: &NewPost,
    user_id: &DocumentId,
) -> Result<DocumentId, String> {
    let (Some(thumbnail), Some(video)) = (&form.thumbnail, &form.video) else {
        return Err("Video and thumbnails are both required!".to_string());
    };

    let (thumbnail_url, video_url) = futures::join!(
        upload_file(client, thumbnail, FileCategory::Image),
        upload_file(client, video, FileCategory::Video),
    );

    let (thumbnail_url, video_url) = match (thumbnail_url, video_url) {
        (Ok(thumbnail_url), Ok(video_url)) => (thumbnail_url, video_url),
        (Err(thumbnail_error), Err(video_error)) => {
            return Err(format!("{thumbnail_error} and {video_error}"));
        }
        (Err(e), _) | (_, Err(e)) => return Err(e),
    };

    let created: CreatedDocument = recover(
        "creating post",
        client
            .create_document(
                &client.config.post_collection_id,
                &requests::CreateDocument {
                    document_id: unique_id(),
                    data: requests::PostData {
                        title: form.title.clone(),
                        thumbnail_url,
                        video_url,
                        prompt: form.prompt.clone(),
                        creator: user_id.clone(),
                    },
                },
            )
            .await,
    )?;

    tracing::info!("Created post {}", created.id);
    Ok(created.id)
}

async fn delete_post_resources(
    client: &APIClient,
    post: &Post,
) -> Result<(), ClientError> {
    for url in [&post.video_url, &post.thumbnail_url] {
        match file_id_from_url(url) {
            Some(file_id) => client.delete_file(&file_id).await?,
            None => tracing::warn!("No file id in {url}, skipping"),
        }
    }
    client
        .delete_document(&client.config.post_collection_id, &post.id)
        .await
}

/// Delete a post with its video and thumbnail files.
///
/// Returns `Ok(false)` without touching the backend when `user_id` is not
/// the post's creator.
pub async fn delete_post(
    client: &APIClient,
    post: &Post,
    user_id: &DocumentId,
) -> Result<bool, String> {
    if &post.creator.id != user_id {
        return Ok(false);
    }

    recover("deleting post", delete_post_resources(client, post).await)?;
    tracing::info!("Deleted post {}", post.id);
    Ok(true)
}
