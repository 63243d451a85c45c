//! Json bodies shaped like the backend's responses.

use serde_json::{Value, json};

pub fn account(id: &str, name: &str, email: &str) -> Value {
    json!({
        "$id": id,
        "name": name,
        "email": email,
        "status": true,
    })
}

pub fn session(account_id: &str) -> Value {
    json!({
        "$id": format!("session-{account_id}"),
        "userId": account_id,
        "current": true,
    })
}

pub fn user_document(id: &str, account_id: &str, name: &str) -> Value {
    json!({
        "$id": id,
        "accountId": account_id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "avatarUrl": format!("https://avatars.test/{name}"),
    })
}

/// A post whose files live in the `media` bucket of the given endpoint.
pub fn post_document(
    id: &str,
    creator_id: &str,
    title: &str,
    endpoint: &str,
) -> Value {
    let files = format!("{endpoint}/storage/buckets/media/files");
    json!({
        "$id": id,
        "$createdAt": "2024-03-01T12:00:00.000+00:00",
        "title": title,
        "prompt": format!("Prompt for {title}"),
        "thumbnailUrl": format!("{files}/thumb-{id}/preview?project=pixel-test"),
        "videoUrl": format!("{files}/video-{id}/view?project=pixel-test"),
        "creator": user_document(creator_id, "account", "Creator"),
    })
}

pub fn document_list(documents: Vec<Value>) -> Value {
    json!({
        "total": documents.len(),
        "documents": documents,
    })
}

pub fn created_document(id: &str) -> Value {
    json!({ "$id": id })
}

pub fn stored_file(id: &str, mime_type: &str, size: u64) -> Value {
    json!({
        "$id": id,
        "name": format!("{id}.bin"),
        "mimeType": mime_type,
        "sizeOriginal": size,
        "chunksTotal": 1,
        "chunksUploaded": 1,
    })
}

pub fn error_body(message: &str, code: u16) -> Value {
    json!({
        "message": message,
        "code": code,
        "type": "general_argument_invalid",
    })
}
