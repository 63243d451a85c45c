use serde::Serialize;

use crate::{AccountId, DocumentId};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccount {
    pub user_id: String,
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct EmailPasswordSession {
    pub email: String,
    pub password: String,
}

/// Envelope for creating a document in a collection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocument<T> {
    pub document_id: String,
    pub data: T,
}

/// Fields of a user profile document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub account_id: AccountId,
    pub email: String,
    pub name: String,
    pub avatar_url: String,
}

/// Fields of a post document. `creator` references the author's profile
/// document and is expanded when posts are listed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub title: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub prompt: String,
    pub creator: DocumentId,
}
