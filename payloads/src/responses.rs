use jiff::Timestamp;
use serde::Deserialize;

use crate::{AccountId, Creator, DocumentId, FileId, Post, User};

/// The authenticated account behind the current session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    #[serde(rename = "$id")]
    pub id: AccountId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "$id")]
    pub id: String,
    pub user_id: AccountId,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentList<T> {
    pub total: u64,
    pub documents: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "$id")]
    pub id: DocumentId,
    pub account_id: AccountId,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id,
            account_id: doc.account_id,
            name: doc.name,
            email: doc.email,
            avatar_url: doc.avatar_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorDocument {
    #[serde(rename = "$id")]
    pub id: DocumentId,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDocument {
    #[serde(rename = "$id")]
    pub id: DocumentId,
    #[serde(rename = "$createdAt")]
    pub created_at: Timestamp,
    pub title: String,
    pub thumbnail_url: String,
    pub prompt: String,
    pub video_url: String,
    pub creator: CreatorDocument,
}

impl From<PostDocument> for Post {
    fn from(doc: PostDocument) -> Self {
        Self {
            id: doc.id,
            created_at: doc.created_at,
            title: doc.title,
            thumbnail_url: doc.thumbnail_url,
            prompt: doc.prompt,
            video_url: doc.video_url,
            creator: Creator {
                id: doc.creator.id,
                name: doc.creator.name,
                avatar_url: doc.creator.avatar_url,
            },
        }
    }
}

/// The id of a freshly created document. Relations in the creation
/// response are not expanded, so only the id is read back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedDocument {
    #[serde(rename = "$id")]
    pub id: DocumentId,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    #[serde(rename = "$id")]
    pub id: FileId,
    pub name: String,
    pub mime_type: String,
    pub size_original: u64,
}

/// Error body returned by the backend alongside a non-success status.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_document() {
        let json = r#"{
            "$id": "p1",
            "$createdAt": "2024-03-01T12:00:00.000+00:00",
            "$collectionId": "posts",
            "title": "Sunset",
            "thumbnailUrl": "https://backend.test/v1/storage/buckets/media/files/t1/preview",
            "prompt": "A sunset",
            "videoUrl": "https://backend.test/v1/storage/buckets/media/files/v1/view",
            "creator": {"$id": "u1", "name": "Alice", "avatarUrl": "https://a", "email": "a@b.c"}
        }"#;
        let post: Post =
            serde_json::from_str::<PostDocument>(json).unwrap().into();
        assert_eq!(post.id, DocumentId("p1".into()));
        assert_eq!(post.creator.name, "Alice");
        assert_eq!(
            post.created_at,
            "2024-03-01T12:00:00Z".parse::<Timestamp>().unwrap()
        );
    }
}
