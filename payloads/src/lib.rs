pub mod api_client;
pub mod config;
pub mod formatting;
pub mod query;
pub mod requests;
pub mod responses;
pub mod services;
pub mod validation;

pub use api_client::{APIClient, ClientError, PreviewOptions};
pub use config::{BackendConfig, ConfigError};
pub use query::Query;

use derive_more::Display;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Identifier of a document stored in a backend collection.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct DocumentId(pub String);

/// Identifier of an authentication account (distinct from the profile
/// document that references it).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AccountId(pub String);

/// Identifier of a file in the storage bucket.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FileId(pub String);

/// Generate a fresh id for documents, accounts and files.
///
/// The backend accepts up to 36 characters of `[a-zA-Z0-9._-]`, so the
/// hyphen-less uuid form fits.
pub fn unique_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Items that carry a stable document identity, used for list keys and for
/// local removal from fetched lists.
pub trait Identified {
    fn id(&self) -> &DocumentId;
}

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Id of the profile document, referenced by posts as their creator.
    pub id: DocumentId,
    pub account_id: AccountId,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

/// The author of a post, as expanded from the post's creator relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub id: DocumentId,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: DocumentId,
    pub created_at: Timestamp,
    pub title: String,
    pub thumbnail_url: String,
    pub prompt: String,
    pub video_url: String,
    pub creator: Creator,
}

impl Identified for Post {
    fn id(&self) -> &DocumentId {
        &self.id
    }
}

impl Post {
    pub fn is_created_by(&self, user: &User) -> bool {
        self.creator.id == user.id
    }
}

/// What kind of media a stored file holds. Videos are served as-is, images
/// through the resizing preview endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FileCategory {
    #[display("video")]
    Video,
    #[display("image")]
    Image,
}

impl FileCategory {
    /// Whether a mime type belongs to this category, e.g. `video/mp4`.
    pub fn accepts(&self, mime_type: &str) -> bool {
        let prefix = match self {
            Self::Video => "video/",
            Self::Image => "image/",
        };
        mime_type.starts_with(prefix) && mime_type.len() > prefix.len()
    }
}

/// A file picked by the user, held in memory until it is uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaAsset {
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub data: Vec<u8>,
}

impl MediaAsset {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// The create-post form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewPost {
    pub title: String,
    pub prompt: String,
    pub video: Option<MediaAsset>,
    pub thumbnail: Option<MediaAsset>,
}
