use crate::{
    BackendConfig, DocumentId, FileId, MediaAsset, Query, query, requests,
    responses,
};
use derive_more::Display;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Files larger than this are uploaded in several requests, each carrying a
/// `Content-Range` header.
pub const UPLOAD_CHUNK_SIZE: usize = 5 * 1024 * 1024;

/// An API client for the backend-as-a-service REST api.
pub struct APIClient {
    pub config: BackendConfig,
    pub inner_client: reqwest::Client,
}

/// Which part of an image is kept when the preview endpoint crops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ImageGravity {
    #[display("center")]
    Center,
    #[display("top")]
    Top,
    #[display("bottom")]
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    pub width: u32,
    pub height: u32,
    pub gravity: ImageGravity,
    /// 0-100
    pub quality: u8,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            width: 2000,
            height: 2000,
            gravity: ImageGravity::Top,
            quality: 100,
        }
    }
}

impl APIClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            inner_client: reqwest::Client::new(),
        }
    }
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", &self.config.endpoint)
    }

    /// A url that can be handed to `<img>`/`<video>` elements directly, so
    /// the project travels as a query parameter instead of a header.
    fn public_url(&self, path: &str, params: &[(&str, String)]) -> String {
        let mut all = vec![("project", self.config.project_id.clone())];
        all.extend(params.iter().cloned());

        match reqwest::Url::parse_with_params(&self.format_url(path), &all) {
            Ok(url) => url.to_string(),
            Err(_) => self.format_url(path),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self
            .inner_client
            .request(method, self.format_url(path))
            .header("X-Appwrite-Project", &self.config.project_id);

        let request = match &self.config.platform {
            Some(platform) => request.header("X-Appwrite-Platform", platform),
            None => request,
        };

        // The session lives in a cookie set by the backend's origin
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request
    }

    async fn get(&self, path: &str, params: &[(String, String)]) -> ReqwestResult {
        self.request(Method::GET, path).query(params).send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.request(Method::POST, path).json(body).send().await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        self.request(Method::DELETE, path).send().await
    }

    fn documents_path(&self, collection_id: &str) -> String {
        format!(
            "databases/{}/collections/{collection_id}/documents",
            self.config.database_id
        )
    }

    fn files_path(&self) -> String {
        format!("storage/buckets/{}/files", self.config.storage_id)
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn create_account(
        &self,
        details: &requests::CreateAccount,
    ) -> Result<responses::Account, ClientError> {
        let response = self.post("account", details).await?;
        ok_body(response).await
    }

    /// Sign in, storing the session cookie in the client.
    pub async fn create_email_password_session(
        &self,
        credentials: &requests::EmailPasswordSession,
    ) -> Result<responses::Session, ClientError> {
        let response = self.post("account/sessions/email", credentials).await?;
        ok_body(response).await
    }

    pub async fn delete_current_session(&self) -> Result<(), ClientError> {
        let response = self.delete("account/sessions/current").await?;
        ok_empty(response).await
    }

    /// The account of the current session, or `None` without a session.
    pub async fn get_account(
        &self,
    ) -> Result<Option<responses::Account>, ClientError> {
        let response = self.get("account", &[]).await?;
        match response.status() {
            StatusCode::UNAUTHORIZED => Ok(None),
            _ => ok_body(response).await.map(Some),
        }
    }

    pub async fn list_documents<T: DeserializeOwned>(
        &self,
        collection_id: &str,
        queries: &[Query],
    ) -> Result<responses::DocumentList<T>, ClientError> {
        let params = query::to_url_params(queries);
        let response =
            self.get(&self.documents_path(collection_id), &params).await?;
        ok_body(response).await
    }

    pub async fn create_document<T: Serialize, R: DeserializeOwned>(
        &self,
        collection_id: &str,
        details: &requests::CreateDocument<T>,
    ) -> Result<R, ClientError> {
        let response =
            self.post(&self.documents_path(collection_id), details).await?;
        ok_body(response).await
    }

    pub async fn delete_document(
        &self,
        collection_id: &str,
        document_id: &DocumentId,
    ) -> Result<(), ClientError> {
        let path =
            format!("{}/{document_id}", self.documents_path(collection_id));
        let response = self.delete(&path).await?;
        ok_empty(response).await
    }

    /// Upload a file to the storage bucket under `file_id`.
    pub async fn create_file(
        &self,
        file_id: &str,
        file_name: &str,
        mime_type: &str,
        asset: &MediaAsset,
    ) -> Result<responses::StoredFile, ClientError> {
        let size = asset.size();
        let mut stored = None;

        for (index, chunk) in asset.data.chunks(UPLOAD_CHUNK_SIZE).enumerate() {
            let part = reqwest::multipart::Part::bytes(chunk.to_vec())
                .file_name(file_name.to_string())
                .mime_str(mime_type)?;
            let form = reqwest::multipart::Form::new()
                .text("fileId", file_id.to_string())
                .part("file", part);

            let mut request =
                self.request(Method::POST, &self.files_path()).multipart(form);
            if size > UPLOAD_CHUNK_SIZE {
                let start = index * UPLOAD_CHUNK_SIZE;
                let end = start + chunk.len() - 1;
                request = request
                    .header("Content-Range", format!("bytes {start}-{end}/{size}"));
                if index > 0 {
                    request = request.header("X-Appwrite-ID", file_id);
                }
            }

            tracing::debug!("Uploading chunk {index} of {file_name}");
            let response = request.send().await?;
            stored = Some(ok_body(response).await?);
        }

        stored.ok_or_else(|| {
            ClientError::APIError(
                StatusCode::BAD_REQUEST,
                format!("{file_name} is empty"),
            )
        })
    }

    pub async fn delete_file(&self, file_id: &FileId) -> Result<(), ClientError> {
        let path = format!("{}/{file_id}", self.files_path());
        let response = self.delete(&path).await?;
        ok_empty(response).await
    }

    /// Returns the url serving the raw file, used for videos.
    pub fn file_view_url(&self, file_id: &FileId) -> String {
        self.public_url(&format!("{}/{file_id}/view", self.files_path()), &[])
    }

    /// Returns the url of a resized image preview.
    pub fn file_preview_url(
        &self,
        file_id: &FileId,
        options: &PreviewOptions,
    ) -> String {
        self.public_url(
            &format!("{}/{file_id}/preview", self.files_path()),
            &[
                ("width", options.width.to_string()),
                ("height", options.height.to_string()),
                ("gravity", options.gravity.to_string()),
                ("quality", options.quality.to_string()),
            ],
        )
    }

    /// Returns the url of an avatar image drawn from the name's initials.
    pub fn avatar_initials_url(&self, name: &str) -> String {
        self.public_url("avatars/initials", &[("name", name.to_string())])
    }
}

/// Recover the file id from a url produced by `file_view_url` or
/// `file_preview_url`: the segment before the final `view`/`preview`.
pub fn file_id_from_url(url: &str) -> Option<FileId> {
    let path = url.split(['?', '#']).next()?;
    let mut segments = path.rsplit('/');
    segments.next()?;
    segments
        .next()
        .filter(|id| !id.is_empty())
        .map(|id| FileId(id.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the backend's message.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// The backend's own explanation, when it gave one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::APIError(_, message) if !message.trim().is_empty() => {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

/// Build an APIError from a failed response, preferring the `message` field
/// of a json error body over the raw text.
async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    match response.text().await {
        Ok(text) => {
            let message = serde_json::from_str::<responses::ErrorBody>(&text)
                .map(|body| body.message)
                .unwrap_or(text);
            ClientError::APIError(status, message)
        }
        Err(e) => e.into(),
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(())
}
