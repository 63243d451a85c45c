pub mod mock;

use payloads::{APIClient, BackendConfig};
use serde_json::Value;
use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PROJECT_ID: &str = "pixel-test";
pub const DATABASE_ID: &str = "db";
pub const USER_COLLECTION_ID: &str = "users";
pub const POST_COLLECTION_ID: &str = "posts";
pub const STORAGE_ID: &str = "media";

/// A mock backend and a client configured to talk to it.
pub struct TestApp {
    pub server: MockServer,
    pub client: APIClient,
}

impl TestApp {
    /// Base url of the mocked REST api, as the client sees it.
    pub fn endpoint(&self) -> String {
        format!("{}/v1", self.server.uri())
    }

    pub fn documents_path(collection_id: &str) -> String {
        format!(
            "/v1/databases/{DATABASE_ID}/collections/{collection_id}/documents"
        )
    }

    pub fn files_path() -> String {
        format!("/v1/storage/buckets/{STORAGE_ID}/files")
    }

    /// Respond to `verb path` with a json body.
    pub async fn mount_json(
        &self,
        verb: &str,
        route: impl Into<String>,
        status: u16,
        body: Value,
    ) {
        Mock::given(method(verb))
            .and(path(route.into()))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond to `verb path` with an empty body.
    pub async fn mount_empty(
        &self,
        verb: &str,
        route: impl Into<String>,
        status: u16,
    ) {
        Mock::given(method(verb))
            .and(path(route.into()))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the mock has received so far.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

/// Install a subscriber writing through the test harness. Safe to call from
/// every test; only the first call has an effect.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .finish()
        .try_init();
}

pub fn test_config(endpoint: String) -> BackendConfig {
    BackendConfig {
        endpoint,
        project_id: PROJECT_ID.to_string(),
        platform: None,
        database_id: DATABASE_ID.to_string(),
        user_collection_id: USER_COLLECTION_ID.to_string(),
        post_collection_id: POST_COLLECTION_ID.to_string(),
        storage_id: STORAGE_ID.to_string(),
    }
}

/// Start a mock backend on an OS-assigned port.
pub async fn spawn_app() -> TestApp {
    init_test_logging();

    let server = MockServer::start().await;

    // Keep the session cookie between requests, as the browser would
    let inner_client = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap();

    let client = APIClient {
        config: test_config(format!("{}/v1", server.uri())),
        inner_client,
    };

    TestApp { server, client }
}

pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: reqwest::StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
