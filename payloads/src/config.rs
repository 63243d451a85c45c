//! Connection parameters for the backend-as-a-service.

pub const ENDPOINT_KEY: &str = "PIXEL_ENDPOINT";
pub const PROJECT_ID_KEY: &str = "PIXEL_PROJECT_ID";
pub const PLATFORM_KEY: &str = "PIXEL_PLATFORM";
pub const DATABASE_ID_KEY: &str = "PIXEL_DATABASE_ID";
pub const USER_COLLECTION_ID_KEY: &str = "PIXEL_USER_COLLECTION_ID";
pub const POST_COLLECTION_ID_KEY: &str = "PIXEL_POST_COLLECTION_ID";
pub const STORAGE_ID_KEY: &str = "PIXEL_STORAGE_ID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base url of the REST api, including the version prefix, e.g.
    /// `https://cloud.example.com/v1`.
    pub endpoint: String,
    pub project_id: String,
    /// Platform identifier registered with the project. Optional for web
    /// clients, where the browser origin is used instead.
    pub platform: Option<String>,
    pub database_id: String,
    pub user_collection_id: String,
    pub post_collection_id: String,
    pub storage_id: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing configuration value {0}")]
    Missing(&'static str),
}

impl BackendConfig {
    /// Build a config from a key lookup. Empty values count as missing.
    ///
    /// The lookup indirection lets the browser build read values baked in at
    /// compile time while native tools read the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let get = |key: &'static str| {
            lookup(key).filter(|value| !value.trim().is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            endpoint: require(ENDPOINT_KEY)?.trim_end_matches('/').to_string(),
            project_id: require(PROJECT_ID_KEY)?,
            platform: get(PLATFORM_KEY),
            database_id: require(DATABASE_ID_KEY)?,
            user_collection_id: require(USER_COLLECTION_ID_KEY)?,
            post_collection_id: require(POST_COLLECTION_ID_KEY)?,
            storage_id: require(STORAGE_ID_KEY)?,
        })
    }
}
