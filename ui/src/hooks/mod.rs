pub mod request_state;
pub mod use_api;
pub mod use_authentication;
pub mod use_logout;
pub mod use_posts;
pub mod use_push_route;
pub mod use_require_auth;
pub mod use_title;

pub use use_api::{ApiHookReturn, remove_from_all, use_api};
pub use use_authentication::use_authentication;
pub use use_logout::use_logout;
pub use use_posts::{
    use_all_posts, use_latest_posts, use_search_posts, use_user_posts,
};
pub use use_push_route::use_push_route;
pub use use_require_auth::{sign_in_fallback, use_require_auth};
pub use use_title::use_title;
