//! List fetches for the feed screens.

use payloads::{DocumentId, Post, services};
use yew::prelude::*;

use super::{ApiHookReturn, use_api};
use crate::get_api_client;

#[hook]
pub fn use_all_posts() -> ApiHookReturn<Post> {
    use_api((), || async move {
        let api_client = get_api_client()?;
        services::get_all_posts(&api_client).await
    })
}

#[hook]
pub fn use_latest_posts() -> ApiHookReturn<Post> {
    use_api((), || async move {
        let api_client = get_api_client()?;
        services::get_latest_posts(&api_client).await
    })
}

/// Refetches whenever the query changes.
#[hook]
pub fn use_search_posts(query: String) -> ApiHookReturn<Post> {
    use_api(query.clone(), move || {
        let query = query.clone();
        async move {
            let api_client = get_api_client()?;
            services::search_posts(&api_client, &query).await
        }
    })
}

#[hook]
pub fn use_user_posts(user_id: DocumentId) -> ApiHookReturn<Post> {
    use_api(user_id.clone(), move || {
        let user_id = user_id.clone();
        async move {
            let api_client = get_api_client()?;
            services::get_user_posts(&api_client, &user_id).await
        }
    })
}
