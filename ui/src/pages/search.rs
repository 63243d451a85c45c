use yew::prelude::*;

use crate::components::{Loader, PostList, SearchInput};
use crate::hooks::{
    sign_in_fallback, use_require_auth, use_search_posts, use_title,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub query: String,
}

#[function_component]
pub fn SearchPage(props: &Props) -> Html {
    use_title(&format!("Search \"{}\"", props.query));

    if use_require_auth().is_none() {
        return sign_in_fallback();
    }

    html! { <Results query={props.query.clone()} /> }
}

#[function_component]
fn Results(props: &Props) -> Html {
    let posts = use_search_posts(props.query.clone());

    html! {
        <>
            <p class="text-sm text-neutral-400">{"Search Results"}</p>
            <p class="text-2xl font-semibold text-white">{format!("\"{}\"", props.query)}</p>

            <div class="mt-6 mb-8">
                <SearchInput initial_query={props.query.clone()} />
            </div>

            if posts.loading {
                <Loader />
            } else {
                <>
                    if let Some(error) = posts.error() {
                        <p class="mb-6 text-sm text-red-400">{error}</p>
                    }
                    <PostList
                        posts={posts.items().to_vec()}
                        empty_subtitle="No videos found for this search"
                        on_deleted={posts.remove_item.clone()}
                            />
                </>
            }
        </>
    }
}
