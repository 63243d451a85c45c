use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::components::PostList;
use crate::hooks::{sign_in_fallback, use_title};

/// Posts bookmarked during this session, newest bookmark first.
#[function_component]
pub fn BookmarkPage() -> Html {
    use_title("Bookmarks");
    let (state, _) = use_store::<State>();

    if !state.is_authenticated() {
        return sign_in_fallback();
    }

    html! {
        <>
            <p class="mb-8 text-2xl font-semibold text-white">{"Saved Videos"}</p>
            <PostList
                posts={state.bookmarks.clone()}
                empty_subtitle="Bookmark a video from its menu to find it here"
            />
        </>
    }
}
