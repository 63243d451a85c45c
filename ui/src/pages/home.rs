use payloads::User;
use yew::prelude::*;

use crate::components::{Loader, PostList, SearchInput, Trending};
use crate::hooks::{
    remove_from_all, sign_in_fallback, use_all_posts, use_latest_posts,
    use_require_auth, use_title,
};

#[function_component]
pub fn HomePage() -> Html {
    use_title("Home");

    match use_require_auth() {
        Some(user) => html! { <Feed {user} /> },
        None => sign_in_fallback(),
    }
}

#[derive(Properties, PartialEq)]
struct FeedProps {
    user: User,
}

#[function_component]
fn Feed(props: &FeedProps) -> Html {
    let latest = use_latest_posts();
    let posts = use_all_posts();

    if posts.loading {
        return html! { <Loader /> };
    }

    let on_refresh = {
        let refetch_posts = posts.refetch.clone();
        let refetch_latest = latest.refetch.clone();
        Callback::from(move |_: MouseEvent| {
            refetch_latest.emit(());
            refetch_posts.emit(());
        })
    };

    let on_deleted =
        remove_from_all(&[&posts.remove_item, &latest.remove_item]);

    html! {
        <>
            <div class="flex items-start justify-between">
                <div>
                    <p class="text-sm text-neutral-400">{"Welcome back"}</p>
                    <p class="text-2xl font-semibold text-white">{&props.user.name}</p>
                </div>
                <button
                    onclick={on_refresh}
                    disabled={posts.refetching}
                    class="text-sm text-neutral-400 hover:text-white disabled:opacity-50"
                >
                    {if posts.refetching { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            <div class="mt-6">
                <SearchInput />
            </div>

            <div class="mt-8 mb-8">
                <p class="mb-3 text-neutral-200">{"Latest Videos"}</p>
                <Trending posts={latest.items().to_vec()} />
            </div>

            if let Some(error) = posts.error() {
                <p class="mb-6 text-sm text-red-400">{error}</p>
            }

            <PostList
                posts={posts.items().to_vec()}
                empty_subtitle="Be the first one to upload a video"
                {on_deleted}
            />
        </>
    }
}
