use payloads::{DocumentId, Post, services};
use yew::prelude::*;
use yewdux::prelude::*;

use super::{MenuItem, OverflowMenu};
use crate::contexts::toast::use_toast;
use crate::{State, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub post: Post,
    /// Called once the backend confirmed the deletion, so the list can drop
    /// the post without refetching.
    #[prop_or_default]
    pub on_deleted: Callback<DocumentId>,
}

/// How a delete request ended, as shown to the user.
#[derive(Debug, PartialEq, Eq)]
enum DeleteOutcome {
    Deleted,
    Refused(String),
}

impl From<Result<bool, String>> for DeleteOutcome {
    fn from(result: Result<bool, String>) -> Self {
        match result {
            Ok(true) => Self::Deleted,
            Ok(false) => {
                Self::Refused("Only the creator can delete a post".to_string())
            }
            Err(message) => Self::Refused(message),
        }
    }
}

#[function_component]
pub fn VideoCard(props: &Props) -> Html {
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();
    let play = use_state(|| false);
    let post = &props.post;

    let on_bookmark = {
        let post = post.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            let was_bookmarked = dispatch.get().is_bookmarked(&post.id);
            dispatch.reduce_mut(|s| {
                s.toggle_bookmark(&post);
            });
            if !was_bookmarked {
                toast.success("Saved to bookmarks");
            } else {
                toast.info("Removed from bookmarks");
            }
        })
    };

    let mut menu = vec![MenuItem::new(
        if state.is_bookmarked(&post.id) {
            "Unbookmark"
        } else {
            "Bookmark"
        },
        on_bookmark,
    )];

    if let Some(user) = state.current_user().filter(|u| post.is_created_by(u)) {
        let on_delete = {
            let post = post.clone();
            let user_id = user.id.clone();
            let on_deleted = props.on_deleted.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();

            Callback::from(move |_| {
                let post = post.clone();
                let user_id = user_id.clone();
                let on_deleted = on_deleted.clone();
                let dispatch = dispatch.clone();
                let toast = toast.clone();

                yew::platform::spawn_local(async move {
                    let result = match get_api_client() {
                        Ok(api_client) => {
                            services::delete_post(&api_client, &post, &user_id)
                                .await
                        }
                        Err(e) => Err(e),
                    };

                    match DeleteOutcome::from(result) {
                        DeleteOutcome::Deleted => {
                            dispatch.reduce_mut(|s| s.forget_post(&post.id));
                            on_deleted.emit(post.id.clone());
                            toast.success("Post deleted");
                        }
                        DeleteOutcome::Refused(message) => toast.error(message),
                    }
                });
            })
        };
        menu.push(MenuItem::new("Delete", on_delete).danger());
    }

    let on_play = {
        let play = play.clone();
        Callback::from(move |_: MouseEvent| play.set(true))
    };

    let on_ended = {
        let play = play.clone();
        Callback::from(move |_: Event| play.set(false))
    };

    let on_error = {
        let play = play.clone();
        Callback::from(move |_: Event| {
            toast.error("An error occurred while playing video");
            play.set(false);
        })
    };

    html! {
        <article class="mb-14">
            <div class="flex items-start gap-3">
                <img
                    src={post.creator.avatar_url.clone()}
                    alt={post.creator.name.clone()}
                    class="h-12 w-12 rounded-lg border border-amber-400 object-cover"
                />
                <div class="flex-1 min-w-0 pt-1">
                    <p class="text-sm font-semibold text-white truncate">
                        {&post.title}
                    </p>
                    <p class="text-xs text-neutral-400 truncate">
                        {&post.creator.name}
                    </p>
                </div>
                <OverflowMenu items={menu} />
            </div>

            if *play {
                <video
                    src={post.video_url.clone()}
                    class="mt-3 w-full h-60 rounded-2xl bg-black"
                    controls=true
                    autoplay=true
                    onended={on_ended}
                    onerror={on_error}
                />
            } else {
                <button
                    onclick={on_play}
                    class="relative mt-3 w-full h-60 rounded-2xl overflow-hidden \
                           flex items-center justify-center"
                    aria-label={format!("Play {}", post.title)}
                >
                    <img
                        src={post.thumbnail_url.clone()}
                        alt=""
                        class="absolute inset-0 w-full h-full object-cover"
                    />
                    <span class="relative text-5xl text-white drop-shadow">{"▶"}</span>
                </button>
            }
        </article>
    }
}
