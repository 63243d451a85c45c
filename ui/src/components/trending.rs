use payloads::{DocumentId, Post};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub posts: Vec<Post>,
}

/// Horizontal strip of the newest videos. One plays at a time.
#[function_component]
pub fn Trending(props: &Props) -> Html {
    let playing = use_state(|| None::<DocumentId>);

    if props.posts.is_empty() {
        return html! {
            <p class="text-sm text-neutral-500">{"No videos yet"}</p>
        };
    }

    html! {
        <div class="flex gap-4 overflow-x-auto pb-2">
            {for props.posts.iter().map(|post| {
                let is_playing = (*playing).as_ref() == Some(&post.id);

                let on_play = {
                    let playing = playing.clone();
                    let id = post.id.clone();
                    Callback::from(move |_: MouseEvent| playing.set(Some(id.clone())))
                };
                let on_stop = {
                    let playing = playing.clone();
                    Callback::from(move |_: Event| playing.set(None))
                };

                html! {
                    <div key={post.id.0.clone()} class="shrink-0 w-36 h-60">
                        if is_playing {
                            <video
                                src={post.video_url.clone()}
                                class="w-full h-full rounded-3xl bg-black"
                                controls=true
                                autoplay=true
                                onended={on_stop.clone()}
                                onerror={on_stop}
                            />
                        } else {
                            <button
                                onclick={on_play}
                                class="relative w-full h-full rounded-3xl overflow-hidden \
                                       flex items-center justify-center"
                                aria-label={format!("Play {}", post.title)}
                            >
                                <img
                                    src={post.thumbnail_url.clone()}
                                    alt=""
                                    class="absolute inset-0 w-full h-full object-cover"
                                />
                                <span class="relative text-3xl text-white drop-shadow">{"▶"}</span>
                            </button>
                        }
                    </div>
                }
            })}
        </div>
    }
}
