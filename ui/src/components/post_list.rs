use payloads::{DocumentId, Post};
use yew::prelude::*;

use super::{EmptyState, VideoCard};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub posts: Vec<Post>,
    pub empty_subtitle: AttrValue,
    #[prop_or_default]
    pub on_deleted: Callback<DocumentId>,
}

#[function_component]
pub fn PostList(props: &Props) -> Html {
    if props.posts.is_empty() {
        return html! {
            <EmptyState
                title="No Videos Found"
                subtitle={props.empty_subtitle.clone()}
            />
        };
    }

    html! {
        <div>
            {for props.posts.iter().map(|post| html! {
                <VideoCard
                    key={post.id.0.clone()}
                    post={post.clone()}
                    on_deleted={props.on_deleted.clone()}
                />
            })}
        </div>
    }
}
