use payloads::User;
use yew::prelude::*;

use crate::components::{Loader, PostList, ProfileHeader};
use crate::hooks::{
    sign_in_fallback, use_logout, use_require_auth, use_title,
    use_user_posts,
};

#[function_component]
pub fn ProfilePage() -> Html {
    use_title("Profile");

    match use_require_auth() {
        Some(user) => html! { <UserProfile {user} /> },
        None => sign_in_fallback(),
    }
}

#[derive(Properties, PartialEq)]
struct UserProfileProps {
    user: User,
}

#[function_component]
fn UserProfile(props: &UserProfileProps) -> Html {
    let posts = use_user_posts(props.user.id.clone());
    let on_logout = use_logout();

    if posts.loading {
        return html! { <Loader /> };
    }

    html! {
        <>
            <ProfileHeader
                user={props.user.clone()}
                post_count={posts.items().len()}
                {on_logout}
            />

            if let Some(error) = posts.error() {
                <p class="mb-6 text-sm text-red-400">{error}</p>
            }

            <PostList
                posts={posts.items().to_vec()}
                empty_subtitle="No videos found for this profile"
                on_deleted={posts.remove_item.clone()}
            />
        </>
    }
}
