use payloads::User;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub user: User,
    pub post_count: usize,
    pub on_logout: Callback<MouseEvent>,
}

#[function_component]
pub fn ProfileHeader(props: &Props) -> Html {
    html! {
        <div class="flex flex-col items-center mt-6 mb-12">
            <button
                onclick={props.on_logout.clone()}
                class="self-end mb-10 text-sm text-neutral-400 hover:text-white"
            >
                {"Sign out"}
            </button>
            <img
                src={props.user.avatar_url.clone()}
                alt={props.user.name.clone()}
                class="h-16 w-16 rounded-lg border border-amber-400 object-cover"
            />
            <p class="mt-5 text-lg font-semibold text-white">{&props.user.name}</p>
            <div class="mt-5 text-center">
                <p class="text-xl font-semibold text-white">{props.post_count}</p>
                <p class="text-sm text-neutral-400">{"Posts"}</p>
            </div>
        </div>
    }
}
