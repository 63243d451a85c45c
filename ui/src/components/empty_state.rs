use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

/// Placeholder for an empty list, with a shortcut to the create screen.
#[function_component]
pub fn EmptyState(props: &Props) -> Html {
    html! {
        <div class="flex flex-col items-center py-16 text-center">
            <p class="text-xl font-semibold text-white">{&props.title}</p>
            <p class="mt-1 text-sm text-neutral-400">{&props.subtitle}</p>
            <Link<Route>
                to={Route::Create}
                classes="mt-6 px-6 py-3 rounded-xl bg-amber-400 text-neutral-950 \
                         font-semibold hover:bg-amber-300"
            >
                {"Create video"}
            </Link<Route>>
        </div>
    }
}
