use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::Route;
use crate::contexts::toast::use_toast;
use crate::hooks::use_push_route;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Prefilled when showing results for an existing query.
    #[prop_or_default]
    pub initial_query: AttrValue,
}

/// Search box that navigates to the results page on submit.
#[function_component]
pub fn SearchInput(props: &Props) -> Html {
    let query = use_state(|| props.initial_query.to_string());
    let push_route = use_push_route();
    let toast = use_toast();

    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_submit = {
        let query = query.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let trimmed = query.trim();
            if trimmed.is_empty() {
                toast.error(
                    "Please input something to search results across database",
                );
                return;
            }
            push_route.emit(Route::Search {
                query: trimmed.to_string(),
            });
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex items-center gap-2 h-14 px-4 \
                                          rounded-2xl bg-neutral-900 border-2 \
                                          border-neutral-800 focus-within:border-amber-400">
            <input
                type="search"
                value={(*query).clone()}
                oninput={on_input}
                placeholder="Search for a video topic"
                class="flex-1 bg-transparent text-white placeholder-neutral-500 \
                       focus:outline-none"
            />
            <button type="submit" class="text-neutral-400 hover:text-white" aria-label="Search">
                {"⌕"}
            </button>
        </form>
    }
}
