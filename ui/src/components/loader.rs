use yew::prelude::*;

#[function_component]
pub fn Loader() -> Html {
    html! {
        <div class="flex justify-center py-16" role="status" aria-label="Loading">
            <div class="h-10 w-10 rounded-full border-4 border-amber-400 \
                        border-t-transparent animate-spin"></div>
        </div>
    }
}
