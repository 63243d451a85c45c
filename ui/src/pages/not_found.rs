use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Not found");

    html! {
        <div class="text-center py-16">
            <h1 class="text-4xl font-bold text-white">{"404"}</h1>
            <p class="text-neutral-400">{"This screen doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="mt-4 inline-block text-amber-400">
                {"Go to home screen!"}
            </Link<Route>>
        </div>
    }
}
