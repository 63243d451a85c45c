use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_title;
use crate::{Route, State};

#[function_component]
pub fn WelcomePage() -> Html {
    use_title("Welcome");
    let (state, _) = use_store::<State>();

    if state.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Home} /> };
    }

    html! {
        <div class="flex flex-col items-center text-center pt-16">
            <p class="text-4xl font-bold text-white">{"Pixel"}</p>
            <h1 class="mt-10 text-3xl font-bold text-white">
                {"Discover Endless Possibilities with "}
                <span class="text-amber-400">{"Pixel"}</span>
            </h1>
            <p class="mt-5 text-sm text-neutral-300">
                {"Where creativity meets innovation: embark on a journey of \
                  limitless exploration with Pixel"}
            </p>
            <Link<Route>
                to={Route::SignIn}
                classes="mt-8 w-full max-w-sm h-14 flex items-center justify-center \
                         rounded-xl bg-amber-400 text-neutral-950 font-semibold \
                         hover:bg-amber-300"
            >
                {"Continue with Email"}
            </Link<Route>>
        </div>
    }
}
