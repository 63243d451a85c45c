use payloads::User;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{AuthForm, AuthMode};
use crate::hooks::{use_push_route, use_title};

#[function_component]
pub fn SignInPage() -> Html {
    use_title("Sign in");
    let push_route = use_push_route();

    let on_success = Callback::from(move |_: User| {
        push_route.emit(Route::Home);
    });

    html! {
        <div class="max-w-md mx-auto pt-16">
            <AuthForm mode={AuthMode::SignIn} {on_success} />
            <p class="mt-5 text-center text-neutral-300">
                {"Don't have an account? "}
                <Link<Route> to={Route::SignUp} classes="font-semibold text-amber-400">
                    {"Sign up"}
                </Link<Route>>
            </p>
        </div>
    }
}
