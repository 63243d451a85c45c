use payloads::User;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{AuthForm, AuthMode};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_push_route, use_title};

#[function_component]
pub fn SignUpPage() -> Html {
    use_title("Sign up");
    let push_route = use_push_route();
    let toast = use_toast();

    let on_success = Callback::from(move |user: User| {
        toast.success(format!("Welcome to Pixel, {}", user.name));
        push_route.emit(Route::Home);
    });

    html! {
        <div class="max-w-md mx-auto pt-16">
            <AuthForm mode={AuthMode::SignUp} {on_success} />
            <p class="mt-5 text-center text-neutral-300">
                {"Already have an account? "}
                <Link<Route> to={Route::SignIn} classes="font-semibold text-amber-400">
                    {"Sign in"}
                </Link<Route>>
            </p>
        </div>
    }
}
