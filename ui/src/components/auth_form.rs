use payloads::{User, services};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::contexts::toast::use_toast;
use crate::{State, get_api_client};

#[derive(Clone, Copy, PartialEq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub mode: AuthMode,
    pub on_success: Callback<User>,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component]
pub fn AuthForm(props: &AuthFormProps) -> Html {
    let (_state, dispatch) = use_store::<State>();
    let toast = use_toast();

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let is_submitting = use_state(|| false);

    let on_submit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let is_submitting = is_submitting.clone();
        let on_success = props.on_success.clone();
        let mode = props.mode;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let name = input_value(&name_ref);
            let email = input_value(&email_ref);
            let password = input_value(&password_ref);

            let is_submitting = is_submitting.clone();
            let on_success = on_success.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);

                let result = match get_api_client() {
                    Ok(api_client) => match mode {
                        AuthMode::SignIn => {
                            services::submit_sign_in(&api_client, &email, &password)
                                .await
                        }
                        AuthMode::SignUp => {
                            services::submit_sign_up(
                                &api_client,
                                &name,
                                &email,
                                &password,
                            )
                            .await
                        }
                    },
                    Err(e) => Err(e),
                };

                match result {
                    Ok(user) => {
                        dispatch.reduce_mut(|state| state.sign_in(user.clone()));
                        on_success.emit(user);
                    }
                    Err(message) => toast.error(message),
                }

                is_submitting.set(false);
            });
        })
    };

    let (title, submit_text) = match props.mode {
        AuthMode::SignIn => ("Log in", "Sign In"),
        AuthMode::SignUp => ("Sign up", "Sign Up"),
    };

    let field_class = "mt-2 w-full h-14 px-4 rounded-2xl bg-neutral-900 \
                       border-2 border-neutral-800 text-white \
                       focus:border-amber-400 focus:outline-none";

    html! {
        <form onsubmit={on_submit} class="w-full">
            <h1 class="text-2xl font-semibold text-white">{title}</h1>

            if props.mode == AuthMode::SignUp {
                <label class="block mt-8 text-neutral-200 font-medium">
                    {"Name"}
                    <input
                        ref={name_ref}
                        type="text"
                        autocomplete="name"
                        class={field_class}
                    />
                </label>
            }

            <label class="block mt-7 text-neutral-200 font-medium">
                {"Email"}
                <input
                    ref={email_ref}
                    type="email"
                    autocomplete="email"
                    class={field_class}
                />
            </label>

            <label class="block mt-7 text-neutral-200 font-medium">
                {"Password"}
                <input
                    ref={password_ref}
                    type="password"
                    autocomplete={match props.mode {
                        AuthMode::SignIn => "current-password",
                        AuthMode::SignUp => "new-password",
                    }}
                    class={field_class}
                />
            </label>

            <button
                type="submit"
                disabled={*is_submitting}
                class="mt-8 w-full h-14 rounded-xl bg-amber-400 text-neutral-950 \
                       font-semibold hover:bg-amber-300 disabled:opacity-50"
            >
                {if *is_submitting { "Please wait..." } else { submit_text }}
            </button>
        </form>
    }
}
