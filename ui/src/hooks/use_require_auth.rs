use payloads::User;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::use_store;

use crate::components::Loader;
use crate::{AuthState, Route, State};

/// Hook that requires authentication. Returns the user if logged in, or None
/// if logged out or still checking the session.
#[hook]
pub fn use_require_auth() -> Option<User> {
    let (state, _) = use_store::<State>();
    state.current_user().cloned()
}

/// Shown in place of a protected page: a spinner while the session is being
/// checked, then a redirect to the sign-in page.
#[function_component]
fn SignInFallback() -> Html {
    let (state, _) = use_store::<State>();

    match &state.auth_state {
        AuthState::Unknown => html! { <Loader /> },
        AuthState::LoggedOut => html! { <Redirect<Route> to={Route::SignIn} /> },
        // Should not happen, the page renders instead
        AuthState::LoggedIn(_) => html! {},
    }
}

pub fn sign_in_fallback() -> Html {
    html! { <SignInFallback /> }
}
