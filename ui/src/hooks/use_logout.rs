use payloads::services;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{Route, State};

#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let navigator = use_navigator();

    Callback::from(move |_| {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();

        yew::platform::spawn_local(async move {
            // Failures are logged by sign_out; the local session ends anyway
            if let Ok(api_client) = crate::get_api_client() {
                services::sign_out(&api_client).await;
            }

            dispatch.reduce_mut(|state| state.logout());

            if let Some(navigator) = navigator {
                navigator.replace(&Route::SignIn);
            }
        });
    })
}
