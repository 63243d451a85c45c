use payloads::services;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client};

/// Hook to check for an existing session on startup
#[hook]
pub fn use_authentication() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), move |_| {
        yew::platform::spawn_local(async move {
            let user = match get_api_client() {
                Ok(api_client) => services::get_current_user(&api_client).await,
                Err(_) => None,
            };

            dispatch.reduce_mut(|state| match user {
                Some(user) => {
                    tracing::debug!("Restored session for {}", user.name);
                    state.sign_in(user);
                }
                None => state.logout(),
            });
        });
    });
}
