use std::future::Future;
use std::rc::Rc;

use payloads::{DocumentId, Identified};
use yew::prelude::*;

use super::request_state::{
    FetchKind, FetchTracker, Phase, RequestAction, RequestState,
};

/// What [`use_api`] hands back to a screen.
pub struct ApiHookReturn<T> {
    /// `None` until the first fetch settles.
    pub response: Option<Result<Vec<T>, String>>,
    pub loading: bool,
    pub refetching: bool,
    pub phase: Phase,
    pub refetch: Callback<()>,
    /// Remove one item from the displayed list only. The next fetch brings
    /// it back if the backend still has it.
    pub remove_item: Callback<DocumentId>,
}

impl<T> ApiHookReturn<T> {
    /// Items of a successful response, empty otherwise.
    pub fn items(&self) -> &[T] {
        match &self.response {
            Some(Ok(items)) => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.response {
            Some(Err(message)) => Some(message),
            _ => None,
        }
    }
}

/// Fetch a list on mount and whenever `deps` change, with a manual refetch.
///
/// `fetch_fn` must not panic; failures come back as `Err(message)`, which is
/// what every function in `payloads::services` returns. Concurrent fetches
/// are not deduplicated or cancelled: each one is numbered when issued and
/// only the newest settled result is kept. Results arriving after the
/// component unmounted are dropped.
///
/// # Example
///
/// ```ignore
/// #[function_component]
/// fn Feed() -> Html {
///     let posts = use_api((), || async move {
///         let client = get_api_client()?;
///         services::get_all_posts(&client).await
///     });
///     html! { <p>{posts.items().len()}</p> }
/// }
/// ```
#[hook]
pub fn use_api<T, D, F, Fut>(deps: D, fetch_fn: F) -> ApiHookReturn<T>
where
    T: Identified + Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, String>> + 'static,
{
    let state = use_reducer(RequestState::<T>::default);
    let tracker = use_mut_ref(FetchTracker::default);

    {
        let tracker = tracker.clone();
        use_effect_with((), move |_| {
            tracker.borrow_mut().open();
            move || tracker.borrow_mut().close()
        });
    }

    let run = {
        let dispatcher = state.dispatcher();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |kind: FetchKind, _| {
            let ticket = tracker.borrow_mut().issue(kind);
            dispatcher.dispatch(ticket.started());

            let dispatcher = dispatcher.clone();
            let tracker = tracker.clone();
            let fetch_fn = fetch_fn.clone();

            yew::platform::spawn_local(async move {
                let result = fetch_fn().await;
                let action = tracker.borrow().settle(ticket, result);
                if let Some(action) = action {
                    dispatcher.dispatch(action);
                }
            });
        })
    };

    // Fetch on mount and when deps change
    {
        let run = run.clone();
        use_effect_with(deps, move |_| {
            run.emit(FetchKind::Initial);
        });
    }

    let remove_item = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: DocumentId| {
            dispatcher.dispatch(RequestAction::RemoveItem(id));
        })
    };

    ApiHookReturn {
        response: state.response().cloned(),
        loading: state.loading(),
        refetching: state.refetching(),
        phase: state.phase(),
        refetch: Callback::from(move |_| run.emit(FetchKind::Refetch)),
        remove_item,
    }
}

/// One callback removing an item from several lists, for screens showing
/// the same post in more than one place.
pub fn remove_from_all(
    removers: &[&Callback<DocumentId>],
) -> Callback<DocumentId> {
    let removers: Vec<_> = removers.iter().map(|r| (*r).clone()).collect();
    Callback::from(move |id: DocumentId| {
        for remove in &removers {
            remove.emit(id.clone());
        }
    })
}
