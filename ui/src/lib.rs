use payloads::{APIClient, BackendConfig, ConfigError, config};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod state;

pub use state::{AuthState, State};

use components::{TabBar, ToastContainer};
use contexts::toast::ToastProvider;
use hooks::use_authentication;

/// Backend connection values, baked in at build time from `PIXEL_*`
/// environment variables.
pub fn backend_config() -> Result<BackendConfig, ConfigError> {
    BackendConfig::from_lookup(|key| {
        let value = match key {
            config::ENDPOINT_KEY => option_env!("PIXEL_ENDPOINT"),
            config::PROJECT_ID_KEY => option_env!("PIXEL_PROJECT_ID"),
            config::PLATFORM_KEY => option_env!("PIXEL_PLATFORM"),
            config::DATABASE_ID_KEY => option_env!("PIXEL_DATABASE_ID"),
            config::USER_COLLECTION_ID_KEY => {
                option_env!("PIXEL_USER_COLLECTION_ID")
            }
            config::POST_COLLECTION_ID_KEY => {
                option_env!("PIXEL_POST_COLLECTION_ID")
            }
            config::STORAGE_ID_KEY => option_env!("PIXEL_STORAGE_ID"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

/// API client for the configured backend. A missing build-time value is
/// returned as a displayable message.
pub fn get_api_client() -> Result<APIClient, String> {
    backend_config().map(APIClient::new).map_err(|e| {
        tracing::error!("{e}");
        e.to_string()
    })
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();

    if let Err(e) = backend_config() {
        return html! {
            <main class="max-w-md mx-auto px-4 py-16 text-center">
                <h1 class="text-2xl font-bold">{"Pixel is not configured"}</h1>
                <p class="mt-2 text-neutral-600 dark:text-neutral-400">
                    {e.to_string()}
                </p>
            </main>
        };
    }

    html! {
        <ToastProvider>
            <BrowserRouter>
                <Session />
                <div class="min-h-screen bg-neutral-950 text-neutral-100">
                    <Switch<Route> render={switch} />
                </div>
                <ToastContainer />
            </BrowserRouter>
        </ToastProvider>
    }
}

/// Restores the session once at startup.
#[function_component]
fn Session() -> Html {
    use_authentication();
    html! {}
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Welcome,
    #[at("/sign-in")]
    SignIn,
    #[at("/sign-up")]
    SignUp,
    #[at("/home")]
    Home,
    #[at("/search/:query")]
    Search { query: String },
    #[at("/bookmark")]
    Bookmark,
    #[at("/create")]
    Create,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Screens reached from the bottom tab bar.
    fn has_tab_bar(&self) -> bool {
        matches!(
            self,
            Self::Home | Self::Bookmark | Self::Create | Self::Profile
        )
    }
}

fn switch(route: Route) -> Html {
    let page = match &route {
        Route::Welcome => html! { <pages::WelcomePage /> },
        Route::SignIn => html! { <pages::SignInPage /> },
        Route::SignUp => html! { <pages::SignUpPage /> },
        Route::Home => html! { <pages::HomePage /> },
        Route::Search { query } => {
            html! { <pages::SearchPage query={query.clone()} /> }
        }
        Route::Bookmark => html! { <pages::BookmarkPage /> },
        Route::Create => html! { <pages::CreatePage /> },
        Route::Profile => html! { <pages::ProfilePage /> },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    };

    if route.has_tab_bar() {
        html! {
            <>
                <main class="max-w-3xl mx-auto px-4 pt-6 pb-24">{page}</main>
                <TabBar active={route} />
            </>
        }
    } else {
        html! {
            <main class="max-w-3xl mx-auto px-4 py-6">{page}</main>
        }
    }
}
