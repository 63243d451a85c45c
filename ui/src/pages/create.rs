use std::rc::Rc;

use payloads::{FileCategory, MediaAsset, NewPost, User, services, validation};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::Route;
use crate::components::MediaPicker;
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::{
    sign_in_fallback, use_push_route, use_require_auth, use_title,
};

#[function_component]
pub fn CreatePage() -> Html {
    use_title("Create");

    match use_require_auth() {
        Some(user) => html! { <UploadForm {user} /> },
        None => sign_in_fallback(),
    }
}

/// Edits to the create form. File reads can finish several renders after
/// the pick, so each edit applies to the latest form.
enum FormAction {
    Title(String),
    Prompt(String),
    Video(MediaAsset),
    Thumbnail(MediaAsset),
    Reset,
}

#[derive(Default, PartialEq)]
struct FormState {
    post: NewPost,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut post = self.post.clone();
        match action {
            FormAction::Title(title) => post.title = title,
            FormAction::Prompt(prompt) => post.prompt = prompt,
            FormAction::Video(video) => post.video = Some(video),
            FormAction::Thumbnail(thumbnail) => post.thumbnail = Some(thumbnail),
            FormAction::Reset => post = NewPost::default(),
        }
        Rc::new(FormState { post })
    }
}

#[derive(Properties, PartialEq)]
struct UploadFormProps {
    user: User,
}

#[function_component]
fn UploadForm(props: &UploadFormProps) -> Html {
    let form = use_reducer(FormState::default);
    let uploading = use_state(|| false);
    let toast = use_toast();
    let push_route = use_push_route();

    let on_title = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Title(input.value()));
        })
    };

    let on_prompt = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Prompt(input.value()));
        })
    };

    let on_video = {
        let form = form.dispatcher();
        Callback::from(move |asset| form.dispatch(FormAction::Video(asset)))
    };

    let on_thumbnail = {
        let form = form.dispatcher();
        Callback::from(move |asset| {
            form.dispatch(FormAction::Thumbnail(asset))
        })
    };

    let on_submit = {
        let post = form.post.clone();
        let form = form.dispatcher();
        let uploading = uploading.clone();
        let user_id = props.user.id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *uploading {
                return;
            }
            if let Some(message) = validation::validate_new_post(&post) {
                toast.error(message);
                return;
            }

            let post = post.clone();
            let form = form.clone();
            let uploading = uploading.clone();
            let user_id = user_id.clone();
            let toast = toast.clone();
            let push_route = push_route.clone();

            yew::platform::spawn_local(async move {
                uploading.set(true);

                let result = match get_api_client() {
                    Ok(api_client) => {
                        services::create_post(&api_client, &post, &user_id).await
                    }
                    Err(e) => Err(e),
                };

                uploading.set(false);

                match result {
                    Ok(_) => {
                        form.dispatch(FormAction::Reset);
                        toast.success("Post uploaded successfully");
                        push_route.emit(Route::Home);
                    }
                    Err(message) => toast.error(message),
                }
            });
        })
    };

    let field_class = "mt-2 w-full h-14 px-4 rounded-2xl bg-neutral-900 \
                       border-2 border-neutral-800 text-white \
                       focus:border-amber-400 focus:outline-none";

    html! {
        <form onsubmit={on_submit}>
            <h1 class="text-2xl font-semibold text-white">{"Upload Video"}</h1>

            <label class="block mt-10 text-neutral-200 font-medium">
                {"Video Title"}
                <input
                    type="text"
                    value={form.post.title.clone()}
                    oninput={on_title}
                    placeholder="Give your video a catchy title..."
                    disabled={*uploading}
                    class={field_class}
                />
            </label>

            <MediaPicker
                category={FileCategory::Video}
                label="Upload Video"
                asset={form.post.video.clone()}
                on_pick={on_video}
                disabled={*uploading}
            />

            <MediaPicker
                category={FileCategory::Image}
                label="Thumbnail Image"
                asset={form.post.thumbnail.clone()}
                on_pick={on_thumbnail}
                disabled={*uploading}
            />

            <label class="block mt-7 text-neutral-200 font-medium">
                {"AI Prompt"}
                <input
                    type="text"
                    value={form.post.prompt.clone()}
                    oninput={on_prompt}
                    placeholder="The AI prompt of your video...."
                    disabled={*uploading}
                    class={field_class}
                />
            </label>

            <button
                type="submit"
                disabled={*uploading}
                class="mt-7 w-full h-14 rounded-xl bg-amber-400 text-neutral-950 \
                       font-semibold hover:bg-amber-300 disabled:opacity-50"
            >
                {if *uploading { "Uploading..." } else { "Submit & Publish" }}
            </button>
        </form>
    }
}
