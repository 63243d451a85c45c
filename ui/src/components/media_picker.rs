//! File input that reads the picked file into memory.

use base64::{Engine as _, engine::general_purpose};
use payloads::{FileCategory, MediaAsset};
use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader, HtmlInputElement};
use yew::prelude::*;

use crate::contexts::toast::use_toast;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub category: FileCategory,
    pub label: AttrValue,
    /// The currently picked file, if any.
    pub asset: Option<MediaAsset>,
    pub on_pick: Callback<MediaAsset>,
    #[prop_or_default]
    pub disabled: bool,
}

fn accept(category: FileCategory) -> &'static str {
    match category {
        FileCategory::Video => "video/*",
        FileCategory::Image => "image/*",
    }
}

/// Inline preview of a picked image. Videos are only named, encoding them
/// into a data url is too costly.
fn preview(category: FileCategory, asset: &MediaAsset) -> Html {
    match category {
        FileCategory::Image => {
            let mime_type = asset.mime_type.as_deref().unwrap_or("image/png");
            let src = format!(
                "data:{mime_type};base64,{}",
                general_purpose::STANDARD.encode(&asset.data)
            );
            html! {
                <img {src} alt="" class="w-full h-64 rounded-2xl object-cover" />
            }
        }
        FileCategory::Video => html! {
            <div class="w-full h-40 rounded-2xl bg-neutral-900 border \
                        border-neutral-800 flex flex-col items-center justify-center">
                <p class="text-white font-medium">
                    {asset.file_name.clone().unwrap_or_else(|| "Video".into())}
                </p>
                <p class="text-sm text-neutral-400">
                    {format!("{:.1} MB", asset.size() as f64 / 1_048_576.0)}
                </p>
            </div>
        },
    }
}

#[function_component]
pub fn MediaPicker(props: &Props) -> Html {
    let file_input_ref = use_node_ref();
    let toast = use_toast();

    let on_file_select = {
        let on_pick = props.on_pick.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            let reader = match FileReader::new() {
                Ok(reader) => reader,
                Err(e) => {
                    tracing::error!("Could not create a file reader: {e:?}");
                    toast.error("Could not read the selected file");
                    return;
                }
            };

            let file_name = file.name();
            let mime_type = Some(file.type_()).filter(|t| !t.is_empty());
            let on_pick = on_pick.clone();
            let reader_clone = reader.clone();

            let onload = Closure::wrap(Box::new(move |_: Event| {
                let Ok(result) = reader_clone.result() else {
                    tracing::error!("File reader finished without a result");
                    return;
                };
                let data = js_sys::Uint8Array::new(&result).to_vec();
                on_pick.emit(MediaAsset {
                    file_name: Some(file_name.clone()),
                    mime_type: mime_type.clone(),
                    data,
                });
            }) as Box<dyn FnMut(_)>);

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            if let Err(e) = reader.read_as_array_buffer(&file) {
                tracing::error!("Could not read {}: {e:?}", file.name());
                toast.error("Could not read the selected file");
            }
            onload.forget();
        })
    };

    let on_open = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    html! {
        <div class="mt-7">
            <p class="text-neutral-200 font-medium">{&props.label}</p>
            <input
                ref={file_input_ref}
                type="file"
                accept={accept(props.category)}
                class="hidden"
                onchange={on_file_select}
            />
            <button
                type="button"
                onclick={on_open}
                disabled={props.disabled}
                class="mt-2 w-full disabled:opacity-50"
            >
                {match &props.asset {
                    Some(asset) => preview(props.category, asset),
                    None => html! {
                        <div class="w-full h-16 rounded-2xl bg-neutral-900 border-2 \
                                    border-neutral-800 flex items-center justify-center \
                                    text-sm text-neutral-300">
                            {"Choose a file"}
                        </div>
                    },
                }}
            </button>
        </div>
    }
}
