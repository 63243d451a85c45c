use crate::contexts::toast::{Toast, ToastType, use_toast};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let toast_handle = use_toast();
    let toast = &props.toast;

    let accent_class = match toast.toast_type {
        ToastType::Error => "border-red-500 text-red-300",
        ToastType::Success => "border-emerald-500 text-emerald-300",
        ToastType::Info => "border-neutral-500 text-neutral-300",
    };

    let on_close = {
        let toast_id = toast.id;
        Callback::from(move |_: MouseEvent| toast_handle.remove(toast_id))
    };

    html! {
        <div class={classes!(
            "p-4", "rounded-lg", "border-l-4", "bg-neutral-900", "shadow-lg",
            accent_class
        )}>
            <div class="flex items-start gap-3">
                <div class="flex-1 min-w-0">
                    <p class="text-sm font-semibold">{toast.toast_type.title()}</p>
                    // Multi-error messages are separated by blank lines
                    <p class="mt-1 text-sm text-neutral-200 whitespace-pre-line">
                        {&toast.message}
                    </p>
                </div>
                <button
                    onclick={on_close}
                    class="text-neutral-500 hover:text-neutral-200"
                    title="Dismiss"
                >
                    <span class="text-lg leading-none">{"×"}</span>
                </button>
            </div>
        </div>
    }
}
