use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct MenuItem {
    pub label: AttrValue,
    pub on_click: Callback<()>,
    /// Rendered in red, for destructive actions.
    pub danger: bool,
}

impl MenuItem {
    pub fn new(label: impl Into<AttrValue>, on_click: Callback<()>) -> Self {
        Self {
            label: label.into(),
            on_click,
            danger: false,
        }
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub items: Vec<MenuItem>,
}

/// Kebab button opening a small dropdown of actions.
#[function_component]
pub fn OverflowMenu(props: &Props) -> Html {
    let is_open = use_state(|| false);

    if props.items.is_empty() {
        return html! {};
    }

    let on_toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            is_open.set(!*is_open);
        })
    };

    let on_backdrop_click = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    let items = props.items.iter().map(|item| {
        let on_click = item.on_click.clone();
        let is_open = is_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            is_open.set(false);
            on_click.emit(());
        });

        let text_class = if item.danger {
            "text-red-400"
        } else {
            "text-neutral-300"
        };

        html! {
            <button
                {onclick}
                class={classes!(
                    "w-full", "px-4", "py-2", "text-left", "font-medium",
                    "hover:bg-neutral-800", text_class
                )}
            >
                {&item.label}
            </button>
        }
    });

    html! {
        <div class="relative pt-2">
            <button
                onclick={on_toggle}
                class="p-1 rounded text-neutral-400 hover:text-white"
                aria-label="More options"
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    class="h-5 w-5"
                    viewBox="0 0 20 20"
                    fill="currentColor"
                >
                    <path d="M10 6a2 2 0 110-4 2 2 0 010 4zM10 12a2 2 0 110-4 2 2 0 010 4zM10 18a2 2 0 110-4 2 2 0 010 4z" />
                </svg>
            </button>

            if *is_open {
                <>
                    // Backdrop to catch clicks outside the menu
                    <div onclick={on_backdrop_click} class="fixed inset-0 z-40" />
                    <div class="absolute right-0 mt-1 py-2 w-40 z-50 rounded-lg \
                                bg-neutral-900 border-2 border-neutral-800 shadow-lg">
                        {for items}
                    </div>
                </>
            }
        </div>
    }
}
