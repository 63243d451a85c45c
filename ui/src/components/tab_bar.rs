use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const TABS: [(&str, Route); 4] = [
    ("Home", Route::Home),
    ("Bookmark", Route::Bookmark),
    ("Create", Route::Create),
    ("Profile", Route::Profile),
];

#[derive(Properties, PartialEq)]
pub struct Props {
    pub active: Route,
}

/// Bottom navigation between the signed-in screens.
#[function_component]
pub fn TabBar(props: &Props) -> Html {
    html! {
        <nav class="fixed bottom-0 inset-x-0 h-20 bg-neutral-950 border-t \
                    border-neutral-800">
            <ul class="max-w-3xl mx-auto h-full grid grid-cols-4">
                {for TABS.iter().map(|(label, route)| {
                    let color = if *route == props.active {
                        "text-amber-400"
                    } else {
                        "text-neutral-400"
                    };
                    html! {
                        <li class="flex items-center justify-center">
                            <Link<Route>
                                to={route.clone()}
                                classes={classes!("text-sm", "font-medium", color)}
                            >
                                {*label}
                            </Link<Route>>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}
