//! Persistent side-navigation panel.

use leptos::prelude::*;
use leptos_router::components::A;

// (path, label). `/eda` and `/tableau` are reached from the home cards,
// not from here.
const NAV_ITEMS: [(&str, &str); 3] = [
    ("/", "Home"),
    ("/upload", "Upload Data"),
    ("/predict", "Predict"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__header">
                <h2>"Dashboard"</h2>
            </div>
            <ul>
                {NAV_ITEMS
                    .into_iter()
                    .map(|(path, label)| {
                        view! {
                            <li>
                                <A href=path>{label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
