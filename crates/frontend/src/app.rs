use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

/// Root component. Screens are shared-nothing, so there is no global
/// context to provide; the router owns everything.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <AppRoutes />
    }
}
