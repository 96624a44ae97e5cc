use leptos::prelude::*;

use crate::shared::embed::{ExternalWidget, TableauViz, TABLEAU_PLACEHOLDER_ID};

/// Embedded Tableau Public dashboard. The page only renders the
/// placeholder; the vendor bootstrap happens in a mount effect behind the
/// [`ExternalWidget`] boundary. A failed mount is logged and the page
/// stays blank, matching the no-fallback policy for external embeds.
#[component]
pub fn TableauDashboardPage() -> impl IntoView {
    Effect::new(move |_| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document to mount Tableau embed into");
            return;
        };

        let viz = TableauViz::default();
        if let Err(err) = viz.mount(&document) {
            log::error!("Tableau embed mount failed: {err}");
        }
    });

    view! {
        <div class="tableau-container">
            <div
                class="tableauPlaceholder"
                id=TABLEAU_PLACEHOLDER_ID
                style="position: relative;"
            ></div>
        </div>
    }
}
