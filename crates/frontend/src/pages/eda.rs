use leptos::prelude::*;

use crate::config;

/// Inline frame onto the externally hosted EDA app. Opaque to this app:
/// no data crosses the frame boundary. Reachable at `/eda` by URL only.
#[component]
pub fn EdaPage() -> impl IntoView {
    view! {
        <div class="eda-page">
            <h1>"Exploratory Data Analysis"</h1>
            <iframe
                src=config::EDA_EMBED_URL
                title="Streamlit EDA"
                class="eda-frame"
            ></iframe>
        </div>
    }
}
