use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config;
use crate::shared::navigate::open_same_window;

/// Landing screen: three cards. EDA and Forecast hand the whole window to
/// the hosted Streamlit apps; the dashboard card stays in-app.
#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();

    let open_eda = move |_| {
        if let Err(err) = open_same_window(config::EDA_APP_URL) {
            log::error!("EDA redirect failed: {err}");
        }
    };

    let open_forecast = move |_| {
        if let Err(err) = open_same_window(config::FORECAST_APP_URL) {
            log::error!("Forecast redirect failed: {err}");
        }
    };

    let open_dashboard = move |_| navigate("/tableau", Default::default());

    view! {
        <div class="home">
            <h1>"Sales EDA Analysis and Forecast"</h1>
            <div class="cards">
                <div class="card" on:click=open_eda>
                    <h2>"Exploratory Data Analysis"</h2>
                    <p>"Data visualization"</p>
                </div>
                <div class="card" on:click=open_forecast>
                    <h2>"Forecast Future Sales"</h2>
                    <p>"Sales revenue in the future"</p>
                </div>
                <div class="card" on:click=open_dashboard>
                    <h2>"Tableau Dashboard"</h2>
                    <p>"View interactive dashboard"</p>
                </div>
            </div>
        </div>
    }
}
