use crate::layout::sidebar::Sidebar;
use crate::pages::eda::EdaPage;
use crate::pages::home::HomePage;
use crate::pages::predict::PredictPage;
use crate::pages::tableau::TableauDashboardPage;
use crate::pages::upload::UploadDataPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Maps each URL path to exactly one screen, next to the persistent
/// sidebar. Unmatched paths render nothing.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| ()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/tableau") view=TableauDashboardPage />
                        <Route path=path!("/upload") view=UploadDataPage />
                        <Route path=path!("/predict") view=PredictPage />
                        <Route path=path!("/eda") view=EdaPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
