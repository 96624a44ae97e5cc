use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::config;
use crate::shared::components::ui::Button;
use crate::shared::navigate::open_same_window;

/// Where "Upload" sends the browser, if anywhere. No file selected means
/// no navigation at all.
fn upload_destination(file_selected: bool) -> Option<&'static str> {
    file_selected.then_some(config::UPLOAD_SERVICE_URL)
}

/// Upload screen. Only the chosen file's name is kept; the content is
/// never read or transmitted — the external service does its own intake.
#[component]
pub fn UploadDataPage() -> impl IntoView {
    let (selected_file, set_selected_file) = signal(Option::<String>::None);

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());

        if let Some(input) = input {
            let name = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            set_selected_file.set(name);
        }
    };

    let on_upload = move |_| match upload_destination(selected_file.get_untracked().is_some()) {
        Some(url) => {
            if let Err(err) = open_same_window(url) {
                log::error!("Upload redirect failed: {err}");
            }
        }
        None => log::debug!("Upload requested without a selected file, ignoring"),
    };

    view! {
        <div class="upload-data">
            <h1>"Upload Data"</h1>
            <div class="upload-container">
                <label class="file-input-label">
                    "Choose File"
                    <input type="file" accept=".csv" on:change=on_file_change />
                </label>
                {move || {
                    selected_file.get().map(|name| {
                        view! { <div class="file-name">"Selected file: " {name}</div> }
                    })
                }}
                <Button on_click=Callback::new(on_upload)>"Upload"</Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_means_no_navigation() {
        assert_eq!(upload_destination(false), None);
    }

    #[test]
    fn selected_file_redirects_to_analysis_service() {
        assert_eq!(upload_destination(true), Some(config::UPLOAD_SERVICE_URL));
    }
}
