//! Whole-page navigation to externally hosted services.
//!
//! This is a browser-level operation, not an in-app route change: the wasm
//! app is torn down and the target origin takes over the window.

pub fn open_same_window(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    window
        .location()
        .set_href(url)
        .map_err(|e| format!("Failed to navigate to {url}: {e:?}"))
}
