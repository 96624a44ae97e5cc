use leptos::prelude::*;

/// Button with variants (primary, secondary)
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "secondary"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref() {
        Some("secondary") => "button--secondary",
        _ => "button--primary",
    };

    view! {
        <button
            type="button"
            class=move || format!("button {}", variant_class())
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
