use leptos::prelude::*;

/// Form input driven by a string signal. Numeric fields also go through
/// this as `input_type="number"`; coercion happens at compute time, not
/// here, so invalid text is accepted silently.
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default) or "number"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Name attribute, doubles as the element id
    #[prop(optional, into)]
    name: MaybeProp<String>,
) -> impl IntoView {
    let input_name = move || name.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <input
            id=input_name
            name=input_name
            class="form__input"
            type=input_t
            value=move || value.get()
            placeholder=input_placeholder
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    }
}
