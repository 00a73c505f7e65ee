//! Labelled text input bound to a signal, with an optional error line.

use leptos::prelude::*;

#[component]
pub fn FormField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into, optional)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=name>{label} ": "</label>
            <input
                type=input_type
                id=name
                name=name
                placeholder=label
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || {
                error
                    .and_then(|error| error.get())
                    .map(|message| view! { <p class="form-error">{message}</p> })
            }}
        </div>
    }
}
