use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

use super::input::FIELD_CLASS;

/// Multi-line field. Input beyond `max_chars` is cut while typing.
#[component]
pub fn Textarea(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] id: String,
    #[prop(default = 4)] rows: u32,
    #[prop(optional)] max_chars: Option<usize>,
    #[prop(into)] bind_value: RwSignal<String>,
) -> impl IntoView {
    let merged_class = tw_merge!(FIELD_CLASS, "resize-y py-3", class);

    let on_input = move |ev: web_sys::Event| {
        if let Some(area) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        {
            let value = area.value();
            let value = match max_chars {
                Some(n) if value.chars().count() > n => {
                    let cut: String = value.chars().take(n).collect();
                    area.set_value(&cut);
                    cut
                }
                _ => value,
            };
            bind_value.set(value);
        }
    };

    view! {
        <textarea
            data-name="Textarea"
            class=merged_class
            placeholder=placeholder
            id=id
            rows=rows
            prop:value=move || bind_value.get()
            on:input=on_input
        ></textarea>
    }
}
