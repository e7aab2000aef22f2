use leptos::prelude::*;
use tw_merge::*;

/// Form label; `required` prefixes the red asterisk.
#[component]
pub fn Label(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] html_for: String,
    #[prop(optional)] required: bool,
    children: Children,
) -> impl IntoView {
    let class = tw_merge!(
        "mb-1 block text-sm font-medium text-gray-700 select-none dark:text-gray-200",
        class
    );

    view! {
        <label class=class r#for=html_for>
            {required.then(|| view! { <span class="mr-1 text-red-500">"*"</span> })}
            {children()}
        </label>
    }
}
