use crate::components::hooks::{use_click_outside, Disclosure};
use icons::ChevronDown;
use leptos::html;
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Button plus popup menu. Any click inside the menu closes it, as does a
/// press anywhere outside.
#[component]
pub fn Dropdown(
    /// Trigger contents.
    #[prop(into)]
    trigger: ViewFn,
    #[prop(into, optional)] trigger_class: Signal<String>,
    #[prop(into, optional)] menu_class: String,
    #[prop(into, optional)] aria_label: String,
    #[prop(optional)] chevron: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let state = RwSignal::new(Disclosure::default());
    let container = NodeRef::<html::Div>::new();
    use_click_outside(state, container);

    let menu_class = tw_merge!(
        "absolute z-50 mt-2 rounded-2xl border border-gray-200 bg-white p-2 shadow-lg ring-1 ring-black/5 dark:border-[#2d2d30] dark:bg-[#1e1e1e] dark:text-gray-200 dark:ring-white/5",
        menu_class
    );
    let children = StoredValue::new(children);

    view! {
        <div class="relative" node_ref=container>
            <button
                type="button"
                class=move || trigger_class.get()
                aria-label=aria_label
                aria-haspopup="menu"
                aria-expanded=move || state.get().is_open().to_string()
                on:click=move |_| state.update(|d| d.toggle())
            >
                {trigger.run()}
                {chevron.then(|| view! { <ChevronDown class="size-3" /> })}
            </button>
            <Show when=move || state.get().is_open()>
                <div
                    role="menu"
                    class=menu_class.clone()
                    on:click=move |_| state.update(|d| d.close())
                >
                    {children.with_value(|c| c())}
                </div>
            </Show>
        </div>
    }
}
