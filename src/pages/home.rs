use super::{use_ideas, PageHeading};
use crate::api::IdeaFilter;
use crate::components::{IdeasGrid, Layout};
use crate::ideas::filter::distinct_types;
use crate::ideas::IdeaQuery;
use leptos::prelude::*;

const CATEGORY_CHIPS: [(&str, &str); 4] = [
    ("", "All"),
    ("nft", "💎 NFT Ideas"),
    ("free", "🆓 Free Ideas"),
    ("trending", "🔥 Trending"),
];

const CHAINS: [(&str, &str); 4] = [
    ("eth", "⟠ Ethereum"),
    ("sol", "◎ Solana"),
    ("bsc", "🟡 BNB Chain"),
    ("polygon", "🟣 Polygon"),
];

const CHIP: &str = "rounded-full px-4 py-2 text-xs font-medium transition-all duration-300 hover:scale-105 md:text-sm";
const CHIP_ACTIVE: &str = "bg-gradient-to-r from-blue-500 to-indigo-600 text-white shadow-lg shadow-blue-500/25";
const CHIP_IDLE: &str = "text-gray-700 hover:bg-gray-100 hover:text-gray-900 dark:text-gray-300 dark:hover:bg-gray-800 dark:hover:text-white";

const SELECT: &str = "rounded-full border border-gray-200 bg-white px-3 py-2 text-xs text-gray-700 outline-none focus:ring-2 focus:ring-blue-500/20 md:text-sm dark:border-gray-700 dark:bg-gray-900 dark:text-gray-200";

#[component]
pub fn HomePage() -> impl IntoView {
    let category = RwSignal::new(String::new());
    let idea_type = RwSignal::new(String::new());
    let chain = RwSignal::new(String::new());

    let res = use_ideas(IdeaFilter::default);

    let query = Signal::derive(move || IdeaQuery {
        category: category.get(),
        idea_type: idea_type.get(),
        chain: chain.get(),
    });
    let type_options = Memo::new(move |_| res.ideas.with(|all| distinct_types(all)));

    view! {
        <Layout>
            <div class="mx-auto max-w-screen-2xl py-6 pb-20 md:py-8 lg:pb-10">
                <div class="mb-4 flex items-center justify-between gap-4 md:mb-6">
                    <PageHeading
                        title="IDEAS"
                        subtitle="Explore blockchain-verified inspirations. Own, trade, and collaborate on ideas."
                    />
                    <a
                        href="/launch"
                        class="hidden whitespace-nowrap rounded-full bg-gradient-to-r from-amber-400 to-orange-500 px-4 py-2 text-sm font-medium text-black transition-all duration-300 hover:scale-105 hover:shadow-lg md:inline-flex"
                    >
                        "✨ Launch an Idea"
                    </a>
                </div>

                <div class="mb-6 flex flex-wrap items-center gap-2 md:mb-8 md:gap-3">
                    {CATEGORY_CHIPS
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <button
                                    type="button"
                                    class=move || format!(
                                        "{CHIP} {}",
                                        if category.get() == value { CHIP_ACTIVE } else { CHIP_IDLE },
                                    )
                                    on:click=move |_| {
                                        category.set(value.to_string());
                                        if value.is_empty() {
                                            idea_type.set(String::new());
                                            chain.set(String::new());
                                        }
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}

                    <div class="ml-auto flex items-center gap-2">
                        <select
                            class=SELECT
                            aria-label="Type"
                            prop:value=move || idea_type.get()
                            on:change=move |ev| idea_type.set(event_target_value(&ev))
                        >
                            <option value="">"All types"</option>
                            {move || {
                                type_options
                                    .get()
                                    .into_iter()
                                    .map(|t| view! { <option value=t.clone()>{t.to_uppercase()}</option> })
                                    .collect_view()
                            }}
                        </select>
                        <select
                            class=SELECT
                            aria-label="Chain"
                            prop:value=move || chain.get()
                            on:change=move |ev| chain.set(event_target_value(&ev))
                        >
                            <option value="">"All chains"</option>
                            {CHAINS
                                .into_iter()
                                .map(|(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <IdeasGrid
                    ideas=res.ideas
                    query=query
                    loading=res.loading
                    error=res.error
                />
            </div>
        </Layout>
    }
}
