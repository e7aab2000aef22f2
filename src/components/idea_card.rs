use crate::ideas::display::{category_badge, chain_icon, short_address, time_ago};
use crate::models::Idea;
use leptos::prelude::*;

#[component]
pub fn IdeaIcon(
    #[prop(into)] icon: String,
    #[prop(into)] bg_color: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let class = format!(
        "flex items-center justify-center overflow-hidden rounded-xl shadow-sm {}",
        if class.is_empty() { "h-12 w-12 text-2xl" } else { class.as_str() }
    );
    let body = if crate::ideas::display::icon_is_image(&icon) {
        view! { <img src=icon alt="" class="h-full w-full object-cover" /> }.into_any()
    } else {
        view! { <span>{icon}</span> }.into_any()
    };

    view! {
        <div class=class style=format!("background-color: {bg_color}")>
            {body}
        </div>
    }
}

#[component]
pub fn IdeaCard(idea: Idea, now_ms: i64) -> impl IntoView {
    let badge = category_badge(&idea.category);
    let latest = idea.latest_message().cloned();
    let href = format!("/ideas/{}", idea.id);
    let chain = idea.chain.clone();
    let deployer = idea.deployer.clone();
    let launch = idea.launch.clone();

    view! {
        <a href=href class="block">
            <div class="group relative cursor-pointer overflow-hidden rounded-2xl border border-gray-200 bg-white transition-all duration-300 hover:-translate-y-1 hover:border-gray-300 hover:shadow-lg dark:border-gray-700 dark:bg-gray-900 dark:hover:border-gray-600 dark:hover:shadow-2xl">
                <div class="p-4 pb-2">
                    <div class="mb-3 flex items-start justify-between">
                        <IdeaIcon icon=idea.icon.clone() bg_color=idea.bg_color.clone() />
                        <div class="flex items-center gap-2">
                            {chain.map(|c| {
                                let icon = chain_icon(Some(&c));
                                view! { <span class="text-lg" title=c>{icon}</span> }
                            })}
                            <span class=format!("rounded-full px-2 py-1 text-xs font-medium {}", badge.class) title=idea.category.clone()>
                                {badge.icon}
                            </span>
                        </div>
                    </div>

                    <h3 class="mb-2 text-lg font-semibold text-gray-900 transition-colors group-hover:text-blue-600 dark:text-white dark:group-hover:text-blue-400">
                        {idea.name.clone()}
                    </h3>

                    {latest.clone().map(|m| view! {
                        <p class="mb-3 line-clamp-2 text-sm text-gray-600 dark:text-gray-400">{m.title}</p>
                    })}
                </div>

                <div class="px-4 pb-4">
                    <div class="flex items-center justify-between text-xs text-gray-500 dark:text-gray-400">
                        {latest.map(|m| view! { <span>{time_ago(m.created_ms, now_ms)}</span> })}
                        {deployer.map(|d| view! { <span class="font-mono">{short_address(&d)}</span> })}
                    </div>

                    {launch.map(|l| view! {
                        <div class="mt-2 flex items-center justify-between border-t border-gray-100 pt-2 text-xs dark:border-gray-800">
                            {l.price_eth.map(|p| view! {
                                <span class="font-medium text-green-600 dark:text-green-400">{format!("{p} ETH")}</span>
                            })}
                            {l.funding_goal_eth.map(|g| view! {
                                <span class="text-gray-500 dark:text-gray-400">{format!("Goal: {g} ETH")}</span>
                            })}
                        </div>
                    })}
                </div>

                <div class="pointer-events-none absolute inset-0 bg-gradient-to-r from-blue-500/5 to-purple-500/5 opacity-0 transition-opacity duration-300 group-hover:opacity-100"></div>
            </div>
        </a>
    }
}
