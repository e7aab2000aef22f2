use crate::components::ui::{Card, CardContent, CardHeader, CardTitle, ErrorAlert, Spinner};
use crate::components::{IdeaIcon, Layout};
use crate::ideas::display::short_address;
use crate::models::{Idea, LaunchParams};
use crate::state::{AppContext, RequestLatch};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ToolLink {
    pub label: &'static str,
    pub href: &'static str,
    pub class: &'static str,
    pub owner_only: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ToolSet {
    pub title: &'static str,
    pub links: [ToolLink; 3],
}

const fn link(label: &'static str, href: &'static str, class: &'static str) -> ToolLink {
    ToolLink { label, href, class, owner_only: false }
}

const fn owner_link(label: &'static str, href: &'static str) -> ToolLink {
    ToolLink {
        label,
        href,
        class: "from-green-500 to-emerald-600 text-white",
        owner_only: true,
    }
}

/// Sidebar tools picked by idea type (substring, case-insensitive).
pub(crate) fn tool_set(idea_type: &str) -> ToolSet {
    let t = idea_type.to_ascii_lowercase();
    if t.contains("nft") {
        ToolSet {
            title: "NFT Tools",
            links: [
                link("💎 Mint NFT", "/nft-mint", "from-blue-500 to-indigo-600 text-white"),
                link("🎨 View Collection", "/nft-mint", "from-purple-500 to-pink-600 text-white"),
                owner_link("💰 Manage Mint", "/nft-mint"),
            ],
        }
    } else if t.contains("token") {
        ToolSet {
            title: "Token Tools",
            links: [
                link("🪙 Buy Tokens", "/token-sale", "from-yellow-500 to-orange-600 text-white"),
                link("🏛️ Governance", "/dao-governance", "from-indigo-500 to-purple-600 text-white"),
                owner_link("📊 Manage Sale", "/token-sale"),
            ],
        }
    } else if t.contains("dao") {
        ToolSet {
            title: "DAO Tools",
            links: [
                link("🗳️ Vote on Proposals", "/dao-governance", "from-blue-500 to-cyan-600 text-white"),
                link("💼 Join DAO", "/dao-governance", "from-purple-500 to-indigo-600 text-white"),
                owner_link("⚙️ DAO Settings", "/dao-governance"),
            ],
        }
    } else {
        ToolSet {
            title: "General Tools",
            links: [
                link("✨ Mint Proof", "/nft-mint", "from-amber-400 to-orange-500 text-black"),
                link("🤝 Support Project", "/presale", "from-blue-500 to-indigo-600 text-white"),
                owner_link("🚀 Start Crowdfunding", "/launch"),
            ],
        }
    }
}

/// Label/value rows of the owner-only launch panel.
pub(crate) fn launch_rows(launch: &LaunchParams) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    if let Some(p) = launch.price_eth {
        rows.push(("NFT Price (ETH)", p.to_string()));
    }
    if let Some(g) = launch.funding_goal_eth {
        rows.push(("Funding Goal (ETH)", g.to_string()));
    }
    if let Some(r) = launch.revenue_share_pct {
        rows.push(("Revenue Share %", format!("{r}%")));
    }
    rows
}

fn contact_rows(launch: &LaunchParams) -> Vec<String> {
    let Some(c) = launch.contacts.as_ref() else {
        return Vec::new();
    };
    [("Twitter", &c.twitter), ("Discord", &c.discord), ("Telegram", &c.telegram)]
        .into_iter()
        .filter_map(|(k, v)| {
            v.as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(|s| format!("{k}: {s}"))
        })
        .collect()
}

#[component]
fn ToolsPanel(idea: Idea, is_owner: Signal<bool>) -> impl IntoView {
    let set = tool_set(&idea.idea_type);

    view! {
        <Card class="gap-3 py-4">
            <CardHeader class="px-4">
                <CardTitle class="text-base">{set.title}</CardTitle>
            </CardHeader>
            <CardContent class="space-y-2 px-4">
                {set
                    .links
                    .into_iter()
                    .map(|l| {
                        let class = format!(
                            "block w-full rounded-lg bg-gradient-to-r px-4 py-2 text-center text-sm font-medium transition-all hover:opacity-90 {}",
                            l.class
                        );
                        view! {
                            <Show when=move || !l.owner_only || is_owner.get()>
                                <a href=l.href class=class.clone()>{l.label}</a>
                            </Show>
                        }
                    })
                    .collect_view()}
            </CardContent>
        </Card>
    }
}

#[component]
fn LaunchPanel(launch: LaunchParams) -> impl IntoView {
    let rows = launch_rows(&launch);
    let contacts = contact_rows(&launch);

    view! {
        <Card class="mt-6 gap-3 py-4">
            <CardHeader class="px-4">
                <CardTitle class="text-base">"Launch Parameters"</CardTitle>
            </CardHeader>
            <CardContent class="px-4">
                <dl class="space-y-2 text-sm text-gray-700 dark:text-gray-300">
                    {rows
                        .into_iter()
                        .map(|(k, v)| view! {
                            <div class="flex justify-between"><dt>{k}</dt><dd>{v}</dd></div>
                        })
                        .collect_view()}
                </dl>
                {(!contacts.is_empty()).then(|| view! {
                    <div class="mt-3">
                        <div class="text-sm font-medium">"Creator Contact"</div>
                        <ul class="mt-1 space-y-1 text-sm text-gray-600 dark:text-gray-400">
                            {contacts.into_iter().map(|c| view! { <li>{c}</li> }).collect_view()}
                        </ul>
                    </div>
                })}
            </CardContent>
        </Card>
    }
}

#[component]
fn IdeaView(idea: Idea) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let deployer = idea.deployer.clone();
    let owner_check = idea.clone();
    let is_owner = Signal::derive(move || {
        app_state
            .0
            .wallet_address
            .get()
            .map(|a| owner_check.is_owned_by(&a))
            .unwrap_or(false)
    });

    let overview = idea
        .latest_message()
        .map(|m| m.title.clone())
        .unwrap_or_else(|| "No description yet.".to_string());
    let launch = idea.launch.clone();

    view! {
        <div class="mt-4 flex items-start gap-4">
            <IdeaIcon icon=idea.icon.clone() bg_color=idea.bg_color.clone() class="h-16 w-16 text-4xl select-none" />
            <div class="flex-1">
                <h1 class="text-2xl font-extrabold tracking-tight md:text-3xl">{idea.name.clone()}</h1>
                <div class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                    <span class="mr-3">{format!("Category: {}", idea.category)}</span>
                    <span>{format!("Type: {}", idea.idea_type)}</span>
                </div>
            </div>
        </div>

        <div class="mt-6 grid grid-cols-1 gap-6 lg:grid-cols-3">
            <div class="lg:col-span-2">
                <div class="rounded-xl border border-gray-200 bg-white p-5 dark:border-[#23252a] dark:bg-[#15171b]">
                    <h2 class="text-lg font-semibold">"Overview"</h2>
                    <p class="mt-2 text-[15px] text-gray-700 dark:text-gray-300">{overview}</p>
                </div>

                <div class="mt-6 rounded-xl border border-gray-200 bg-white p-5 dark:border-[#23252a] dark:bg-[#15171b]">
                    <h2 class="text-lg font-semibold">"Latest Updates"</h2>
                    <ul class="mt-3 space-y-3">
                        {idea
                            .messages
                            .iter()
                            .cloned()
                            .map(|m| view! {
                                <li class="rounded-lg bg-gray-50 p-3 dark:bg-[#1b1e24]">
                                    <div class="text-sm text-gray-800 dark:text-gray-200">{m.title}</div>
                                    {m.href.map(|href| view! {
                                        <a
                                            href=href
                                            class="mt-1 inline-block text-xs text-indigo-600 hover:underline dark:text-indigo-400"
                                        >
                                            "Source"
                                        </a>
                                    })}
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>

            <aside>
                <ToolsPanel idea=idea.clone() is_owner=is_owner />

                {launch.map(|l| view! {
                    <Show when=move || is_owner.get()>
                        <LaunchPanel launch=l.clone() />
                    </Show>
                })}

                {deployer.map(|d| view! {
                    <Show when=move || !is_owner.get()>
                        <div class="mt-6 text-xs text-gray-500">
                            <div>"Owner-only launch details. Connect the owner wallet to view."</div>
                            <div class="mt-1 font-mono" title=d.clone()>{format!("Deployer: {}", short_address(&d))}</div>
                        </div>
                    </Show>
                })}
            </aside>
        </div>
    }
}

#[component]
pub fn IdeaDetailPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").and_then(|s| s.trim().parse::<i64>().ok()));

    let idea: RwSignal<Option<Idea>> = RwSignal::new(None);
    let loading = RwSignal::new(true);
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    let latch = RequestLatch::new();
    {
        let latch = latch.clone();
        on_cleanup(move || latch.invalidate());
    }

    Effect::new(move |_| {
        let ticket = latch.begin();
        idea.set(None);
        error.set(None);

        let Some(id) = id() else {
            loading.set(false);
            error.set(Some("Not Found".to_string()));
            return;
        };

        loading.set(true);
        let api_client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            let result = api_client.get_idea(id).await;

            // Ignore stale responses.
            if !ticket.is_current() {
                return;
            }

            match result {
                Ok(i) => idea.set(Some(i)),
                Err(e) => {
                    log::warn!("failed to load idea {id}: {e}");
                    app_state.0.note_api_error(&e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let go_back = move |_: web_sys::MouseEvent| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };

    view! {
        <Layout>
            <div class="mx-auto max-w-screen-2xl py-6 md:py-10">
                <button
                    type="button"
                    class="text-sm text-gray-600 hover:text-gray-900 dark:text-gray-300 dark:hover:text-white"
                    on:click=go_back
                >
                    "← Back"
                </button>

                {move || {
                    if loading.get() {
                        view! {
                            <div class="mt-6 flex items-center gap-2 text-sm text-gray-500">
                                <Spinner />
                                "Loading…"
                            </div>
                        }
                        .into_any()
                    } else if let Some(i) = idea.get() {
                        view! { <IdeaView idea=i /> }.into_any()
                    } else {
                        let msg = error.get().unwrap_or_else(|| "Not Found".to_string());
                        view! {
                            <div class="mt-6 max-w-xl">
                                <h1 class="mb-3 text-2xl font-extrabold tracking-tight">"Not Found"</h1>
                                <ErrorAlert message=msg />
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LaunchContacts;

    #[test]
    fn test_tool_set_by_type() {
        assert_eq!(tool_set("nft").title, "NFT Tools");
        assert_eq!(tool_set("NFT-Collection").title, "NFT Tools");
        assert_eq!(tool_set("token").title, "Token Tools");
        assert_eq!(tool_set("dao").title, "DAO Tools");
        assert_eq!(tool_set("free").title, "General Tools");
        assert_eq!(tool_set("presale").title, "General Tools");
    }

    #[test]
    fn test_each_tool_set_has_one_owner_link() {
        for t in ["nft", "token", "dao", "free"] {
            let owner = tool_set(t).links.iter().filter(|l| l.owner_only).count();
            assert_eq!(owner, 1, "type {t}");
        }
    }

    #[test]
    fn test_launch_rows_and_contacts() {
        let l = LaunchParams {
            price_eth: Some(0.1),
            funding_goal_eth: None,
            revenue_share_pct: Some(10.0),
            contacts: Some(LaunchContacts {
                twitter: Some("@me".to_string()),
                discord: Some("  ".to_string()),
                telegram: None,
            }),
        };
        assert_eq!(
            launch_rows(&l),
            vec![
                ("NFT Price (ETH)", "0.1".to_string()),
                ("Revenue Share %", "10%".to_string())
            ]
        );
        assert_eq!(contact_rows(&l), vec!["Twitter: @me".to_string()]);
    }
}
