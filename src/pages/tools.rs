use super::{use_ideas, PageHeading};
use crate::api::IdeaFilter;
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle, ErrorAlert,
    Input, Label, Spinner, SuccessAlert,
};
use crate::components::{IdeasGrid, Layout};
use crate::ideas::display::short_address;
use crate::ideas::IdeaQuery;
use crate::launch::tools::{
    self, clamp_units, draw_voting_power, execute, explorer_url, parse_eth, Proposal,
    ProposalStatus, ToolAction,
};
use crate::launch::{CrowdfundingMode, SimulatedDeployer};
use crate::state::AppContext;
use crate::wallet;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn blurb(mode: CrowdfundingMode) -> &'static str {
    match mode {
        CrowdfundingMode::Nft => {
            "Back ideas by minting supporter NFTs. Holders share in the creator's revenue."
        }
        CrowdfundingMode::Token => {
            "Buy into ideas early with governance tokens priced by their creators."
        }
        CrowdfundingMode::Dao => "Join idea DAOs, pool funds, and vote on what gets built next.",
        CrowdfundingMode::Presale => "Reserve early access to products before they launch.",
    }
}

/// Signals shared by the wallet panel and the per-mode action panels.
#[derive(Clone, Copy)]
struct ToolState {
    app: AppContext,
    selected: RwSignal<Option<u32>>,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    message: RwSignal<Option<String>>,
    tx: RwSignal<Option<String>>,
    proposals: RwSignal<Vec<Proposal>>,
    voting_power: Memo<Option<u64>>,
}

impl ToolState {
    fn new(app: AppContext) -> Self {
        let wallet = app.0.wallet_address;
        Self {
            app,
            selected: RwSignal::new(None),
            busy: RwSignal::new(false),
            error: RwSignal::new(None),
            message: RwSignal::new(None),
            tx: RwSignal::new(None),
            proposals: RwSignal::new(tools::proposals()),
            voting_power: Memo::new(move |_| wallet.get().map(|_| draw_voting_power())),
        }
    }

    fn select(self, id: u32) {
        self.selected.set(Some(id));
        self.error.set(None);
    }

    fn run(self, action: ToolAction) {
        if self.busy.get_untracked() {
            return;
        }
        self.busy.set(true);
        self.error.set(None);
        self.message.set(None);
        self.tx.set(None);

        let wallet = self.app.0.wallet_address.get_untracked();
        spawn_local(async move {
            let deployer = SimulatedDeployer::new();
            match execute(&deployer, wallet.as_deref(), &action).await {
                Ok(receipt) => {
                    if let ToolAction::Vote { proposal, support } = &action {
                        let power = self.voting_power.get_untracked().unwrap_or_default();
                        self.proposals.update(|ps| {
                            if let Some(p) = ps.iter_mut().find(|p| p.id == proposal.id) {
                                p.record_vote(*support, power);
                            }
                        });
                    }
                    self.message.set(Some(receipt.message));
                    self.tx.set(Some(receipt.tx_hash));
                }
                Err(e) => {
                    log::warn!("tool action failed: {e}");
                    self.error.set(Some(e.to_string()));
                }
            }
            self.busy.set(false);
        });
    }
}

#[component]
fn ProgressBar(pct: f64, #[prop(optional)] color: &'static str) -> impl IntoView {
    let color = if color.is_empty() { "bg-gradient-to-r from-purple-500 to-blue-500" } else { color };
    view! {
        <div class="h-2 w-full rounded-full bg-gray-200 dark:bg-gray-700">
            <div
                class=format!("h-2 rounded-full transition-all {color}")
                style=format!("width: {pct:.1}%")
            ></div>
        </div>
    }
}

#[component]
fn WalletPanel(state: ToolState) -> impl IntoView {
    let connecting = RwSignal::new(false);
    let connect_error: RwSignal<Option<String>> = RwSignal::new(None);
    let on_connect = move |_: web_sys::MouseEvent| {
        connecting.set(true);
        connect_error.set(None);
        spawn_local(async move {
            match wallet::connect().await {
                Ok(addr) => state.app.0.set_wallet(Some(addr)),
                Err(e) => connect_error.set(Some(e.to_string())),
            }
            connecting.set(false);
        });
    };

    view! {
        <div class="mb-8 rounded-xl border border-gray-200 bg-white p-4 dark:border-gray-700 dark:bg-[#1a1b1e]">
            <h3 class="mb-3 font-semibold">"🦊 Wallet Connection"</h3>
            {move || connect_error.get().map(|e| view! { <div class="mb-3"><ErrorAlert message=e /></div> })}
            {move || match state.app.0.wallet_address.get() {
                Some(addr) => view! {
                    <div class="flex items-center justify-between gap-4">
                        <div class="flex items-center gap-2">
                            <span class="text-emerald-500">"✓"</span>
                            <span class="font-mono text-sm">{short_address(&addr)}</span>
                        </div>
                        {move || state.voting_power.get().map(|p| view! {
                            <div class="text-sm">
                                <span class="text-gray-500">"Voting Power: "</span>
                                <span class="font-semibold">{p}</span>
                            </div>
                        })}
                    </div>
                }
                .into_any(),
                None => view! {
                    <Button variant=ButtonVariant::Gradient on:click=on_connect attr:disabled=move || connecting.get()>
                        {move || if connecting.get() { "Connecting..." } else { "Connect Wallet" }}
                    </Button>
                }
                .into_any(),
            }}
        </div>
    }
}

fn card_class(state: ToolState, id: u32) -> impl Fn() -> &'static str {
    move || {
        if state.selected.get() == Some(id) {
            "cursor-pointer rounded-xl border border-blue-500 bg-blue-50 p-5 transition-all dark:bg-blue-900/20"
        } else {
            "cursor-pointer rounded-xl border border-gray-200 p-5 transition-all hover:border-gray-300 dark:border-gray-700"
        }
    }
}

#[component]
fn Receipt(state: ToolState) -> impl IntoView {
    view! {
        {move || state.error.get().map(|e| view! { <ErrorAlert message=e /> })}
        {move || state.message.get().map(|m| view! { <SuccessAlert message=m /> })}
        {move || state.tx.get().map(|tx| view! {
            <div class="rounded-lg bg-gray-50 p-3 text-xs dark:bg-gray-800/60">
                <div class="text-gray-500">"Transaction"</div>
                <div class="break-all font-mono">{tx.clone()}</div>
                <a
                    href=explorer_url(&tx)
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-indigo-600 hover:underline dark:text-indigo-400"
                >
                    "View on Etherscan ↗"
                </a>
            </div>
        })}
    }
}

#[component]
fn NftPanel(state: ToolState) -> impl IntoView {
    let projects = StoredValue::new(tools::nft_projects());
    let units = RwSignal::new("1".to_string());
    let chosen = move || {
        let id = state.selected.get()?;
        projects.with_value(|ps| ps.iter().find(|p| p.id == id).cloned())
    };

    view! {
        <div class="mb-8 grid gap-4 md:grid-cols-2">
            {projects.get_value().into_iter().map(|p| {
                let id = p.id;
                let pct = p.progress();
                view! {
                    <div class=card_class(state, id) on:click=move |_| state.select(id)>
                        <div class="flex items-start justify-between gap-3">
                            <div>
                                <h4 class="font-semibold">{p.title}</h4>
                                <p class="text-xs text-gray-500">{format!("by {}", p.creator)}</p>
                            </div>
                            <div class="text-right text-sm font-semibold">{format!("{} ETH", p.price_eth)}</div>
                        </div>
                        <div class="mt-3 flex justify-between text-xs text-gray-500">
                            <span>{format!("{} / {} minted", p.minted, p.total_supply)}</span>
                            <span>{format!("{}% royalty", p.royalty)}</span>
                        </div>
                        <div class="mt-2"><ProgressBar pct=pct /></div>
                    </div>
                }
            }).collect_view()}
        </div>
        {move || chosen().map(|p| {
            let mint = p.clone();
            let n = move || clamp_units(&units.get());
            view! {
                <Card>
                    <CardHeader><CardTitle>{format!("Mint {} NFTs", p.title)}</CardTitle></CardHeader>
                    <CardContent>
                        <div class="flex flex-col gap-4">
                            <div>
                                <Label html_for="mint-amount">"Amount (1-10)"</Label>
                                <Input id="mint-amount" r#type="number" bind_value=units />
                            </div>
                            <div class="text-sm">
                                "Total cost: "
                                <span class="font-semibold">{
                                    let p = p.clone();
                                    move || format!("{:.4} ETH", p.mint_cost(n()))
                                }</span>
                            </div>
                            <ul class="list-disc pl-5 text-sm text-gray-600 dark:text-gray-300">
                                {
                                    let p = p.clone();
                                    move || p.benefits(n()).into_iter().map(|b| view! { <li>{b}</li> }).collect_view()
                                }
                            </ul>
                            <Receipt state=state />
                            <Button
                                variant=ButtonVariant::Launch
                                size=ButtonSize::Lg
                                attr:disabled=move || state.busy.get()
                                on:click=move |_| state.run(ToolAction::Mint { project: mint.clone(), units: n() })
                            >
                                <Show when=move || state.busy.get()><Spinner /></Show>
                                {move || if state.busy.get() {
                                    "Minting...".to_string()
                                } else {
                                    let k = n();
                                    format!("Mint {k} NFT{}", if k == 1 { "" } else { "s" })
                                }}
                            </Button>
                        </div>
                    </CardContent>
                </Card>
            }
        })}
    }
}

#[component]
fn TokenPanel(state: ToolState) -> impl IntoView {
    let projects = StoredValue::new(tools::token_projects());
    let amount = RwSignal::new(String::new());
    let chosen = move || {
        let id = state.selected.get()?;
        projects.with_value(|ps| ps.iter().find(|p| p.id == id).cloned())
    };

    view! {
        <div class="mb-8 flex flex-col gap-4">
            {projects.get_value().into_iter().map(|p| {
                let id = p.id;
                let pct = p.progress();
                view! {
                    <div class=card_class(state, id) on:click=move |_| state.select(id)>
                        <div class="flex items-start justify-between gap-3">
                            <div>
                                <h4 class="text-lg font-semibold">{format!("{} ({})", p.title, p.symbol)}</h4>
                                <p class="text-sm text-gray-600 dark:text-gray-400">{p.description}</p>
                                <p class="text-xs text-gray-500">{format!("by {}", p.creator)}</p>
                            </div>
                            <div class="text-right">
                                <div class="font-semibold">{format!("{} ETH", p.price_eth)}</div>
                                <div class="text-xs text-gray-500">{format!("per {}", p.symbol)}</div>
                            </div>
                        </div>
                        <div class="mt-3 grid grid-cols-2 gap-2 text-xs md:grid-cols-4">
                            <div><span class="text-gray-500">"Total Supply: "</span>{p.total_supply}</div>
                            <div><span class="text-gray-500">"Sold: "</span>{p.sold}</div>
                            <div><span class="text-gray-500">"Allocation: "</span>{format!("{}%", p.allocation)}</div>
                            <div><span class="text-gray-500">"Vesting: "</span>{p.vesting}</div>
                        </div>
                        <div class="mt-3 flex justify-between text-xs">
                            <span>"Sale Progress"</span>
                            <span>{format!("{pct:.1}%")}</span>
                        </div>
                        <ProgressBar pct=pct color="bg-gradient-to-r from-green-500 to-blue-500" />
                    </div>
                }
            }).collect_view()}
        </div>
        {move || chosen().map(|p| {
            let buy = p.clone();
            let preview = p.clone();
            view! {
                <Card>
                    <CardHeader><CardTitle>{format!("Purchase {} Tokens", p.symbol)}</CardTitle></CardHeader>
                    <CardContent>
                        <div class="flex flex-col gap-4">
                            <div>
                                <Label html_for="buy-amount">"Amount (ETH)"</Label>
                                <Input id="buy-amount" r#type="number" placeholder="0.1" bind_value=amount />
                            </div>
                            <div class="text-sm">
                                "You receive: "
                                <span class="font-semibold">{move || {
                                    let tokens = parse_eth(&amount.get()).map(|eth| preview.tokens_for(eth)).unwrap_or(0.0);
                                    format!("{tokens:.0} {}", preview.symbol)
                                }}</span>
                            </div>
                            <p class="text-xs text-amber-600">{format!("⚠️ Tokens vest over {}.", p.vesting)}</p>
                            <Receipt state=state />
                            <Button
                                variant=ButtonVariant::Launch
                                size=ButtonSize::Lg
                                attr:disabled=move || state.busy.get() || amount.get().trim().is_empty()
                                on:click=move |_| match parse_eth(&amount.get_untracked()) {
                                    Ok(eth) => state.run(ToolAction::Buy { project: buy.clone(), eth }),
                                    Err(e) => state.error.set(Some(e.to_string())),
                                }
                            >
                                <Show when=move || state.busy.get()><Spinner /></Show>
                                {let symbol = p.symbol; move || if state.busy.get() {
                                    "Purchasing...".to_string()
                                } else {
                                    format!("Purchase {symbol} Tokens")
                                }}
                            </Button>
                        </div>
                    </CardContent>
                </Card>
            }
        })}
    }
}

fn status_class(status: ProposalStatus) -> &'static str {
    match status {
        ProposalStatus::Active => "bg-blue-100 text-blue-800 dark:bg-blue-900/30 dark:text-blue-300",
        ProposalStatus::Passed => "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-300",
        ProposalStatus::Rejected => "bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-300",
    }
}

fn category_class(category: &str) -> &'static str {
    match category {
        "Funding" => "bg-purple-100 text-purple-800 dark:bg-purple-900/30 dark:text-purple-300",
        "Governance" => "bg-orange-100 text-orange-800 dark:bg-orange-900/30 dark:text-orange-300",
        "Partnership" => "bg-teal-100 text-teal-800 dark:bg-teal-900/30 dark:text-teal-300",
        _ => "bg-gray-100 text-gray-800 dark:bg-gray-800 dark:text-gray-300",
    }
}

#[component]
fn DaoPanel(state: ToolState) -> impl IntoView {
    let daos = StoredValue::new(tools::daos());
    let chosen = move || {
        let id = state.selected.get()?;
        daos.with_value(|ds| ds.iter().find(|d| d.id == id).cloned())
    };

    let vote = move |proposal: Proposal, support: bool| {
        state.run(ToolAction::Vote { proposal, support })
    };

    view! {
        <div class="mb-8 grid gap-4 md:grid-cols-2">
            {daos.get_value().into_iter().map(|d| {
                let id = d.id;
                view! {
                    <div class=card_class(state, id) on:click=move |_| state.select(id)>
                        <div class="flex items-start gap-3">
                            <div class="flex h-12 w-12 items-center justify-center rounded-lg bg-gradient-to-r from-indigo-500 to-purple-600 text-xs font-bold text-white">
                                {d.symbol}
                            </div>
                            <div class="flex-1">
                                <h4 class="font-semibold">{d.name}</h4>
                                <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">{d.description}</p>
                                <div class="mt-3 grid grid-cols-3 gap-2 text-xs">
                                    <div><span class="text-gray-500">"Members: "</span>{d.members}</div>
                                    <div><span class="text-gray-500">"Treasury: "</span>{format!("{} ETH", d.treasury)}</div>
                                    <div><span class="text-gray-500">"Power: "</span>{d.voting_power}</div>
                                </div>
                            </div>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
        {move || chosen().map(|d| view! {
            <div class="flex flex-col gap-4">
                <h3 class="text-xl font-semibold">{format!("Proposals - {}", d.name)}</h3>
                <Receipt state=state />
                {move || state.proposals.get().into_iter().map(|p| {
                    let open = p.is_open();
                    let (for_p, against_p) = (p.clone(), p.clone());
                    view! {
                        <div class="rounded-xl border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-[#1a1b1e]">
                            <div class="mb-2 flex items-center gap-2 text-xs font-medium">
                                <span class=format!("rounded-full px-2 py-1 {}", status_class(p.status))>
                                    {p.status.to_string().to_uppercase()}
                                </span>
                                <span class=format!("rounded-full px-2 py-1 {}", category_class(p.category))>
                                    {p.category}
                                </span>
                            </div>
                            <h4 class="mb-2 text-lg font-semibold">{p.title}</h4>
                            <p class="mb-3 text-sm text-gray-600 dark:text-gray-400">{p.description}</p>
                            <div class="mb-4 flex gap-4 text-xs text-gray-500">
                                <span>{format!("Proposed by {}", p.proposer)}</span>
                                <span>{format!("Ends: {}", p.ends)}</span>
                            </div>
                            <div class="mb-4 flex flex-col gap-2 text-sm">
                                <div class="flex justify-between">
                                    <span>"Voting Progress"</span>
                                    <span>{format!("{} votes", p.total_votes())}</span>
                                </div>
                                <div class="flex items-center gap-2">
                                    <span class="w-14 text-green-600">"For"</span>
                                    <ProgressBar pct=p.for_pct() color="bg-green-500" />
                                    <span class="w-20 text-right">{p.votes_for}</span>
                                </div>
                                <div class="flex items-center gap-2">
                                    <span class="w-14 text-red-600">"Against"</span>
                                    <ProgressBar pct=p.against_pct() color="bg-red-500" />
                                    <span class="w-20 text-right">{p.votes_against}</span>
                                </div>
                            </div>
                            <Show when=move || open>
                                <div class="flex gap-3">
                                    <Button
                                        class="flex-1 bg-green-500 text-white hover:bg-green-600"
                                        attr:disabled=move || state.busy.get()
                                        on:click={let p = for_p.clone(); move |_| vote(p.clone(), true)}
                                    >
                                        {move || if state.busy.get() { "Voting..." } else { "Vote FOR" }}
                                    </Button>
                                    <Button
                                        class="flex-1 bg-red-500 text-white hover:bg-red-600"
                                        attr:disabled=move || state.busy.get()
                                        on:click={let p = against_p.clone(); move |_| vote(p.clone(), false)}
                                    >
                                        {move || if state.busy.get() { "Voting..." } else { "Vote AGAINST" }}
                                    </Button>
                                </div>
                            </Show>
                        </div>
                    }
                }).collect_view()}
            </div>
        })}
    }
}

#[component]
fn PresalePanel(state: ToolState) -> impl IntoView {
    let projects = StoredValue::new(tools::presale_projects());
    let qty = RwSignal::new("1".to_string());
    let chosen = move || {
        let id = state.selected.get()?;
        projects.with_value(|ps| ps.iter().find(|p| p.id == id).cloned())
    };

    view! {
        <div class="mb-8 grid gap-4 md:grid-cols-3">
            {projects.get_value().into_iter().map(|p| {
                let id = p.id;
                let pct = p.progress();
                view! {
                    <div class=card_class(state, id) on:click=move |_| state.select(id)>
                        <div class="mb-2 flex items-center justify-between text-xs">
                            <span class="rounded-full bg-purple-100 px-2 py-1 text-purple-800 dark:bg-purple-900/30 dark:text-purple-300">
                                {p.product_type}
                            </span>
                            <span class="font-semibold text-green-600">{format!("-{}%", p.discount)}</span>
                        </div>
                        <h4 class="font-semibold">{p.title}</h4>
                        <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">{p.description}</p>
                        <div class="mt-3 flex items-baseline gap-2">
                            <span class="text-lg font-bold">{format!("{} ETH", p.presale_price)}</span>
                            <span class="text-sm text-gray-400 line-through">{format!("{} ETH", p.original_price)}</span>
                        </div>
                        <ul class="mt-2 text-xs text-gray-600 dark:text-gray-300">
                            {p.features.iter().take(3).map(|f| view! { <li>{format!("✓ {f}")}</li> }).collect_view()}
                            {(p.features.len() > 3).then(|| view! {
                                <li class="text-gray-400">{format!("+{} more features...", p.features.len() - 3)}</li>
                            })}
                        </ul>
                        <div class="mt-3 flex justify-between text-xs text-gray-500">
                            <span>{format!("{} / {} slots", p.sold_slots, p.total_slots)}</span>
                            <span>{format!("Delivery {}", p.delivery)}</span>
                        </div>
                        <div class="mt-1"><ProgressBar pct=pct /></div>
                    </div>
                }
            }).collect_view()}
        </div>
        {move || chosen().map(|p| {
            let reserve = p.clone();
            let n = move || clamp_units(&qty.get());
            let (cost_p, save_p, label_p) = (p.clone(), p.clone(), p.clone());
            view! {
                <Card>
                    <CardHeader><CardTitle>{format!("Reserve {}", p.title)}</CardTitle></CardHeader>
                    <CardContent>
                        <div class="flex flex-col gap-4">
                            <div>
                                <Label html_for="presale-qty">"Quantity (1-10)"</Label>
                                <Input id="presale-qty" r#type="number" bind_value=qty />
                            </div>
                            <div class="grid grid-cols-2 gap-2 text-sm">
                                <div>"Total cost: "<span class="font-semibold">{move || format!("{:.3} ETH", cost_p.cost(n()))}</span></div>
                                <div>"You save: "<span class="font-semibold text-green-600">{move || format!("{:.3} ETH", save_p.savings(n()))}</span></div>
                            </div>
                            <p class="text-xs text-gray-500">{format!("{} slots left. Delivery {}.", p.slots_left(), p.delivery)}</p>
                            <Receipt state=state />
                            <Button
                                variant=ButtonVariant::Launch
                                size=ButtonSize::Lg
                                attr:disabled=move || state.busy.get()
                                on:click=move |_| state.run(ToolAction::Reserve { project: reserve.clone(), qty: n() })
                            >
                                <Show when=move || state.busy.get()><Spinner /></Show>
                                {move || if state.busy.get() {
                                    "Processing...".to_string()
                                } else {
                                    let k = n();
                                    format!(
                                        "Purchase {k} {}{} for {:.3} ETH",
                                        label_p.product_type,
                                        if k == 1 { "" } else { "s" },
                                        label_p.cost(k)
                                    )
                                }}
                            </Button>
                        </div>
                    </CardContent>
                </Card>
            }
        })}
    }
}

/// Crowdfunding hub for one mode: wallet status, the simulated
/// mint / buy / vote / reserve flow, and the ideas launched in that mode.
#[component]
pub fn ToolPage(mode: CrowdfundingMode) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let state = ToolState::new(app_state);

    let mode_key = mode.to_string();
    let filter_key = mode_key.clone();
    let res = use_ideas(move || IdeaFilter {
        idea_type: Some(filter_key.clone()),
        ..Default::default()
    });

    let query = Signal::derive(move || IdeaQuery {
        idea_type: mode_key.clone(),
        ..Default::default()
    });

    let panel = match mode {
        CrowdfundingMode::Nft => view! { <NftPanel state=state /> }.into_any(),
        CrowdfundingMode::Token => view! { <TokenPanel state=state /> }.into_any(),
        CrowdfundingMode::Dao => view! { <DaoPanel state=state /> }.into_any(),
        CrowdfundingMode::Presale => view! { <PresalePanel state=state /> }.into_any(),
    };

    view! {
        <Layout>
            <div class="mx-auto max-w-screen-2xl py-6 pb-20 md:py-8">
                <div class="mb-6 flex flex-wrap items-end justify-between gap-4 md:mb-8">
                    <PageHeading
                        title=format!("{} {}", mode.tool_icon(), mode.tool_name())
                        subtitle=blurb(mode)
                    />
                    <a
                        href="/launch"
                        class="whitespace-nowrap rounded-full bg-gradient-to-r from-purple-500 to-blue-500 px-4 py-2 text-sm font-medium text-white hover:opacity-90"
                    >
                        {format!("Start a {} campaign", mode.label())}
                    </a>
                </div>

                <div class="mx-auto mb-12 max-w-6xl">
                    <WalletPanel state=state />
                    {panel}
                </div>

                <h2 class="mb-4 text-xl font-semibold">{format!("{} ideas", mode.label())}</h2>
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
