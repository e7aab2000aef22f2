use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, ErrorAlert, Input, Label, Spinner, SuccessAlert, Textarea,
};
use crate::components::Layout;
use crate::ideas::display::short_address;
use crate::launch::form::{MAX_DESCRIPTION_LEN, MAX_TOKEN_SYMBOL_LEN};
use crate::launch::{
    run_submission, validate_icon, AssetUploader, CrowdfundingMode, IconFile, LaunchForm,
    SimulatedDeployer, SimulatedIpfs, SubmitError,
};
use crate::state::AppContext;
use crate::util::now_ms;
use crate::wallet;
use leptos::prelude::*;
use leptos::task::spawn_local;
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Text fields of the launch form, one signal each.
#[derive(Clone, Copy)]
struct FormFields {
    title: RwSignal<String>,
    description: RwSignal<String>,
    tags: RwSignal<String>,
    crowdfunding: RwSignal<bool>,
    mode: RwSignal<CrowdfundingMode>,
    price: RwSignal<String>,
    revenue_share: RwSignal<String>,
    goal: RwSignal<String>,
    token_symbol: RwSignal<String>,
    twitter: RwSignal<String>,
    discord: RwSignal<String>,
    telegram: RwSignal<String>,
    icon: RwSignal<Option<IconFile>>,
}

impl FormFields {
    fn new() -> Self {
        let d = LaunchForm::default();
        Self {
            title: RwSignal::new(d.title),
            description: RwSignal::new(d.description),
            tags: RwSignal::new(d.tags),
            crowdfunding: RwSignal::new(d.crowdfunding),
            mode: RwSignal::new(d.mode),
            price: RwSignal::new(d.price),
            revenue_share: RwSignal::new(d.revenue_share),
            goal: RwSignal::new(d.goal),
            token_symbol: RwSignal::new(d.token_symbol),
            twitter: RwSignal::new(d.twitter),
            discord: RwSignal::new(d.discord),
            telegram: RwSignal::new(d.telegram),
            icon: RwSignal::new(d.icon),
        }
    }

    fn snapshot(&self, wallet: String) -> LaunchForm {
        LaunchForm {
            wallet,
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            tags: self.tags.get_untracked(),
            icon: self.icon.get_untracked(),
            crowdfunding: self.crowdfunding.get_untracked(),
            mode: self.mode.get_untracked(),
            price: self.price.get_untracked(),
            revenue_share: self.revenue_share.get_untracked(),
            goal: self.goal.get_untracked(),
            token_symbol: self.token_symbol.get_untracked(),
            twitter: self.twitter.get_untracked(),
            discord: self.discord.get_untracked(),
            telegram: self.telegram.get_untracked(),
        }
    }

    fn reset(&self) {
        let d = LaunchForm::default();
        set_icon(self.icon, None);
        self.title.set(d.title);
        self.description.set(d.description);
        self.tags.set(d.tags);
        self.crowdfunding.set(d.crowdfunding);
        self.mode.set(d.mode);
        self.price.set(d.price);
        self.revenue_share.set(d.revenue_share);
        self.goal.set(d.goal);
        self.token_symbol.set(d.token_symbol);
        self.twitter.set(d.twitter);
        self.discord.set(d.discord);
        self.telegram.set(d.telegram);
    }
}

/// Replace the selected icon, releasing the previous preview URL.
fn set_icon(icon: RwSignal<Option<IconFile>>, next: Option<IconFile>) {
    if let Some(url) = icon.get_untracked().and_then(|i| i.preview_url) {
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    icon.set(next);
}

async fn read_icon(file: web_sys::File) -> Result<IconFile, String> {
    validate_icon(file.size() as u64, &file.type_()).map_err(|e| e.to_string())?;

    let buf = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Could not read the selected file".to_string())?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();
    let preview_url = web_sys::Url::create_object_url_with_blob(&file).ok();

    Ok(IconFile {
        name: file.name(),
        mime: file.type_(),
        bytes,
        preview_url,
    })
}

#[component]
fn SuccessDialog(mode: RwSignal<Option<CrowdfundingMode>>) -> impl IntoView {
    view! {
        {move || mode.get().map(|m| view! {
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4" role="dialog" aria-modal="true">
                <div class="w-full max-w-md rounded-2xl bg-white p-6 text-center shadow-xl dark:bg-[#1a1d23]">
                    <div class="mb-3 text-5xl">"🎉"</div>
                    <h2 class="mb-2 text-xl font-bold">"Campaign Deployed!"</h2>
                    <p class="mb-6 text-sm text-gray-600 dark:text-gray-300">
                        {format!("Your {} campaign is live. Manage it from the {}.", m.label(), m.tool_name())}
                    </p>
                    <div class="flex flex-col gap-2 sm:flex-row sm:justify-center">
                        <a
                            href=m.tool_path()
                            class="inline-flex h-9 items-center justify-center rounded-md bg-gradient-to-r from-purple-500 to-blue-500 px-4 text-sm font-medium text-white hover:opacity-90"
                        >
                            {format!("Go to {}", m.tool_name())}
                        </a>
                        <Button variant=ButtonVariant::Outline on:click=move |_: web_sys::MouseEvent| mode.set(None)>
                            "Stay Here"
                        </Button>
                    </div>
                </div>
            </div>
        })}
    }
}

#[component]
fn FieldBlock(children: Children) -> impl IntoView {
    view! { <div class="flex flex-col">{children()}</div> }
}

#[component]
pub fn LaunchPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let fields = FormFields::new();

    let submitting = RwSignal::new(false);
    let connecting = RwSignal::new(false);
    let message: RwSignal<Option<String>> = RwSignal::new(None);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let deployed_mode: RwSignal<Option<CrowdfundingMode>> = RwSignal::new(None);

    on_cleanup(move || set_icon(fields.icon, None));

    let on_connect = move |_: web_sys::MouseEvent| {
        connecting.set(true);
        error.set(None);
        spawn_local(async move {
            match wallet::connect().await {
                Ok(addr) => app_state.0.set_wallet(Some(addr)),
                Err(e) => error.set(Some(e.to_string())),
            }
            connecting.set(false);
        });
    };

    let on_icon_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        error.set(None);
        spawn_local(async move {
            match read_icon(file).await {
                Ok(icon) => set_icon(fields.icon, Some(icon)),
                Err(e) => error.set(Some(e)),
            }
        });
        // Allow picking the same file again after a rejection.
        input.set_value("");
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        message.set(None);
        error.set(None);

        let wallet = app_state.0.wallet_address.get_untracked().unwrap_or_default();
        let form = fields.snapshot(wallet);
        let client = app_state.0.api_client.get_untracked();

        submitting.set(true);
        spawn_local(async move {
            let simulated = SimulatedIpfs::default();
            let uploader: &dyn AssetUploader = if client.is_mock() { &simulated } else { &client };
            let deployer = SimulatedDeployer::new();

            let result = run_submission(&form, uploader, &deployer, &client, now_ms(), &|stage| {
                message.set(Some(stage.message().to_string()))
            })
            .await;

            match result {
                Ok(outcome) => {
                    message.set(Some(outcome.message()));
                    if outcome.mode.is_some() {
                        deployed_mode.set(outcome.mode);
                    }
                    fields.reset();
                }
                Err(e) => {
                    if let SubmitError::Persist(api_err) | SubmitError::Upload(api_err) = &e {
                        app_state.0.note_api_error(api_err);
                    }
                    if !e.is_validation() {
                        log::warn!("launch failed: {e}");
                    }
                    message.set(None);
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    let crowdfunding_section = move || {
        fields.crowdfunding.get().then(|| view! {
            <div class="space-y-5 rounded-xl border border-gray-200 p-4 dark:border-gray-700">
                <div>
                    <Label>"Crowdfunding Model"</Label>
                    <div class="mt-1 grid grid-cols-1 gap-2 sm:grid-cols-2">
                        {CrowdfundingMode::iter()
                            .map(|m| view! {
                                <label class="flex cursor-pointer items-center gap-2 rounded-lg border p-3 hover:bg-gray-50 dark:border-gray-600 dark:hover:bg-gray-800">
                                    <input
                                        type="radio"
                                        name="crowdfundingMode"
                                        value=m.to_string()
                                        prop:checked=move || fields.mode.get() == m
                                        on:change=move |_| fields.mode.set(m)
                                    />
                                    <span class="text-sm">{format!("{} {}", m.tool_icon(), m.label())}</span>
                                </label>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                    <FieldBlock>
                        <Label html_for="price" required=true>
                            {move || fields.mode.get().price_label()}
                        </Label>
                        <Input id="price" r#type="number" placeholder="0.1" bind_value=fields.price />
                    </FieldBlock>
                    <FieldBlock>
                        <Label html_for="goal">"Funding Goal (ETH)"</Label>
                        <Input id="goal" r#type="number" placeholder="10" bind_value=fields.goal />
                    </FieldBlock>
                </div>

                <Show when=move || fields.mode.get() == CrowdfundingMode::Token>
                    <FieldBlock>
                        <Label html_for="token-symbol" required=true>"Token Symbol"</Label>
                        <Input
                            id="token-symbol"
                            placeholder="IDEA"
                            uppercase=true
                            max_length=MAX_TOKEN_SYMBOL_LEN
                            bind_value=fields.token_symbol
                        />
                    </FieldBlock>
                </Show>

                <FieldBlock>
                    <Label html_for="revenue-share">"Revenue Share to Supporters (%)"</Label>
                    <Input id="revenue-share" r#type="number" placeholder="10" bind_value=fields.revenue_share />
                </FieldBlock>

                <div>
                    <Label>"Creator Contact (Required for Crowdfunding)"</Label>
                    <div class="space-y-2">
                        <Input placeholder="Twitter/X handle (e.g., @username)" bind_value=fields.twitter />
                        <Input placeholder="Discord username (e.g., username#1234)" bind_value=fields.discord />
                        <Input placeholder="Telegram handle (e.g., @username)" bind_value=fields.telegram />
                    </div>
                </div>
            </div>
        })
    };

    view! {
        <Layout>
            <div class="mx-auto max-w-screen-2xl py-8 pb-24 md:py-12 lg:pb-16">
                <div class="mb-8 text-center md:mb-12">
                    <h1 class="mb-3 bg-gradient-to-r from-blue-600 via-indigo-600 to-emerald-600 bg-clip-text text-3xl font-extrabold leading-tight tracking-tight text-transparent md:text-5xl dark:from-sky-400 dark:via-indigo-400 dark:to-emerald-300">
                        "Launch · Deploy Your Idea On-Chain"
                    </h1>
                    <p class="mx-auto max-w-2xl text-[13.5px] leading-relaxed text-gray-600 md:text-base dark:text-gray-300">
                        "Store your idea permanently on blockchain with IPFS. Immutable, verifiable, and truly decentralized ownership."
                    </p>
                </div>

                <div class="relative mx-auto max-w-2xl">
                    <div class="absolute -inset-1 rounded-2xl bg-gradient-to-r from-emerald-400/70 via-sky-500/70 to-fuchsia-600/70 opacity-35 blur-2xl"></div>
                    <div class="relative rounded-2xl border border-gray-200 bg-white/90 px-6 py-7 shadow-sm backdrop-blur md:px-7 md:py-8 dark:border-violet-500/40 dark:bg-[#0f1115]/90">
                        <form class="space-y-5 md:space-y-6" on:submit=on_submit>
                            {move || error.get().map(|e| view! { <ErrorAlert message=e /> })}
                            {move || message.get().map(|m| view! { <SuccessAlert message=m /> })}

                            <FieldBlock>
                                <Label required=true>"Wallet Address"</Label>
                                {move || match app_state.0.wallet_address.get() {
                                    Some(addr) => view! {
                                        <div class="flex items-center justify-between rounded-md border border-emerald-200 bg-emerald-50 px-4 py-2.5 text-sm dark:border-emerald-900/50 dark:bg-emerald-950/30">
                                            <span class="font-mono" title=addr.clone()>{short_address(&addr)}</span>
                                            <span class="text-xs text-emerald-600 dark:text-emerald-400">"Connected"</span>
                                        </div>
                                    }
                                    .into_any(),
                                    None => view! {
                                        <button
                                            type="button"
                                            class="inline-flex h-10 w-full items-center justify-center rounded-md bg-gradient-to-r from-purple-500 to-blue-500 text-sm font-medium text-white hover:opacity-90 disabled:opacity-50"
                                            disabled=move || connecting.get()
                                            on:click=on_connect
                                        >
                                            {move || if connecting.get() { "Connecting..." } else { "🦊 Connect Wallet" }}
                                        </button>
                                    }
                                    .into_any(),
                                }}
                            </FieldBlock>

                            <FieldBlock>
                                <Label html_for="title" required=true>"Idea Title"</Label>
                                <Input id="title" placeholder="Give your idea a catchy title" bind_value=fields.title />
                            </FieldBlock>

                            <FieldBlock>
                                <Label required=true>"Idea Icon"</Label>
                                <div class="flex items-center gap-4">
                                    <div class="flex h-16 w-16 items-center justify-center overflow-hidden rounded-xl border-2 border-dashed border-gray-300 dark:border-gray-600">
                                        {move || match fields.icon.get().and_then(|i| i.preview_url) {
                                            Some(url) => view! { <img src=url alt="Icon preview" class="h-full w-full object-cover" /> }.into_any(),
                                            None => view! { <span class="text-2xl text-gray-400">"📷"</span> }.into_any(),
                                        }}
                                    </div>
                                    <label class="cursor-pointer rounded-md border border-gray-200 px-4 py-2 text-sm hover:bg-gray-50 dark:border-gray-700 dark:hover:bg-gray-800">
                                        {move || if fields.icon.get().is_some() { "Change Icon" } else { "Upload Icon" }}
                                        <input type="file" accept="image/*" class="hidden" on:change=on_icon_change />
                                    </label>
                                    <span class="text-xs text-gray-500">"PNG, JPG, SVG up to 2MB"</span>
                                </div>
                            </FieldBlock>

                            <FieldBlock>
                                <Label html_for="tags">"Tags"</Label>
                                <Input id="tags" placeholder="e.g. DeFi, NFT, Gaming, AI (comma separated)" bind_value=fields.tags />
                            </FieldBlock>

                            <FieldBlock>
                                <div class="flex items-center justify-between">
                                    <Label html_for="description" required=true>"Your Idea & Requirements"</Label>
                                    <span class="text-xs text-gray-500 dark:text-gray-400">
                                        {move || format!("{}/{}", fields.description.with(|d| d.chars().count()), MAX_DESCRIPTION_LEN)}
                                    </span>
                                </div>
                                <Textarea
                                    id="description"
                                    rows=6
                                    max_chars=MAX_DESCRIPTION_LEN
                                    placeholder="Briefly describe your idea, target audience, timeline, and any resources you need"
                                    bind_value=fields.description
                                />
                            </FieldBlock>

                            <div class="flex items-center gap-2">
                                <input
                                    id="enableCrowdfunding"
                                    type="checkbox"
                                    class="h-4 w-4"
                                    prop:checked=move || fields.crowdfunding.get()
                                    on:change=move |ev| fields.crowdfunding.set(event_target_checked(&ev))
                                />
                                <label for="enableCrowdfunding" class="text-sm font-medium text-gray-700 dark:text-gray-200">
                                    "💰 Enable crowdfunding for this idea"
                                </label>
                            </div>

                            {crowdfunding_section}

                            <Button
                                variant=ButtonVariant::Launch
                                size=ButtonSize::Lg
                                class="w-full"
                                attr:disabled=move || submitting.get()
                            >
                                <Show when=move || submitting.get()>
                                    <Spinner />
                                </Show>
                                {move || if submitting.get() { "Deploying..." } else { "🚀 Deploy to Blockchain" }}
                            </Button>
                        </form>
                    </div>
                </div>
            </div>
            <SuccessDialog mode=deployed_mode />
        </Layout>
    }
}
