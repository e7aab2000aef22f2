use crate::launch::CrowdfundingMode;
use crate::pages::{AboutPage, HomePage, IdeaDetailPage, LaunchPage, ToolPage};
use crate::state::{AppContext, AppState};
use crate::wallet;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex min-h-[60vh] flex-col items-center justify-center gap-3 px-4 text-center">
            <div class="text-5xl">"🔍"</div>
            <p class="text-sm text-gray-500 dark:text-gray-400">"Page not found"</p>
            <a href="/" class="text-sm text-indigo-600 hover:underline dark:text-indigo-400">"Back to ideas"</a>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let app_state = AppState::new();
    provide_context(AppContext(app_state));

    app_state.theme.install();

    wallet::on_accounts_changed(move |account| {
        app_state.wallet_address.set(account);
    });
    if app_state.wallet_address.get_untracked().is_some() {
        spawn_local(async move {
            let restored = wallet::restore().await;
            app_state.wallet_address.set(restored);
        });
    }

    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("") view=HomePage />
                <Route path=path!("ideas/:id") view=IdeaDetailPage />
                <Route path=path!("launch") view=LaunchPage />
                // Old misspelled link still in the wild.
                <Route path=path!("lauch") view=|| view! { <Redirect path="/launch" /> } />
                <Route path=path!("about") view=AboutPage />
                <Route path=path!("nft-mint") view=|| view! { <ToolPage mode=CrowdfundingMode::Nft /> } />
                <Route path=path!("token-sale") view=|| view! { <ToolPage mode=CrowdfundingMode::Token /> } />
                <Route path=path!("dao-governance") view=|| view! { <ToolPage mode=CrowdfundingMode::Dao /> } />
                <Route path=path!("presale") view=|| view! { <ToolPage mode=CrowdfundingMode::Presale /> } />
            </Routes>
        </Router>
    }
}
