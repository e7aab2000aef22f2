use crate::components::dropdown::Dropdown;
use crate::components::ui::{Button, ButtonSize};
use crate::ideas::display::short_address;
use crate::launch::CrowdfundingMode;
use crate::state::{AppContext, ThemePreference};
use crate::wallet;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;
use strum::IntoEnumIterator;

const NAV_ITEMS: [(&str, &str); 3] = [("IDEAS", "/"), ("LAUNCH", "/launch"), ("ABOUT", "/about")];

const PILL: &str = "rounded-full px-3 py-1.5 text-sm transition-colors";
const PILL_ACTIVE: &str = "bg-gray-900 text-white dark:bg-white dark:text-black";
const PILL_IDLE: &str =
    "text-gray-700 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-800";

fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/" || pathname.starts_with("/ideas");
    }
    pathname == href || pathname.starts_with(&format!("{href}/"))
}

fn pill_class(active: bool) -> String {
    format!("{PILL} {}", if active { PILL_ACTIVE } else { PILL_IDLE })
}

#[component]
fn ThemeMenu() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let theme = app_state.0.theme;

    view! {
        <Dropdown
            trigger=move || if theme.is_dark() { "🌙" } else { "☀️" }
            trigger_class="flex h-8 w-8 items-center justify-center rounded-full hover:bg-gray-100 dark:hover:bg-gray-800"
            aria_label="Theme"
            menu_class="right-0 w-56"
        >
            {ThemePreference::iter()
                .map(|pref| {
                    view! {
                        <button
                            type="button"
                            role="menuitemradio"
                            aria-checked=move || (theme.preference.get() == pref).to_string()
                            class=move || format!(
                                "flex w-full items-center gap-3 rounded-lg px-3 py-2 text-sm hover:bg-gray-100 dark:hover:bg-gray-800 {}",
                                if theme.preference.get() == pref { "bg-gray-100 dark:bg-gray-800" } else { "" },
                            )
                            on:click=move |_| theme.set(pref)
                        >
                            <span>{pref.icon()}</span>
                            <span class="flex-1 text-left">{pref.label()}</span>
                            <Show when=move || theme.preference.get() == pref>
                                <span aria-hidden="true" class="ml-2 inline-block h-1.5 w-1.5 rounded-full bg-blue-500"></span>
                            </Show>
                        </button>
                    }
                })
                .collect_view()}
        </Dropdown>
    }
}

#[component]
fn WalletButton() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let connecting = RwSignal::new(false);

    let on_connect = move |_: web_sys::MouseEvent| {
        if connecting.get_untracked() {
            return;
        }
        connecting.set(true);
        app_state.0.wallet_error.set(None);
        spawn_local(async move {
            match wallet::connect().await {
                Ok(addr) => app_state.0.set_wallet(Some(addr)),
                Err(e) => {
                    log::warn!("wallet connect failed: {e}");
                    app_state.0.wallet_error.set(Some(e.to_string()));
                }
            }
            connecting.set(false);
        });
    };

    view! {
        <Button
            size=ButtonSize::Pill
            attr:disabled=move || connecting.get()
            attr:title=move || app_state.0.wallet_address.get().unwrap_or_default()
            on:click=on_connect
        >
            {move || match app_state.0.wallet_address.get() {
                Some(addr) => short_address(&addr),
                None if connecting.get() => "CONNECTING...".to_string(),
                None => "WALLET".to_string(),
            }}
        </Button>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let location = use_location();
    let pathname = move || location.pathname.get();

    let tools_active = move || {
        let p = pathname();
        CrowdfundingMode::iter().any(|m| p == m.tool_path())
    };

    view! {
        <header class="sticky top-0 z-40 border-b border-gray-100 bg-white/85 backdrop-blur dark:border-gray-800 dark:bg-[#121212]/85">
            <div class="mx-auto max-w-screen-2xl px-4 py-4 lg:px-12">
                <div class="grid grid-cols-3 items-center">
                    <a href="/" class="flex items-center gap-2">
                        <span class="select-none bg-gradient-to-r from-blue-600 to-emerald-600 bg-clip-text text-xl font-semibold leading-none tracking-tight text-transparent md:text-2xl dark:from-sky-400 dark:to-emerald-300">
                            "HAVE AN IDEA"
                        </span>
                    </a>

                    <nav class="hidden items-center justify-center gap-2 md:flex">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|(name, href)| {
                                view! {
                                    <a href=href class=move || pill_class(is_active(&pathname(), href))>
                                        {name}
                                    </a>
                                }
                            })
                            .collect_view()}

                        <Dropdown
                            trigger=|| "TOOLS"
                            trigger_class=Signal::derive(move || format!("{} flex items-center gap-1", pill_class(tools_active())))
                            menu_class="left-0 top-full w-64"
                            chevron=true
                        >
                            {CrowdfundingMode::iter()
                                .map(|mode| {
                                    view! {
                                        <a
                                            href=mode.tool_path()
                                            class="block rounded-lg p-3 transition-colors hover:bg-gray-100 dark:hover:bg-gray-800"
                                        >
                                            <div class="text-sm font-medium">
                                                {format!("{} {}", mode.tool_icon(), mode.tool_name())}
                                            </div>
                                            <div class="mt-1 text-xs text-gray-500 dark:text-gray-400">
                                                {mode.tool_tagline()}
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </Dropdown>
                    </nav>

                    <div class="flex items-center justify-end gap-2 md:gap-3">
                        <ThemeMenu />
                        <WalletButton />
                    </div>
                </div>

                {move || app_state.0.wallet_error.get().map(|e| view! {
                    <p class="mt-2 text-right text-xs text-red-600 dark:text-red-400">{e}</p>
                })}
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_active_matching() {
        assert!(is_active("/", "/"));
        assert!(is_active("/ideas/4", "/"));
        assert!(!is_active("/launch", "/"));
        assert!(is_active("/launch", "/launch"));
        assert!(!is_active("/launchpad", "/launch"));
        assert!(is_active("/about/team", "/about"));
    }
}
