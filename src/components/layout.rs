use crate::components::header::Header;
use leptos::prelude::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col dark:bg-[#121212]">
            <div class="flex flex-1 flex-col">
                <Header />
                <div aria-hidden="true" class="h-3 bg-transparent dark:bg-gradient-to-b dark:from-white/5 dark:to-transparent"></div>
                <main class="mx-auto w-full max-w-screen-2xl flex-1 px-4 pt-8 md:pt-10 lg:px-12">
                    {children()}
                </main>
                <footer class="mx-auto w-full max-w-screen-2xl px-4 py-8 text-xs text-gray-400 lg:px-12">
                    "Have an Idea · ideas stored on-chain, indexed off-chain"
                </footer>
            </div>
        </div>
    }
}
