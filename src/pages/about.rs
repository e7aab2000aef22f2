use crate::components::Layout;
use leptos::prelude::*;

const STEPS: [(&str, &str, &str); 4] = [
    ("💡", "Share", "Describe your idea and give it an icon. It is pinned to IPFS."),
    ("⛓️", "Deploy", "A registry entry or crowdfunding contract timestamps your authorship on-chain."),
    ("🤝", "Fund", "Supporters mint NFTs, buy tokens, join the DAO, or reserve presale spots."),
    ("📈", "Grow", "Revenue share and governance keep creators and backers aligned."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="relative overflow-hidden">
                <div class="pointer-events-none absolute inset-0 -z-10">
                    <div class="absolute -left-24 -top-24 h-80 w-80 rounded-full bg-gradient-to-br from-sky-500/10 to-violet-500/10 blur-3xl"></div>
                    <div class="absolute -bottom-24 -right-24 h-96 w-96 rounded-full bg-gradient-to-tr from-emerald-500/10 to-indigo-500/10 blur-3xl"></div>
                </div>

                <div class="px-4 py-10 md:px-6 md:py-14">
                    <header class="mb-8 text-center md:mb-12">
                        <h1 class="text-3xl font-extrabold tracking-tight md:text-4xl">"About HAVE AN IDEA"</h1>
                        <p class="mx-auto mt-3 max-w-3xl text-gray-600 dark:text-gray-300">
                            "A blockchain platform for protecting and monetizing personal inspirations. Every idea can be verified, owned, traded, and collaborated on."
                        </p>
                    </header>

                    <section class="mb-10 md:mb-12">
                        <div class="relative rounded-2xl border border-gray-200/60 bg-white/80 p-5 backdrop-blur md:p-7 dark:border-[#2a2c31] dark:bg-[#15161a]/80">
                            <h2 class="mb-3 text-lg font-bold md:text-xl">"Our Vision"</h2>
                            <div class="space-y-3 text-sm leading-7 text-gray-700 md:text-[15px] dark:text-gray-300">
                                <p>
                                    "Every brilliant idea deserves protection and the chance to flourish. We're building a platform where inspirations are timestamped, verified, and transformed into tradeable assets."
                                </p>
                                <p>
                                    "Through NFT technology, creators can establish ownership, monetize their concepts, and collaborate with others while keeping provable authorship of their original ideas."
                                </p>
                            </div>
                        </div>
                    </section>

                    <section class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                        {STEPS
                            .into_iter()
                            .map(|(icon, title, body)| view! {
                                <div class="rounded-2xl border border-gray-200 bg-white p-5 dark:border-gray-800 dark:bg-[#15171b]">
                                    <div class="mb-2 text-3xl">{icon}</div>
                                    <h3 class="mb-1 font-semibold">{title}</h3>
                                    <p class="text-sm text-gray-600 dark:text-gray-400">{body}</p>
                                </div>
                            })
                            .collect_view()}
                    </section>

                    <div class="mt-10 text-center">
                        <a href="/launch" class="inline-flex rounded-full bg-black px-5 py-2.5 text-sm font-medium text-white dark:bg-white dark:text-black">
                            "Launch your idea"
                        </a>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
