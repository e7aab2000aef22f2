mod about;
mod home;
mod idea_detail;
mod launch;
mod tools;

pub use about::AboutPage;
pub use home::HomePage;
pub use idea_detail::IdeaDetailPage;
pub use launch::LaunchPage;
pub use tools::ToolPage;

use crate::api::IdeaFilter;
use crate::models::Idea;
use crate::state::{AppContext, RequestLatch};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Idea list plus its load state.
#[derive(Clone, Copy)]
pub(crate) struct IdeasResource {
    pub ideas: RwSignal<Vec<Idea>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

/// Fetch `GET /ideas` whenever `filter` changes.
///
/// Responses that arrive after a newer fetch started, or after the calling
/// component unmounted, are dropped.
pub(crate) fn use_ideas(filter: impl Fn() -> IdeaFilter + 'static) -> IdeasResource {
    let app_state = expect_context::<AppContext>();
    let res = IdeasResource {
        ideas: RwSignal::new(vec![]),
        loading: RwSignal::new(true),
        error: RwSignal::new(None),
    };

    let latch = RequestLatch::new();
    {
        let latch = latch.clone();
        on_cleanup(move || latch.invalidate());
    }

    Effect::new(move |_| {
        let f = filter();
        let ticket = latch.begin();
        res.loading.set(true);
        res.error.set(None);

        let api_client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            let result = api_client.get_ideas(&f).await;

            // Ignore stale responses.
            if !ticket.is_current() {
                return;
            }

            match result {
                Ok(list) => res.ideas.set(list),
                Err(e) => {
                    log::warn!("failed to load ideas: {e}");
                    app_state.0.note_api_error(&e);
                    res.ideas.set(vec![]);
                    res.error.set(Some(e.to_string()));
                }
            }
            res.loading.set(false);
        });
    });

    res
}

/// Gradient page title used across pages.
#[component]
pub(crate) fn PageHeading(
    #[prop(into)] title: String,
    #[prop(into, optional)] subtitle: String,
) -> impl IntoView {
    view! {
        <div class="animate-in slide-in-from-left duration-700">
            <h1 class="bg-gradient-to-r from-blue-600 via-indigo-600 to-purple-600 bg-clip-text text-2xl font-extrabold leading-tight tracking-tight text-transparent md:text-4xl dark:from-blue-400 dark:via-indigo-400 dark:to-purple-400">
                {title}
            </h1>
            {(!subtitle.is_empty()).then(|| view! {
                <p class="mt-1 text-[13.5px] text-gray-600 md:text-base dark:text-gray-300">{subtitle}</p>
            })}
        </div>
    }
}
