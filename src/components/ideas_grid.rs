use crate::components::idea_card::IdeaCard;
use crate::components::ui::{Button, ButtonSize, ButtonVariant, ErrorAlert, Spinner};
use crate::ideas::filter::page_numbers;
use crate::ideas::{select, IdeaQuery, Pager, GRID_PAGE_SIZE};
use crate::models::Idea;
use crate::util::now_ms;
use leptos::prelude::*;

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16 text-center">
            <div class="mb-4 text-6xl">"💡"</div>
            <h3 class="mb-2 text-xl font-semibold text-gray-700 dark:text-gray-300">"No ideas found"</h3>
            <p class="max-w-md text-gray-500 dark:text-gray-400">
                "Try adjusting your filters or be the first to submit an idea in this category."
            </p>
        </div>
    }
}

/// Filtered, paged card grid. The page resets to 1 whenever `query` changes.
#[component]
pub fn IdeasGrid(
    #[prop(into)] ideas: Signal<Vec<Idea>>,
    #[prop(into)] query: Signal<IdeaQuery>,
    #[prop(into, optional)] loading: Signal<bool>,
    #[prop(into, optional)] error: Signal<Option<String>>,
    #[prop(default = GRID_PAGE_SIZE)] page_size: usize,
) -> impl IntoView {
    let pager = RwSignal::new(Pager::default());

    Effect::new(move |_| {
        let q = query.get();
        let mut next = pager.get_untracked();
        if next.reset_for(&q) {
            pager.set(next);
        }
    });

    let selection = Memo::new(move |_| {
        ideas.with(|all| query.with(|q| select(all, q, pager.get().page(), page_size)))
    });
    let total_pages = move || selection.with(|s| s.total_pages);

    let go = move |page: usize| {
        let total = total_pages();
        pager.update(|p| p.go(page, total));
    };

    view! {
        <div class="flex flex-col gap-6">
            {move || error.get().map(|e| view! { <ErrorAlert message=e /> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center justify-center gap-2 py-16 text-sm text-gray-500">
                        <Spinner />
                        "Loading ideas..."
                    </div>
                }
            >
                <Show
                    when=move || selection.with(|s| !s.page_items.is_empty())
                    fallback=|| view! { <EmptyState /> }
                >
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 md:gap-6 lg:grid-cols-3 xl:grid-cols-4">
                        {move || {
                            let now = now_ms();
                            selection
                                .get()
                                .page_items
                                .into_iter()
                                .enumerate()
                                .map(|(i, idea)| {
                                    view! {
                                        <div
                                            class="animate-in slide-in-from-bottom duration-500"
                                            style=format!("animation-delay: {}ms", i * 100)
                                        >
                                            <IdeaCard idea=idea now_ms=now />
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    <Show when=move || { total_pages() > 1 }>
                        <nav class="flex items-center justify-center gap-1" aria-label="Pagination">
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Sm
                                attr:disabled=move || !pager.get().can_prev(total_pages())
                                on:click=move |_| {
                                    let total = total_pages();
                                    pager.update(|p| p.prev(total));
                                }
                            >
                                "Prev"
                            </Button>
                            {move || {
                                let current = selection.with(|s| s.page);
                                page_numbers(total_pages())
                                    .into_iter()
                                    .map(|n| {
                                        let variant = if n == current {
                                            ButtonVariant::ChipActive
                                        } else {
                                            ButtonVariant::Ghost
                                        };
                                        view! {
                                            <Button variant=variant size=ButtonSize::Sm on:click=move |_| go(n)>
                                                {n.to_string()}
                                            </Button>
                                        }
                                    })
                                    .collect_view()
                            }}
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Sm
                                attr:disabled=move || !pager.get().can_next(total_pages())
                                on:click=move |_| {
                                    let total = total_pages();
                                    pager.update(|p| p.next(total));
                                }
                            >
                                "Next"
                            </Button>
                        </nav>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
