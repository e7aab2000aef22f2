use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-lg border px-4 py-3 text-sm"}
    clx! {AlertTitle, h4, "mb-1 font-medium tracking-tight leading-none"}
    clx! {AlertDescription, p, "text-sm leading-relaxed"}
}

pub use components::*;

/// Red inline error line used by forms and fetch failures.
#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <Alert class="border-red-200 bg-red-50 dark:border-red-900/50 dark:bg-red-950/30" attr:role="alert">
            <AlertDescription class="text-red-600 dark:text-red-400">{message}</AlertDescription>
        </Alert>
    }
}

#[component]
pub fn SuccessAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <Alert class="border-emerald-200 bg-emerald-50 dark:border-emerald-900/50 dark:bg-emerald-950/30" attr:role="status">
            <AlertDescription class="text-emerald-600 dark:text-emerald-400">{message}</AlertDescription>
        </Alert>
    }
}
