use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "flex flex-col gap-4 rounded-2xl border border-gray-200 bg-white/90 py-6 shadow-sm backdrop-blur dark:border-gray-800 dark:bg-[#0f1115]/90"}
    clx! {CardHeader, div, "flex flex-col items-start gap-1.5 px-6"}
    clx! {CardTitle, h2, "text-lg leading-none font-semibold"}
    clx! {CardContent, div, "px-6"}
    clx! {CardDescription, p, "text-sm text-gray-500 dark:text-gray-400"}
    clx! {CardList, ul, "flex flex-col gap-3"}
    clx! {CardItem, li, "flex items-start gap-3"}
}

pub use components::*;
