use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Button {
        base: "inline-flex items-center justify-center gap-2 whitespace-nowrap text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:ring-2 focus-visible:ring-indigo-400/40 hover:cursor-pointer active:scale-[0.98] touch-manipulation select-none",
        variants: {
            variant: {
                Default: "bg-black text-white hover:bg-gray-800 dark:bg-white dark:text-black dark:hover:bg-gray-200",
                Gradient: "bg-gradient-to-r from-purple-500 to-blue-500 text-white hover:opacity-90",
                Launch: "bg-gradient-to-r from-emerald-500 via-sky-500 to-indigo-600 text-white shadow hover:opacity-95",
                Outline: "border border-gray-200 bg-white text-gray-700 hover:bg-gray-50 dark:border-gray-700 dark:bg-transparent dark:text-gray-200 dark:hover:bg-gray-800",
                Ghost: "text-gray-700 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-800",
                Chip: "border border-gray-200 text-gray-700 hover:bg-gray-100 dark:border-gray-700 dark:text-gray-300 dark:hover:bg-gray-800",
                ChipActive: "border border-gray-900 bg-gray-900 text-white dark:border-white dark:bg-white dark:text-black",
                Link: "text-indigo-600 underline-offset-4 hover:underline dark:text-indigo-400",
            },
            size: {
                Default: "h-9 rounded-md px-4 py-2",
                Sm: "h-8 rounded-md gap-1.5 px-3",
                Lg: "h-11 rounded-lg px-6 text-base",
                Icon: "size-8 rounded-full",
                Pill: "rounded-full px-3 py-1.5",
            }
        },
        component: {
            element: button,
            support_href: true,
            support_aria_current: true
        }
    }
}
