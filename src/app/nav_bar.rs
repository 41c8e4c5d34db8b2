use leptos::{either::Either, prelude::*};
use leptos_router::hooks::use_location;
use leptos_use::use_window_scroll;

use crate::config::GITHUB_URL;
use crate::routing::{BasePath, Route};

#[component]
pub fn NavBar() -> impl IntoView {
    let base = expect_context::<BasePath>();
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();
    let pathname = use_location().pathname;

    // the router may or may not hand back the base path, so clean it either way
    let is_active = move |route: Route| route.is_active(&base.clean_path(&pathname.get()));

    let nav_link = move |route: Route, mobile: bool| {
        let class = move || {
            let active = is_active(route);
            match (mobile, active) {
                (false, true) => "px-3 py-2 rounded-md text-sm font-medium text-white bg-blue-500/20 hover:bg-blue-500/30",
                (false, false) => "px-3 py-2 rounded-md text-sm font-medium text-gray-300 hover:text-white hover:bg-gray-800/50",
                (true, true) => "block px-3 py-2 rounded-md text-base font-medium text-white bg-blue-500/20",
                (true, false) => "block px-3 py-2 rounded-md text-base font-medium text-gray-300 hover:bg-gray-800 hover:text-white",
            }
        };
        view! {
            <a
                href=base.format_path(route.path())
                class=class
                aria-current=move || is_active(route).then_some("page")
                on:click=move |_| set_menu_open.set(false)
            >
                {route.label()}
            </a>
        }
    };

    view! {
        <nav class=move || {
            if scroll_y.get() > 10.0 {
                "fixed top-0 left-0 right-0 z-40 transition-all duration-300 bg-black/80 backdrop-blur-md shadow-md"
            } else {
                "fixed top-0 left-0 right-0 z-40 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6">
                <div class="flex justify-between items-center py-4 md:justify-start md:space-x-10">
                    <div class="flex justify-start lg:w-0 lg:flex-1">
                        <a href=base.format_path(Route::Home.path()) class="text-2xl font-bold text-white">
                            "Akash"
                            <span class="text-blue-500">".dev"</span>
                        </a>
                    </div>
                    <div class="md:hidden">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center p-2 rounded-md text-gray-300 hover:text-white focus:outline-none"
                            aria-controls="mobile-menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <span class="sr-only">"Open main menu"</span>
                            {move || {
                                if menu_open.get() {
                                    Either::Left(view! { <span class="text-2xl">"✕"</span> })
                                } else {
                                    Either::Right(view! { <span class="text-2xl">"☰"</span> })
                                }
                            }}
                        </button>
                    </div>
                    <div class="hidden md:flex items-center justify-end md:flex-1 lg:w-0">
                        <div class="ml-10 flex items-baseline space-x-4">
                            {Route::ALL.into_iter().map(|route| nav_link(route, false)).collect_view()}
                            <a
                                href=GITHUB_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="ml-8 whitespace-nowrap inline-flex items-center justify-center px-4 py-2 rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700"
                            >
                                "GitHub"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
            <div
                id="mobile-menu"
                class=move || {
                    if menu_open.get() {
                        "md:hidden overflow-hidden bg-gray-900"
                    } else {
                        "hidden"
                    }
                }
            >
                <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">
                    {Route::ALL.into_iter().map(|route| nav_link(route, true)).collect_view()}
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="block px-3 py-2 rounded-md text-base font-medium text-white bg-blue-600 hover:bg-blue-700 mt-4"
                    >
                        "GitHub"
                    </a>
                </div>
            </div>
        </nav>
    }
}
