use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::config::BUILD_TIME;
use crate::data::SOCIAL_LINKS;
use crate::routing::{BasePath, Route};

#[component]
pub fn Footer() -> impl IntoView {
    let base = expect_context::<BasePath>();
    let built = DateTime::parse_from_rfc3339(BUILD_TIME).ok();
    let year = built.map(|d| d.year()).unwrap_or(2024);

    view! {
        <footer class="relative mt-20 bg-gradient-to-b from-gray-900 to-black">
            <div class="absolute top-0 left-0 w-full h-px bg-gradient-to-r from-transparent via-blue-500 to-transparent opacity-20" />
            <div class="max-w-7xl mx-auto px-4 py-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12 mb-12">
                    <div class="space-y-4">
                        <h3 class="text-white font-bold">"KashVenture"</h3>
                        <p class="text-gray-400 text-sm">
                            "Building digital experiences with clean code and careful design."
                        </p>
                    </div>
                    <div>
                        <h4 class="text-white font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {Route::ALL
                                .into_iter()
                                .map(|route| {
                                    view! {
                                        <li>
                                            <a
                                                href=base.format_path(route.path())
                                                class="text-gray-400 hover:text-white transition-colors"
                                            >
                                                {route.label()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-white font-semibold mb-4">"Connect"</h4>
                        <ul class="space-y-2">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="text-gray-400 hover:text-white transition-colors"
                                            >
                                                {link.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
                <div class="pt-8 border-t border-gray-800 flex flex-col md:flex-row justify-between gap-4 text-sm text-gray-500">
                    <p>{format!("© {year} KashVenture Inc. All rights reserved.")}</p>
                    {built
                        .map(|d| {
                            view! { <p>"Built " {d.format("%Y-%m-%d").to_string()}</p> }
                        })}
                </div>
            </div>
        </footer>
    }
}
